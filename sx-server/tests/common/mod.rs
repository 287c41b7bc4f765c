#![allow(dead_code)]

//! Test infrastructure for sx-server API tests

use sx_core::{OfferedSkill, SkillLevel, User, WantedSkill};
use sx_db::UserRepository;
use sx_server::AppState;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use http_body_util::BodyExt;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;
use uuid::Uuid;

/// AppState over an in-memory SQLite database
pub async fn create_test_state() -> AppState {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    sx_db::init_schema(&pool)
        .await
        .expect("Failed to run schema init");

    AppState::new(pool)
}

/// Insert a user offering and wanting the given skill names
pub async fn create_test_user(
    state: &AppState,
    name: &str,
    offered: &[&str],
    wanted: &[&str],
) -> User {
    let mut user = User::new(
        name.to_string(),
        format!("{}-{}@test.local", name.to_lowercase(), Uuid::new_v4()),
        "$2b$12$opaque".to_string(),
        "Berlin".to_string(),
        None,
    );
    user.skills_offered = offered
        .iter()
        .map(|skill| OfferedSkill {
            skill: (*skill).to_string(),
            level: SkillLevel::Advanced,
            description: None,
            hourly_rate: 0,
        })
        .collect();
    user.skills_wanted = wanted
        .iter()
        .map(|skill| WantedSkill {
            skill: (*skill).to_string(),
            level: SkillLevel::Beginner,
            description: None,
        })
        .collect();

    UserRepository::new(state.pool.clone())
        .create(&user)
        .await
        .expect("Failed to create test user");

    user
}

/// One-shot a JSON request against a fresh router over `state`
pub async fn send_json(
    state: AppState,
    method: &str,
    uri: &str,
    user_id: Option<Uuid>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let app: Router = sx_server::build_router(state);

    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user_id) = user_id {
        builder = builder.header("X-User-Id", user_id.to_string());
    }

    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.oneshot(request).await.unwrap()
}

/// Collect a response body into JSON
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
