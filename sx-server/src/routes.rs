use crate::{health, state::AppState};

use crate::{
    available_skills, create_exchange, create_message, create_user, get_matches, get_user,
    list_exchanges, rate_exchange, search_users, update_profile, update_status,
};

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health))
        // User directory
        .route("/api/v1/users", post(create_user).get(search_users))
        .route("/api/v1/users/profile", put(update_profile))
        .route("/api/v1/users/{id}", get(get_user))
        // Skills and matching
        .route("/api/v1/skills", get(available_skills))
        .route("/api/v1/matches", get(get_matches))
        // Exchange lifecycle
        .route(
            "/api/v1/exchanges",
            post(create_exchange).get(list_exchanges),
        )
        .route("/api/v1/exchanges/{id}/status", put(update_status))
        .route("/api/v1/exchanges/{id}/messages", post(create_message))
        .route("/api/v1/exchanges/{id}/rating", post(rate_exchange))
        // Shared state
        .with_state(state)
        // CORS middleware (the SPA is served from another origin)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
