#![allow(dead_code)]

use sx_core::{Exchange, NewExchange, OfferedSkill, SkillLevel, User, WantedSkill};

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use uuid::Uuid;

/// In-memory SQLite pool with the schema bootstrapped. Single
/// connection: every connection to :memory: is a distinct database.
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    sx_db::init_schema(&pool)
        .await
        .expect("Failed to init schema");

    pool
}

/// User with one offered and one wanted skill
pub fn create_test_user(name: &str, offered: &str, wanted: &str) -> User {
    let mut user = User::new(
        name.to_string(),
        format!("{}-{}@example.com", name.to_lowercase(), Uuid::new_v4()),
        "$2b$12$opaque".to_string(),
        "Berlin".to_string(),
        Some("Test bio".to_string()),
    );
    user.skills_offered.push(OfferedSkill {
        skill: offered.to_string(),
        level: SkillLevel::Advanced,
        description: Some(format!("{} lessons", offered)),
        hourly_rate: 10,
    });
    user.skills_wanted.push(WantedSkill {
        skill: wanted.to_string(),
        level: SkillLevel::Beginner,
        description: None,
    });
    user
}

pub fn create_test_exchange(requester_id: Uuid, provider_id: Uuid) -> Exchange {
    Exchange::new(
        requester_id,
        NewExchange {
            provider_id,
            skill: "Rust".to_string(),
            description: "Two sessions on ownership".to_string(),
            mode: None,
            location: None,
            scheduled_at: None,
            duration_hours: Some(2),
            points_cost: 50,
        },
    )
}
