#![allow(dead_code)]

use sx_core::{NewExchange, OfferedSkill, SkillLevel, User, WantedSkill};
use sx_db::UserRepository;
use sx_engine::{
    ExchangeNotifier, ExchangeService, MatchEngine, SqliteExchangeLedger, SqliteUserDirectory,
};

use std::sync::Arc;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use uuid::Uuid;

/// In-memory SQLite pool with the schema bootstrapped
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

/// Lifecycle service plus its notifier, wired over the given pool
pub fn create_service(pool: &SqlitePool) -> (ExchangeService, Arc<ExchangeNotifier>) {
    let users: Arc<dyn sx_engine::UserDirectory> =
        Arc::new(SqliteUserDirectory::new(pool.clone()));
    let ledger: Arc<dyn sx_engine::ExchangeLedger> =
        Arc::new(SqliteExchangeLedger::new(pool.clone()));
    let notifier = Arc::new(ExchangeNotifier::default());

    let service = ExchangeService::new(users, ledger, notifier.clone());

    (service, notifier)
}

pub fn create_matcher(pool: &SqlitePool) -> MatchEngine {
    let users: Arc<dyn sx_engine::UserDirectory> =
        Arc::new(SqliteUserDirectory::new(pool.clone()));
    MatchEngine::new(users)
}

/// Insert a user offering and wanting the given skill names
pub async fn seed_user(pool: &SqlitePool, name: &str, offered: &[&str], wanted: &[&str]) -> User {
    let mut user = User::new(
        name.to_string(),
        format!("{}-{}@example.com", name.to_lowercase(), Uuid::new_v4()),
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

    UserRepository::new(pool.clone())
        .create(&user)
        .await
        .expect("Failed to seed user");

    user
}

pub fn draft(provider_id: Uuid, points_cost: i64) -> NewExchange {
    NewExchange {
        provider_id,
        skill: "Rust".to_string(),
        description: "Two sessions on ownership".to_string(),
        mode: None,
        location: None,
        scheduled_at: None,
        duration_hours: Some(2),
        points_cost,
    }
}
