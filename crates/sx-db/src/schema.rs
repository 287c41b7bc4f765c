use crate::Result;

use sqlx::SqlitePool;

const CREATE_USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    location TEXT NOT NULL,
    bio TEXT,
    points INTEGER NOT NULL DEFAULT 100,
    skills_offered TEXT NOT NULL DEFAULT '[]',
    skills_wanted TEXT NOT NULL DEFAULT '[]',
    rating_average REAL NOT NULL DEFAULT 0,
    rating_count INTEGER NOT NULL DEFAULT 0,
    created_at INTEGER NOT NULL,
    updated_at INTEGER NOT NULL
)
"#;

const CREATE_EXCHANGES: &str = r#"
CREATE TABLE IF NOT EXISTS exchanges (
    id TEXT PRIMARY KEY,
    requester_id TEXT NOT NULL REFERENCES users(id),
    provider_id TEXT NOT NULL REFERENCES users(id),
    skill TEXT NOT NULL,
    description TEXT NOT NULL,
    status TEXT NOT NULL DEFAULT 'pending',
    mode TEXT,
    location TEXT,
    scheduled_at INTEGER,
    duration_hours INTEGER,
    points_cost INTEGER NOT NULL DEFAULT 0,
    requester_rating TEXT,
    provider_rating TEXT,
    created_at INTEGER NOT NULL,
    updated_at INTEGER NOT NULL
)
"#;

const CREATE_MESSAGES: &str = r#"
CREATE TABLE IF NOT EXISTS messages (
    id TEXT PRIMARY KEY,
    exchange_id TEXT NOT NULL REFERENCES exchanges(id),
    sender_id TEXT NOT NULL REFERENCES users(id),
    body TEXT NOT NULL,
    created_at INTEGER NOT NULL
)
"#;

const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_exchanges_requester ON exchanges(requester_id)",
    "CREATE INDEX IF NOT EXISTS idx_exchanges_provider ON exchanges(provider_id)",
    "CREATE INDEX IF NOT EXISTS idx_messages_exchange ON messages(exchange_id)",
];

/// Bootstrap the schema. Idempotent; runs at process startup.
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    for statement in [CREATE_USERS, CREATE_EXCHANGES, CREATE_MESSAGES]
        .iter()
        .chain(CREATE_INDEXES)
    {
        sqlx::query(statement).execute(pool).await?;
    }

    log::info!("Database schema ready");

    Ok(())
}
