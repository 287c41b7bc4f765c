use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("JSON column error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Stored value could not be decoded: {message}")]
    Decode { message: String },

    #[error("Database initialization failed: {message}")]
    Initialization { message: String },
}

pub type Result<T> = std::result::Result<T, DbError>;
