use sx_core::ExchangeStatus;
use sx_db::DbError;

use thiserror::Error;
use uuid::Uuid;

/// Failure taxonomy surfaced to the transport layer: not-found,
/// forbidden, invalid, or a storage fault. Never retried here.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("User {id} not found")]
    UserNotFound { id: Uuid },

    #[error("Exchange {id} not found")]
    ExchangeNotFound { id: Uuid },

    #[error("User {user_id} is not a party to exchange {exchange_id}")]
    NotParticipant { user_id: Uuid, exchange_id: Uuid },

    #[error("Exchange cannot move from {from} to {to}")]
    InvalidTransition {
        from: ExchangeStatus,
        to: ExchangeStatus,
    },

    #[error("Rating must be between 1 and 5, got {value}")]
    InvalidRating { value: u8 },

    #[error("Validation failed: {message}")]
    Validation {
        message: String,
        field: Option<&'static str>,
    },

    #[error("Storage error: {0}")]
    Store(#[from] DbError),
}

pub type Result<T> = std::result::Result<T, EngineError>;
