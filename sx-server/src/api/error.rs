//! REST API error types
//!
//! The core's failure taxonomy (NotFound / Forbidden / Invalid) maps
//! here onto HTTP status codes with consistent JSON bodies.

use sx_core::CoreError;
use sx_db::DbError;
use sx_engine::EngineError;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message}")]
    NotFound { message: String },

    /// Actor is not a party to the resource (403)
    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    /// Validation error (400)
    #[error("Validation failed: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// Missing or malformed caller identity (401)
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// Internal server error (500)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        log::error!("{}", self);

        let (status, body) = match self {
            ApiError::NotFound { message } => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "NOT_FOUND".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Forbidden { message } => (
                StatusCode::FORBIDDEN,
                ApiErrorBody {
                    code: "FORBIDDEN".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Validation { message, field } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "VALIDATION_ERROR".into(),
                    message,
                    field,
                },
            ),
            ApiError::Unauthorized { message } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "UNAUTHORIZED".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Internal { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    message,
                    field: None,
                },
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert engine errors to API errors
impl From<EngineError> for ApiError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::UserNotFound { .. } | EngineError::ExchangeNotFound { .. } => {
                ApiError::NotFound {
                    message: e.to_string(),
                }
            }
            EngineError::NotParticipant { .. } => ApiError::Forbidden {
                message: e.to_string(),
            },
            EngineError::InvalidTransition { .. } => ApiError::Validation {
                message: e.to_string(),
                field: Some("status".into()),
            },
            EngineError::InvalidRating { .. } => ApiError::Validation {
                message: e.to_string(),
                field: Some("rating".into()),
            },
            EngineError::Validation { message, field } => ApiError::Validation {
                message,
                field: field.map(String::from),
            },
            EngineError::Store(db) => ApiError::from(db),
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        // Don't expose storage details to clients
        log::error!("Database error: {}", e);
        ApiError::Internal {
            message: "Storage operation failed".to_string(),
        }
    }
}

/// Convert model parse errors to API errors
impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        ApiError::Validation {
            message: e.to_string(),
            field: None,
        }
    }
}

/// Convert UUID parse errors to API errors
impl From<uuid::Error> for ApiError {
    fn from(e: uuid::Error) -> Self {
        ApiError::Validation {
            message: format!("Invalid UUID format: {}", e),
            field: None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
