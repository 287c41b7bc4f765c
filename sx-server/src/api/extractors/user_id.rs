//! Axum extractor for the caller's identity
//!
//! Authentication lives upstream; by the time a request reaches this
//! service the gateway has verified the caller and forwarded their id
//! in the `X-User-Id` header.

use crate::ApiError;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

/// Extracts the caller's user id from the `X-User-Id` header
pub struct UserId(pub Uuid);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get("X-User-Id")
                .ok_or_else(|| ApiError::Unauthorized {
                    message: "X-User-Id header required".to_string(),
                })?;

            let value = header.to_str().map_err(|_| ApiError::Unauthorized {
                message: "X-User-Id header is not valid UTF-8".to_string(),
            })?;

            let user_id = Uuid::parse_str(value).map_err(|_| {
                log::warn!("Invalid UUID in X-User-Id header: {}", value);
                ApiError::Unauthorized {
                    message: "X-User-Id header is not a valid UUID".to_string(),
                }
            })?;

            Ok(UserId(user_id))
        }
    }
}
