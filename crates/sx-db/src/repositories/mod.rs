pub mod exchange_repository;
pub mod user_repository;

use crate::{DbError, Result};

use chrono::{DateTime, Utc};
use uuid::Uuid;

pub(crate) fn parse_uuid(value: &str) -> Result<Uuid> {
    Uuid::parse_str(value).map_err(|e| DbError::Decode {
        message: format!("invalid uuid {:?}: {}", value, e),
    })
}

pub(crate) fn parse_timestamp(value: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(value, 0).ok_or_else(|| DbError::Decode {
        message: format!("timestamp {} out of range", value),
    })
}
