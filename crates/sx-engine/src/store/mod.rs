pub mod sqlite;

use crate::Result as EngineErrorResult;

use sx_core::{
    Exchange, ExchangeRating, ExchangeRole, ExchangeStatus, Message, RatingSummary, User,
};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Read/write access to user records. The engine owns no store; the
/// process entry point constructs one and injects it.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn get_user(&self, id: Uuid) -> EngineErrorResult<Option<User>>;

    async fn list_users(&self) -> EngineErrorResult<Vec<User>>;

    /// Additive balance change; callers serialize per user
    async fn adjust_points(&self, id: Uuid, delta: i64) -> EngineErrorResult<()>;

    async fn set_rating(&self, id: Uuid, rating: RatingSummary) -> EngineErrorResult<()>;
}

/// Read/write access to exchange records and their messages
#[async_trait]
pub trait ExchangeLedger: Send + Sync {
    async fn get_exchange(&self, id: Uuid) -> EngineErrorResult<Option<Exchange>>;

    async fn insert_exchange(&self, exchange: &Exchange) -> EngineErrorResult<()>;

    async fn update_status(
        &self,
        id: Uuid,
        status: ExchangeStatus,
        updated_at: DateTime<Utc>,
    ) -> EngineErrorResult<()>;

    async fn append_message(&self, message: &Message) -> EngineErrorResult<()>;

    /// Exchanges the user is a party to, newest first
    async fn list_for_user(&self, user_id: Uuid) -> EngineErrorResult<Vec<Exchange>>;

    /// Store the slot written by `rater`
    async fn set_rating_slot(
        &self,
        id: Uuid,
        rater: ExchangeRole,
        rating: &ExchangeRating,
    ) -> EngineErrorResult<()>;

    /// Exchanges where the user held `role` and was rated by the
    /// counterpart
    async fn list_rated(
        &self,
        user_id: Uuid,
        role: ExchangeRole,
    ) -> EngineErrorResult<Vec<Exchange>>;
}
