//! SQLite-backed implementations of the store contracts

use crate::store::{ExchangeLedger, UserDirectory};
use crate::Result as EngineErrorResult;

use sx_core::{
    Exchange, ExchangeRating, ExchangeRole, ExchangeStatus, Message, RatingSummary, User,
};
use sx_db::{ExchangeRepository, UserRepository};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

pub struct SqliteUserDirectory {
    users: UserRepository,
}

impl SqliteUserDirectory {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            users: UserRepository::new(pool),
        }
    }
}

#[async_trait]
impl UserDirectory for SqliteUserDirectory {
    async fn get_user(&self, id: Uuid) -> EngineErrorResult<Option<User>> {
        Ok(self.users.find_by_id(id).await?)
    }

    async fn list_users(&self) -> EngineErrorResult<Vec<User>> {
        Ok(self.users.list_all().await?)
    }

    async fn adjust_points(&self, id: Uuid, delta: i64) -> EngineErrorResult<()> {
        Ok(self.users.adjust_points(id, delta).await?)
    }

    async fn set_rating(&self, id: Uuid, rating: RatingSummary) -> EngineErrorResult<()> {
        Ok(self.users.set_rating(id, rating).await?)
    }
}

pub struct SqliteExchangeLedger {
    exchanges: ExchangeRepository,
}

impl SqliteExchangeLedger {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            exchanges: ExchangeRepository::new(pool),
        }
    }
}

#[async_trait]
impl ExchangeLedger for SqliteExchangeLedger {
    async fn get_exchange(&self, id: Uuid) -> EngineErrorResult<Option<Exchange>> {
        Ok(self.exchanges.find_by_id(id).await?)
    }

    async fn insert_exchange(&self, exchange: &Exchange) -> EngineErrorResult<()> {
        Ok(self.exchanges.create(exchange).await?)
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: ExchangeStatus,
        updated_at: DateTime<Utc>,
    ) -> EngineErrorResult<()> {
        Ok(self.exchanges.update_status(id, status, updated_at).await?)
    }

    async fn append_message(&self, message: &Message) -> EngineErrorResult<()> {
        Ok(self.exchanges.append_message(message).await?)
    }

    async fn list_for_user(&self, user_id: Uuid) -> EngineErrorResult<Vec<Exchange>> {
        Ok(self.exchanges.list_for_user(user_id).await?)
    }

    async fn set_rating_slot(
        &self,
        id: Uuid,
        rater: ExchangeRole,
        rating: &ExchangeRating,
    ) -> EngineErrorResult<()> {
        Ok(self.exchanges.set_rating_slot(id, rater, rating).await?)
    }

    async fn list_rated(
        &self,
        user_id: Uuid,
        role: ExchangeRole,
    ) -> EngineErrorResult<Vec<Exchange>> {
        Ok(self.exchanges.list_rated(user_id, role).await?)
    }
}
