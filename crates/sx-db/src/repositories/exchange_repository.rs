use crate::repositories::{parse_timestamp, parse_uuid};
use crate::{DbError, Result as DbErrorResult};

use sx_core::{
    Exchange, ExchangeMode, ExchangeRating, ExchangeRole, ExchangeStatus, Message,
};

use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const EXCHANGE_COLUMNS: &str = "id, requester_id, provider_id, skill, description, status, \
     mode, location, scheduled_at, duration_hours, points_cost, \
     requester_rating, provider_rating, created_at, updated_at";

pub struct ExchangeRepository {
    pool: SqlitePool,
}

impl ExchangeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, exchange: &Exchange) -> DbErrorResult<()> {
        let requester_rating = encode_rating(exchange.requester_rating.as_ref())?;
        let provider_rating = encode_rating(exchange.provider_rating.as_ref())?;

        sqlx::query(
            r#"
              INSERT INTO exchanges (
                  id, requester_id, provider_id, skill, description, status,
                  mode, location, scheduled_at, duration_hours, points_cost,
                  requester_rating, provider_rating, created_at, updated_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(exchange.id.to_string())
        .bind(exchange.requester_id.to_string())
        .bind(exchange.provider_id.to_string())
        .bind(&exchange.skill)
        .bind(&exchange.description)
        .bind(exchange.status.as_str())
        .bind(exchange.mode.map(|m| m.as_str()))
        .bind(&exchange.location)
        .bind(exchange.scheduled_at.map(|dt| dt.timestamp()))
        .bind(exchange.duration_hours)
        .bind(exchange.points_cost)
        .bind(requester_rating)
        .bind(provider_rating)
        .bind(exchange.created_at.timestamp())
        .bind(exchange.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Exchange>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM exchanges WHERE id = ?",
            EXCHANGE_COLUMNS
        ))
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(r) => {
                let mut exchange = row_to_exchange(&r)?;
                exchange.messages = self.load_messages(exchange.id).await?;
                Ok(Some(exchange))
            }
            None => Ok(None),
        }
    }

    pub async fn update_status(
        &self,
        id: Uuid,
        status: ExchangeStatus,
        updated_at: DateTime<Utc>,
    ) -> DbErrorResult<()> {
        sqlx::query("UPDATE exchanges SET status = ?, updated_at = ? WHERE id = ?")
            .bind(status.as_str())
            .bind(updated_at.timestamp())
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Exchanges the user is a party to, newest first
    pub async fn list_for_user(&self, user_id: Uuid) -> DbErrorResult<Vec<Exchange>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM exchanges WHERE requester_id = ? OR provider_id = ? \
                 ORDER BY created_at DESC, rowid DESC",
            EXCHANGE_COLUMNS
        ))
        .bind(user_id.to_string())
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        self.with_messages(rows).await
    }

    /// Append a message and touch the parent exchange, atomically
    pub async fn append_message(&self, message: &Message) -> DbErrorResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "INSERT INTO messages (id, exchange_id, sender_id, body, created_at) \
                 VALUES (?, ?, ?, ?, ?)",
        )
        .bind(message.id.to_string())
        .bind(message.exchange_id.to_string())
        .bind(message.sender_id.to_string())
        .bind(&message.body)
        .bind(message.created_at.timestamp())
        .execute(&mut *tx)
        .await?;

        sqlx::query("UPDATE exchanges SET updated_at = ? WHERE id = ?")
            .bind(message.created_at.timestamp())
            .bind(message.exchange_id.to_string())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }

    /// Write the slot filled in by `rater`
    pub async fn set_rating_slot(
        &self,
        id: Uuid,
        rater: ExchangeRole,
        rating: &ExchangeRating,
    ) -> DbErrorResult<()> {
        let encoded = serde_json::to_string(rating)?;
        let sql = match rater {
            ExchangeRole::Requester => {
                "UPDATE exchanges SET requester_rating = ?, updated_at = ? WHERE id = ?"
            }
            ExchangeRole::Provider => {
                "UPDATE exchanges SET provider_rating = ?, updated_at = ? WHERE id = ?"
            }
        };

        sqlx::query(sql)
            .bind(encoded)
            .bind(Utc::now().timestamp())
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Exchanges where the user held `role` and the counterpart's
    /// rating slot is present, i.e. the exchanges that rate the user.
    pub async fn list_rated(
        &self,
        user_id: Uuid,
        role: ExchangeRole,
    ) -> DbErrorResult<Vec<Exchange>> {
        let sql = match role {
            ExchangeRole::Provider => format!(
                "SELECT {} FROM exchanges \
                     WHERE provider_id = ? AND requester_rating IS NOT NULL \
                     ORDER BY created_at ASC, rowid ASC",
                EXCHANGE_COLUMNS
            ),
            ExchangeRole::Requester => format!(
                "SELECT {} FROM exchanges \
                     WHERE requester_id = ? AND provider_rating IS NOT NULL \
                     ORDER BY created_at ASC, rowid ASC",
                EXCHANGE_COLUMNS
            ),
        };

        let rows = sqlx::query(&sql)
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await?;

        self.with_messages(rows).await
    }

    async fn with_messages(&self, rows: Vec<SqliteRow>) -> DbErrorResult<Vec<Exchange>> {
        let mut exchanges = Vec::with_capacity(rows.len());
        for row in &rows {
            let mut exchange = row_to_exchange(row)?;
            exchange.messages = self.load_messages(exchange.id).await?;
            exchanges.push(exchange);
        }
        Ok(exchanges)
    }

    async fn load_messages(&self, exchange_id: Uuid) -> DbErrorResult<Vec<Message>> {
        let rows = sqlx::query(
            "SELECT id, exchange_id, sender_id, body, created_at FROM messages \
                 WHERE exchange_id = ? ORDER BY created_at ASC, rowid ASC",
        )
        .bind(exchange_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_message).collect()
    }
}

fn encode_rating(rating: Option<&ExchangeRating>) -> DbErrorResult<Option<String>> {
    rating
        .map(|r| serde_json::to_string(r).map_err(DbError::from))
        .transpose()
}

fn decode_rating(value: Option<String>) -> DbErrorResult<Option<ExchangeRating>> {
    value
        .map(|v| serde_json::from_str(&v).map_err(DbError::from))
        .transpose()
}

fn row_to_exchange(row: &SqliteRow) -> DbErrorResult<Exchange> {
    let status = ExchangeStatus::from_str(&row.try_get::<String, _>("status")?)
        .map_err(|e| DbError::Decode {
            message: e.to_string(),
        })?;
    let mode = row
        .try_get::<Option<String>, _>("mode")?
        .map(|m| {
            ExchangeMode::from_str(&m).map_err(|e| DbError::Decode {
                message: e.to_string(),
            })
        })
        .transpose()?;
    let scheduled_at = row
        .try_get::<Option<i64>, _>("scheduled_at")?
        .map(parse_timestamp)
        .transpose()?;

    Ok(Exchange {
        id: parse_uuid(&row.try_get::<String, _>("id")?)?,
        requester_id: parse_uuid(&row.try_get::<String, _>("requester_id")?)?,
        provider_id: parse_uuid(&row.try_get::<String, _>("provider_id")?)?,
        skill: row.try_get("skill")?,
        description: row.try_get("description")?,
        status,
        mode,
        location: row.try_get("location")?,
        scheduled_at,
        duration_hours: row.try_get("duration_hours")?,
        points_cost: row.try_get("points_cost")?,
        messages: Vec::new(),
        requester_rating: decode_rating(row.try_get("requester_rating")?)?,
        provider_rating: decode_rating(row.try_get("provider_rating")?)?,
        created_at: parse_timestamp(row.try_get("created_at")?)?,
        updated_at: parse_timestamp(row.try_get("updated_at")?)?,
    })
}

fn row_to_message(row: &SqliteRow) -> DbErrorResult<Message> {
    Ok(Message {
        id: parse_uuid(&row.try_get::<String, _>("id")?)?,
        exchange_id: parse_uuid(&row.try_get::<String, _>("exchange_id")?)?,
        sender_id: parse_uuid(&row.try_get::<String, _>("sender_id")?)?,
        body: row.try_get("body")?,
        created_at: parse_timestamp(row.try_get("created_at")?)?,
    })
}
