use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A chat message inside an exchange. Append-only; ordering is
/// creation order and the record's lifetime is bound to its exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub exchange_id: Uuid,
    pub sender_id: Uuid,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn new(exchange_id: Uuid, sender_id: Uuid, body: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            exchange_id,
            sender_id,
            body,
            created_at: Utc::now(),
        }
    }
}
