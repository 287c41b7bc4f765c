use sx_core::Message;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MessageDto {
    pub id: String,
    pub exchange_id: String,
    pub sender_id: String,
    pub body: String,
    pub created_at: i64,
}

impl From<Message> for MessageDto {
    fn from(message: Message) -> Self {
        Self {
            id: message.id.to_string(),
            exchange_id: message.exchange_id.to_string(),
            sender_id: message.sender_id.to_string(),
            body: message.body,
            created_at: message.created_at.timestamp(),
        }
    }
}
