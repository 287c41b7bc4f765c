use crate::{MessageDto, RatingDto};

use sx_core::Exchange;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ExchangeDto {
    pub id: String,
    pub requester_id: String,
    pub provider_id: String,
    pub skill: String,
    pub description: String,
    pub status: String,
    pub mode: Option<String>,
    pub location: Option<String>,
    pub scheduled_at: Option<i64>,
    pub duration_hours: Option<i64>,
    pub points_cost: i64,
    pub messages: Vec<MessageDto>,
    pub requester_rating: Option<RatingDto>,
    pub provider_rating: Option<RatingDto>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Exchange> for ExchangeDto {
    fn from(exchange: Exchange) -> Self {
        Self {
            id: exchange.id.to_string(),
            requester_id: exchange.requester_id.to_string(),
            provider_id: exchange.provider_id.to_string(),
            skill: exchange.skill,
            description: exchange.description,
            status: exchange.status.as_str().to_string(),
            mode: exchange.mode.map(|m| m.as_str().to_string()),
            location: exchange.location,
            scheduled_at: exchange.scheduled_at.map(|dt| dt.timestamp()),
            duration_hours: exchange.duration_hours,
            points_cost: exchange.points_cost,
            messages: exchange.messages.into_iter().map(MessageDto::from).collect(),
            requester_rating: exchange.requester_rating.map(RatingDto::from),
            provider_rating: exchange.provider_rating.map(RatingDto::from),
            created_at: exchange.created_at.timestamp(),
            updated_at: exchange.updated_at.timestamp(),
        }
    }
}
