use crate::models::exchange_mode::ExchangeMode;
use crate::models::exchange_role::ExchangeRole;
use crate::models::exchange_status::ExchangeStatus;
use crate::models::message::Message;
use crate::models::rating::ExchangeRating;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A proposed or in-progress skill trade between two users
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exchange {
    pub id: Uuid,
    pub requester_id: Uuid,
    pub provider_id: Uuid,

    pub skill: String,
    pub description: String,
    pub status: ExchangeStatus,

    // Scheduling
    pub mode: Option<ExchangeMode>,
    pub location: Option<String>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub duration_hours: Option<i64>,
    pub points_cost: i64,

    pub messages: Vec<Message>,

    /// Written by the requester, rates the provider
    pub requester_rating: Option<ExchangeRating>,
    /// Written by the provider, rates the requester
    pub provider_rating: Option<ExchangeRating>,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields a requester supplies when opening an exchange
#[derive(Debug, Clone)]
pub struct NewExchange {
    pub provider_id: Uuid,
    pub skill: String,
    pub description: String,
    pub mode: Option<ExchangeMode>,
    pub location: Option<String>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub duration_hours: Option<i64>,
    pub points_cost: i64,
}

impl Exchange {
    pub fn new(requester_id: Uuid, draft: NewExchange) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            requester_id,
            provider_id: draft.provider_id,
            skill: draft.skill,
            description: draft.description,
            status: ExchangeStatus::Pending,
            mode: draft.mode,
            location: draft.location,
            scheduled_at: draft.scheduled_at,
            duration_hours: draft.duration_hours,
            points_cost: draft.points_cost,
            messages: Vec::new(),
            requester_rating: None,
            provider_rating: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// The role `user_id` holds in this exchange, if any
    pub fn role_of(&self, user_id: Uuid) -> Option<ExchangeRole> {
        if user_id == self.requester_id {
            Some(ExchangeRole::Requester)
        } else if user_id == self.provider_id {
            Some(ExchangeRole::Provider)
        } else {
            None
        }
    }

    pub fn is_party(&self, user_id: Uuid) -> bool {
        self.role_of(user_id).is_some()
    }

    /// User id holding `role`
    pub fn party(&self, role: ExchangeRole) -> Uuid {
        match role {
            ExchangeRole::Requester => self.requester_id,
            ExchangeRole::Provider => self.provider_id,
        }
    }

    /// The rating slot written ABOUT the user holding `role`, i.e. the
    /// one filled in by that user's counterpart.
    pub fn rating_received(&self, role: ExchangeRole) -> Option<&ExchangeRating> {
        match role {
            ExchangeRole::Requester => self.provider_rating.as_ref(),
            ExchangeRole::Provider => self.requester_rating.as_ref(),
        }
    }
}
