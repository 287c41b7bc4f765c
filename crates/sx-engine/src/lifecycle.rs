use crate::events::{ExchangeEvent, ExchangeNotifier};
use crate::locks::LockRegistry;
use crate::store::{ExchangeLedger, UserDirectory};
use crate::{EngineError, Result as EngineErrorResult};

use sx_core::{
    Exchange, ExchangeRating, ExchangeStatus, Message, NewExchange, RatingSummary,
};

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

const MIN_RATING: u8 = 1;
const MAX_RATING: u8 = 5;

/// State transitions on exchanges, with their side effects on user
/// points and ratings. All mutations on one exchange are serialized
/// through the lock registry; operations are atomic at single-exchange
/// granularity and never retried.
pub struct ExchangeService {
    users: Arc<dyn UserDirectory>,
    ledger: Arc<dyn ExchangeLedger>,
    notifier: Arc<ExchangeNotifier>,
    locks: LockRegistry,
}

impl ExchangeService {
    pub fn new(
        users: Arc<dyn UserDirectory>,
        ledger: Arc<dyn ExchangeLedger>,
        notifier: Arc<ExchangeNotifier>,
    ) -> Self {
        Self {
            users,
            ledger,
            notifier,
            locks: LockRegistry::new(),
        }
    }

    /// Open a new exchange with `requester_id` as the requester.
    /// Nothing is written when validation or the existence checks fail.
    pub async fn create_exchange(
        &self,
        requester_id: Uuid,
        draft: NewExchange,
    ) -> EngineErrorResult<Exchange> {
        if draft.provider_id == requester_id {
            return Err(EngineError::Validation {
                message: "an exchange needs two distinct users".to_string(),
                field: Some("provider_id"),
            });
        }
        if draft.skill.trim().is_empty() {
            return Err(EngineError::Validation {
                message: "skill must not be empty".to_string(),
                field: Some("skill"),
            });
        }
        if draft.description.trim().is_empty() {
            return Err(EngineError::Validation {
                message: "description must not be empty".to_string(),
                field: Some("description"),
            });
        }
        if draft.points_cost < 0 {
            return Err(EngineError::Validation {
                message: "points_cost must not be negative".to_string(),
                field: Some("points_cost"),
            });
        }

        self.users
            .get_user(requester_id)
            .await?
            .ok_or(EngineError::UserNotFound { id: requester_id })?;
        self.users
            .get_user(draft.provider_id)
            .await?
            .ok_or(EngineError::UserNotFound {
                id: draft.provider_id,
            })?;

        let exchange = Exchange::new(requester_id, draft);
        self.ledger.insert_exchange(&exchange).await?;

        log::info!(
            "Created exchange {} for {:?} ({} -> {})",
            exchange.id,
            exchange.skill,
            exchange.requester_id,
            exchange.provider_id
        );

        Ok(exchange)
    }

    /// Exchanges the user is a party to, newest first
    pub async fn list_for_user(&self, user_id: Uuid) -> EngineErrorResult<Vec<Exchange>> {
        self.ledger.list_for_user(user_id).await
    }

    /// Move an exchange along its lifecycle. Only a party may act, and
    /// only the linear transition order (plus cancellation of any
    /// non-terminal state) is accepted. Moving to Completed transfers
    /// `points_cost` from requester to provider, exactly once.
    pub async fn set_status(
        &self,
        exchange_id: Uuid,
        acting_user_id: Uuid,
        new_status: ExchangeStatus,
    ) -> EngineErrorResult<Exchange> {
        let _exchange_guard = self.locks.lock_exchange(exchange_id).await;

        let exchange = self
            .ledger
            .get_exchange(exchange_id)
            .await?
            .ok_or(EngineError::ExchangeNotFound { id: exchange_id })?;

        if !exchange.is_party(acting_user_id) {
            return Err(EngineError::NotParticipant {
                user_id: acting_user_id,
                exchange_id,
            });
        }
        if !exchange.status.can_transition_to(new_status) {
            return Err(EngineError::InvalidTransition {
                from: exchange.status,
                to: new_status,
            });
        }

        // Pay out before the status write: a storage failure here
        // leaves the exchange still in_progress and completable.
        if new_status == ExchangeStatus::Completed {
            self.settle_points(&exchange).await?;
        }

        if let Err(e) = self
            .ledger
            .update_status(exchange_id, new_status, Utc::now())
            .await
        {
            if new_status == ExchangeStatus::Completed {
                self.reverse_settlement(&exchange).await;
            }
            return Err(e);
        }

        log::info!(
            "Exchange {} moved {} -> {}",
            exchange_id,
            exchange.status,
            new_status
        );

        self.ledger
            .get_exchange(exchange_id)
            .await?
            .ok_or(EngineError::ExchangeNotFound { id: exchange_id })
    }

    /// Append a chat message and notify live subscribers of the
    /// exchange's channel. Notification is best-effort.
    pub async fn append_message(
        &self,
        exchange_id: Uuid,
        sender_id: Uuid,
        body: String,
    ) -> EngineErrorResult<Message> {
        let _exchange_guard = self.locks.lock_exchange(exchange_id).await;

        let exchange = self
            .ledger
            .get_exchange(exchange_id)
            .await?
            .ok_or(EngineError::ExchangeNotFound { id: exchange_id })?;

        if !exchange.is_party(sender_id) {
            return Err(EngineError::NotParticipant {
                user_id: sender_id,
                exchange_id,
            });
        }

        let body = body.trim().to_string();
        if body.is_empty() {
            return Err(EngineError::Validation {
                message: "message body must not be empty".to_string(),
                field: Some("body"),
            });
        }

        let message = Message::new(exchange_id, sender_id, body);
        self.ledger.append_message(&message).await?;

        let receivers = self
            .notifier
            .publish(ExchangeEvent::MessageAdded {
                exchange_id,
                message: message.clone(),
            })
            .await;
        log::debug!(
            "Message {} on exchange {} delivered to {} subscribers",
            message.id,
            exchange_id,
            receivers
        );

        Ok(message)
    }

    /// Store the acting party's rating of the exchange, then recompute
    /// the counterpart's aggregate from every exchange rating them.
    pub async fn rate_exchange(
        &self,
        exchange_id: Uuid,
        acting_user_id: Uuid,
        rating: u8,
        review: Option<String>,
    ) -> EngineErrorResult<Exchange> {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(EngineError::InvalidRating { value: rating });
        }

        let _exchange_guard = self.locks.lock_exchange(exchange_id).await;

        let exchange = self
            .ledger
            .get_exchange(exchange_id)
            .await?
            .ok_or(EngineError::ExchangeNotFound { id: exchange_id })?;

        let rater = exchange
            .role_of(acting_user_id)
            .ok_or(EngineError::NotParticipant {
                user_id: acting_user_id,
                exchange_id,
            })?;

        self.ledger
            .set_rating_slot(exchange_id, rater, &ExchangeRating::new(rating, review))
            .await?;

        let rated_role = rater.counterpart();
        let rated_user_id = exchange.party(rated_role);

        let _user_guard = self.locks.lock_user(rated_user_id).await;

        let rated_exchanges = self.ledger.list_rated(rated_user_id, rated_role).await?;
        let ratings: Vec<i64> = rated_exchanges
            .iter()
            .filter_map(|e| e.rating_received(rated_role))
            .map(|r| i64::from(r.rating))
            .collect();

        let count = ratings.len() as i64;
        let average = if count == 0 {
            0.0
        } else {
            ratings.iter().sum::<i64>() as f64 / count as f64
        };

        self.users
            .set_rating(rated_user_id, RatingSummary { average, count })
            .await?;

        log::info!(
            "User {} rated exchange {}; counterpart {} now at {:.2} over {}",
            acting_user_id,
            exchange_id,
            rated_user_id,
            average,
            count
        );

        self.ledger
            .get_exchange(exchange_id)
            .await?
            .ok_or(EngineError::ExchangeNotFound { id: exchange_id })
    }

    /// Transfer `points_cost` from requester to provider. User locks
    /// are taken in ascending id order; a half-applied transfer is
    /// compensated before the error surfaces.
    async fn settle_points(&self, exchange: &Exchange) -> EngineErrorResult<()> {
        if exchange.points_cost == 0 || exchange.requester_id == exchange.provider_id {
            return Ok(());
        }

        let _guards = self
            .locks
            .lock_user_pair(exchange.requester_id, exchange.provider_id)
            .await;

        if let Some(requester) = self.users.get_user(exchange.requester_id).await? {
            if requester.points < exchange.points_cost {
                log::warn!(
                    "Completing exchange {} drives requester {} below zero points",
                    exchange.id,
                    requester.id
                );
            }
        }

        self.users
            .adjust_points(exchange.provider_id, exchange.points_cost)
            .await?;

        if let Err(e) = self
            .users
            .adjust_points(exchange.requester_id, -exchange.points_cost)
            .await
        {
            if let Err(undo) = self
                .users
                .adjust_points(exchange.provider_id, -exchange.points_cost)
                .await
            {
                log::error!(
                    "Failed to undo provider credit for exchange {}: {}",
                    exchange.id,
                    undo
                );
            }
            return Err(e);
        }

        Ok(())
    }

    /// Best-effort rollback of a completed settlement when the status
    /// write fails afterwards
    async fn reverse_settlement(&self, exchange: &Exchange) {
        if exchange.points_cost == 0 || exchange.requester_id == exchange.provider_id {
            return;
        }

        let _guards = self
            .locks
            .lock_user_pair(exchange.requester_id, exchange.provider_id)
            .await;

        for (user_id, delta) in [
            (exchange.provider_id, -exchange.points_cost),
            (exchange.requester_id, exchange.points_cost),
        ] {
            if let Err(e) = self.users.adjust_points(user_id, delta).await {
                log::error!(
                    "Failed to reverse settlement of exchange {} for user {}: {}",
                    exchange.id,
                    user_id,
                    e
                );
            }
        }
    }
}
