use sx_core::Message;

use std::collections::HashMap;

use serde::Serialize;
use tokio::sync::{RwLock, broadcast};
use uuid::Uuid;

const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// Events emitted by the exchange lifecycle for live subscribers.
/// Delivery is fire-and-forget: no guarantee, no retry.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExchangeEvent {
    MessageAdded { exchange_id: Uuid, message: Message },
}

impl ExchangeEvent {
    pub fn exchange_id(&self) -> Uuid {
        match self {
            Self::MessageAdded { exchange_id, .. } => *exchange_id,
        }
    }
}

/// Per-exchange broadcast channels. A channel exists only while it has
/// subscribers; publishing to an exchange nobody watches is a no-op.
pub struct ExchangeNotifier {
    channels: RwLock<HashMap<Uuid, Channel>>,
    capacity: usize,
}

struct Channel {
    sender: broadcast::Sender<ExchangeEvent>,
    subscribers: usize,
}

impl Default for ExchangeNotifier {
    fn default() -> Self {
        Self::new(DEFAULT_CHANNEL_CAPACITY)
    }
}

impl ExchangeNotifier {
    pub fn new(capacity: usize) -> Self {
        Self {
            channels: RwLock::new(HashMap::new()),
            capacity,
        }
    }

    pub async fn subscribe(&self, exchange_id: Uuid) -> broadcast::Receiver<ExchangeEvent> {
        let mut channels = self.channels.write().await;

        let channel = channels.entry(exchange_id).or_insert_with(|| {
            let (sender, _) = broadcast::channel(self.capacity);
            log::debug!("Created event channel for exchange {}", exchange_id);
            Channel {
                sender,
                subscribers: 0,
            }
        });

        channel.subscribers += 1;
        channel.sender.subscribe()
    }

    pub async fn unsubscribe(&self, exchange_id: Uuid) {
        let mut channels = self.channels.write().await;

        if let Some(channel) = channels.get_mut(&exchange_id) {
            channel.subscribers = channel.subscribers.saturating_sub(1);

            if channel.subscribers == 0 {
                channels.remove(&exchange_id);
                log::debug!("Removed empty event channel for exchange {}", exchange_id);
            }
        }
    }

    /// Best-effort delivery. Returns how many subscribers received the
    /// event; zero subscribers is not an error.
    pub async fn publish(&self, event: ExchangeEvent) -> usize {
        let channels = self.channels.read().await;

        let Some(channel) = channels.get(&event.exchange_id()) else {
            return 0;
        };

        channel.sender.send(event).unwrap_or(0)
    }

    pub async fn subscriber_count(&self, exchange_id: Uuid) -> usize {
        let channels = self.channels.read().await;
        channels
            .get(&exchange_id)
            .map(|c| c.subscribers)
            .unwrap_or(0)
    }
}
