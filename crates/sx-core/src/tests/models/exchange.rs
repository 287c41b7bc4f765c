use crate::{Exchange, ExchangeRating, ExchangeRole, ExchangeStatus, NewExchange};

use uuid::Uuid;

fn draft(provider_id: Uuid) -> NewExchange {
    NewExchange {
        provider_id,
        skill: "Rust".to_string(),
        description: "Intro to ownership".to_string(),
        mode: None,
        location: None,
        scheduled_at: None,
        duration_hours: Some(2),
        points_cost: 50,
    }
}

#[test]
fn test_new_exchange_starts_pending() {
    let requester = Uuid::new_v4();
    let provider = Uuid::new_v4();

    let exchange = Exchange::new(requester, draft(provider));

    assert_eq!(exchange.status, ExchangeStatus::Pending);
    assert_eq!(exchange.requester_id, requester);
    assert_eq!(exchange.provider_id, provider);
    assert!(exchange.messages.is_empty());
    assert!(exchange.requester_rating.is_none());
    assert!(exchange.provider_rating.is_none());
}

#[test]
fn test_role_of_parties() {
    let requester = Uuid::new_v4();
    let provider = Uuid::new_v4();
    let exchange = Exchange::new(requester, draft(provider));

    assert_eq!(exchange.role_of(requester), Some(ExchangeRole::Requester));
    assert_eq!(exchange.role_of(provider), Some(ExchangeRole::Provider));
    assert_eq!(exchange.role_of(Uuid::new_v4()), None);
    assert!(!exchange.is_party(Uuid::new_v4()));
}

#[test]
fn test_rating_received_reads_the_counterpart_slot() {
    let requester = Uuid::new_v4();
    let mut exchange = Exchange::new(requester, draft(Uuid::new_v4()));

    // The requester writes a rating; it is about the provider.
    exchange.requester_rating = Some(ExchangeRating::new(5, None));

    assert!(exchange.rating_received(ExchangeRole::Provider).is_some());
    assert!(exchange.rating_received(ExchangeRole::Requester).is_none());
}
