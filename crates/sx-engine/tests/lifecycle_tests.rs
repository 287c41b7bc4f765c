mod common;

use common::{create_service, create_test_pool, draft, seed_user};

use sx_core::ExchangeStatus;
use sx_db::UserRepository;
use sx_engine::{EngineError, ExchangeEvent};

use googletest::prelude::*;
use sqlx::SqlitePool;
use uuid::Uuid;

async fn points_of(pool: &SqlitePool, user_id: Uuid) -> i64 {
    UserRepository::new(pool.clone())
        .find_by_id(user_id)
        .await
        .unwrap()
        .unwrap()
        .points
}

#[tokio::test]
async fn given_unknown_provider_when_creating_then_not_found_and_ledger_untouched() {
    let pool = create_test_pool().await;
    let requester = seed_user(&pool, "Ada", &["Rust"], &["Piano"]).await;
    let (service, _) = create_service(&pool);

    let result = service
        .create_exchange(requester.id, draft(Uuid::new_v4(), 50))
        .await;

    assert!(matches!(result, Err(EngineError::UserNotFound { .. })));
    let listed = service.list_for_user(requester.id).await.unwrap();
    assert_that!(listed.len(), eq(0));
}

#[tokio::test]
async fn given_self_as_provider_when_creating_then_validation_error() {
    let pool = create_test_pool().await;
    let requester = seed_user(&pool, "Ada", &["Rust"], &["Piano"]).await;
    let (service, _) = create_service(&pool);

    let result = service
        .create_exchange(requester.id, draft(requester.id, 50))
        .await;

    assert!(matches!(result, Err(EngineError::Validation { .. })));
}

#[tokio::test]
async fn given_new_exchange_when_created_then_pending_and_listed_for_both_parties() {
    let pool = create_test_pool().await;
    let requester = seed_user(&pool, "Ada", &["Rust"], &["Piano"]).await;
    let provider = seed_user(&pool, "Grace", &["Piano"], &["Rust"]).await;
    let (service, _) = create_service(&pool);

    let exchange = service
        .create_exchange(requester.id, draft(provider.id, 50))
        .await
        .unwrap();

    assert_that!(exchange.status, eq(ExchangeStatus::Pending));
    assert_that!(
        service.list_for_user(requester.id).await.unwrap().len(),
        eq(1)
    );
    assert_that!(
        service.list_for_user(provider.id).await.unwrap().len(),
        eq(1)
    );
}

#[tokio::test]
async fn given_completion_when_status_set_then_points_move_exactly_once() {
    // Given: an accepted, in-progress exchange costing 50 points
    let pool = create_test_pool().await;
    let requester = seed_user(&pool, "Ada", &["Rust"], &["Piano"]).await;
    let provider = seed_user(&pool, "Grace", &["Piano"], &["Rust"]).await;
    let (service, _) = create_service(&pool);
    let exchange = service
        .create_exchange(requester.id, draft(provider.id, 50))
        .await
        .unwrap();
    service
        .set_status(exchange.id, provider.id, ExchangeStatus::Accepted)
        .await
        .unwrap();
    service
        .set_status(exchange.id, provider.id, ExchangeStatus::InProgress)
        .await
        .unwrap();

    // When: the provider completes it
    let completed = service
        .set_status(exchange.id, provider.id, ExchangeStatus::Completed)
        .await
        .unwrap();

    // Then: 50 points moved from requester to provider
    assert_that!(completed.status, eq(ExchangeStatus::Completed));
    assert_that!(points_of(&pool, requester.id).await, eq(50));
    assert_that!(points_of(&pool, provider.id).await, eq(150));

    // And: a second completion attempt fails without a second transfer
    let again = service
        .set_status(exchange.id, provider.id, ExchangeStatus::Completed)
        .await;
    assert!(matches!(again, Err(EngineError::InvalidTransition { .. })));
    assert_that!(points_of(&pool, requester.id).await, eq(50));
    assert_that!(points_of(&pool, provider.id).await, eq(150));
}

#[tokio::test]
async fn given_cost_above_balance_when_completed_then_requester_goes_negative() {
    let pool = create_test_pool().await;
    let requester = seed_user(&pool, "Ada", &["Rust"], &["Piano"]).await;
    let provider = seed_user(&pool, "Grace", &["Piano"], &["Rust"]).await;
    let (service, _) = create_service(&pool);
    let exchange = service
        .create_exchange(requester.id, draft(provider.id, 150))
        .await
        .unwrap();
    service
        .set_status(exchange.id, requester.id, ExchangeStatus::Accepted)
        .await
        .unwrap();
    service
        .set_status(exchange.id, requester.id, ExchangeStatus::InProgress)
        .await
        .unwrap();

    service
        .set_status(exchange.id, requester.id, ExchangeStatus::Completed)
        .await
        .unwrap();

    // No floor at zero: the deduction is applied as-is
    assert_that!(points_of(&pool, requester.id).await, eq(-50));
    assert_that!(points_of(&pool, provider.id).await, eq(250));
}

#[tokio::test]
async fn given_pending_exchange_when_jumping_to_completed_then_invalid_transition() {
    let pool = create_test_pool().await;
    let requester = seed_user(&pool, "Ada", &["Rust"], &["Piano"]).await;
    let provider = seed_user(&pool, "Grace", &["Piano"], &["Rust"]).await;
    let (service, _) = create_service(&pool);
    let exchange = service
        .create_exchange(requester.id, draft(provider.id, 50))
        .await
        .unwrap();

    let result = service
        .set_status(exchange.id, provider.id, ExchangeStatus::Completed)
        .await;

    assert!(matches!(
        result,
        Err(EngineError::InvalidTransition { .. })
    ));
    // The skipped transition must not pay out
    assert_that!(points_of(&pool, provider.id).await, eq(100));
}

#[tokio::test]
async fn given_cancelled_exchange_when_reopened_then_invalid_transition() {
    let pool = create_test_pool().await;
    let requester = seed_user(&pool, "Ada", &["Rust"], &["Piano"]).await;
    let provider = seed_user(&pool, "Grace", &["Piano"], &["Rust"]).await;
    let (service, _) = create_service(&pool);
    let exchange = service
        .create_exchange(requester.id, draft(provider.id, 50))
        .await
        .unwrap();
    service
        .set_status(exchange.id, requester.id, ExchangeStatus::Cancelled)
        .await
        .unwrap();

    let result = service
        .set_status(exchange.id, requester.id, ExchangeStatus::Accepted)
        .await;

    assert!(matches!(
        result,
        Err(EngineError::InvalidTransition { .. })
    ));
}

#[tokio::test]
async fn given_stranger_when_setting_status_then_forbidden() {
    let pool = create_test_pool().await;
    let requester = seed_user(&pool, "Ada", &["Rust"], &["Piano"]).await;
    let provider = seed_user(&pool, "Grace", &["Piano"], &["Rust"]).await;
    let stranger = seed_user(&pool, "Eve", &[], &[]).await;
    let (service, _) = create_service(&pool);
    let exchange = service
        .create_exchange(requester.id, draft(provider.id, 50))
        .await
        .unwrap();

    let result = service
        .set_status(exchange.id, stranger.id, ExchangeStatus::Accepted)
        .await;

    assert!(matches!(result, Err(EngineError::NotParticipant { .. })));
}

#[tokio::test]
async fn given_stranger_when_sending_message_then_forbidden_and_list_unchanged() {
    let pool = create_test_pool().await;
    let requester = seed_user(&pool, "Ada", &["Rust"], &["Piano"]).await;
    let provider = seed_user(&pool, "Grace", &["Piano"], &["Rust"]).await;
    let stranger = seed_user(&pool, "Eve", &[], &[]).await;
    let (service, _) = create_service(&pool);
    let exchange = service
        .create_exchange(requester.id, draft(provider.id, 50))
        .await
        .unwrap();

    let result = service
        .append_message(exchange.id, stranger.id, "hello".to_string())
        .await;

    assert!(matches!(result, Err(EngineError::NotParticipant { .. })));
    let listed = service.list_for_user(requester.id).await.unwrap();
    assert_that!(listed[0].messages.len(), eq(0));
}

#[tokio::test]
async fn given_subscriber_when_message_appended_then_event_delivered() {
    let pool = create_test_pool().await;
    let requester = seed_user(&pool, "Ada", &["Rust"], &["Piano"]).await;
    let provider = seed_user(&pool, "Grace", &["Piano"], &["Rust"]).await;
    let (service, notifier) = create_service(&pool);
    let exchange = service
        .create_exchange(requester.id, draft(provider.id, 50))
        .await
        .unwrap();

    // Given: one live subscriber on the exchange's channel
    let mut receiver = notifier.subscribe(exchange.id).await;

    // When
    let message = service
        .append_message(exchange.id, requester.id, "does Tuesday work?".to_string())
        .await
        .unwrap();

    // Then: the event carries the exchange id and the stored message
    let event = receiver.try_recv().unwrap();
    let ExchangeEvent::MessageAdded {
        exchange_id,
        message: delivered,
    } = event;
    assert_that!(exchange_id, eq(exchange.id));
    assert_that!(delivered.id, eq(message.id));
    assert_that!(delivered.body, eq("does Tuesday work?"));
}

#[tokio::test]
async fn given_no_subscribers_when_message_appended_then_still_succeeds() {
    let pool = create_test_pool().await;
    let requester = seed_user(&pool, "Ada", &["Rust"], &["Piano"]).await;
    let provider = seed_user(&pool, "Grace", &["Piano"], &["Rust"]).await;
    let (service, _) = create_service(&pool);
    let exchange = service
        .create_exchange(requester.id, draft(provider.id, 50))
        .await
        .unwrap();

    let result = service
        .append_message(exchange.id, provider.id, "hi".to_string())
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn given_blank_message_when_appended_then_validation_error() {
    let pool = create_test_pool().await;
    let requester = seed_user(&pool, "Ada", &["Rust"], &["Piano"]).await;
    let provider = seed_user(&pool, "Grace", &["Piano"], &["Rust"]).await;
    let (service, _) = create_service(&pool);
    let exchange = service
        .create_exchange(requester.id, draft(provider.id, 50))
        .await
        .unwrap();

    let result = service
        .append_message(exchange.id, requester.id, "   ".to_string())
        .await;

    assert!(matches!(result, Err(EngineError::Validation { .. })));
}

#[tokio::test]
async fn given_sole_rating_of_five_when_rated_then_provider_average_is_five() {
    let pool = create_test_pool().await;
    let requester = seed_user(&pool, "Ada", &["Rust"], &["Piano"]).await;
    let provider = seed_user(&pool, "Grace", &["Piano"], &["Rust"]).await;
    let (service, _) = create_service(&pool);
    let exchange = service
        .create_exchange(requester.id, draft(provider.id, 50))
        .await
        .unwrap();

    // When: the requester rates the exchange 5
    let rated = service
        .rate_exchange(exchange.id, requester.id, 5, Some("great".to_string()))
        .await
        .unwrap();

    // Then: the slot is stored and the provider aggregate recomputed
    assert_that!(rated.requester_rating.unwrap().rating, eq(5));
    let users = UserRepository::new(pool.clone());
    let provider = users.find_by_id(provider.id).await.unwrap().unwrap();
    assert_that!(provider.rating.average, eq(5.0));
    assert_that!(provider.rating.count, eq(1));

    // And: the requester's own aggregate is untouched
    let requester = users.find_by_id(requester.id).await.unwrap().unwrap();
    assert_that!(requester.rating.count, eq(0));
}

#[tokio::test]
async fn given_two_ratings_when_rated_then_average_is_mean() {
    let pool = create_test_pool().await;
    let requester = seed_user(&pool, "Ada", &["Rust"], &["Piano"]).await;
    let provider = seed_user(&pool, "Grace", &["Piano"], &["Rust"]).await;
    let (service, _) = create_service(&pool);

    for rating in [5, 4] {
        let exchange = service
            .create_exchange(requester.id, draft(provider.id, 0))
            .await
            .unwrap();
        service
            .rate_exchange(exchange.id, requester.id, rating, None)
            .await
            .unwrap();
    }

    let provider = UserRepository::new(pool.clone())
        .find_by_id(provider.id)
        .await
        .unwrap()
        .unwrap();
    assert_that!(provider.rating.average, eq(4.5));
    assert_that!(provider.rating.count, eq(2));
}

#[tokio::test]
async fn given_out_of_range_rating_when_rated_then_invalid() {
    let pool = create_test_pool().await;
    let requester = seed_user(&pool, "Ada", &["Rust"], &["Piano"]).await;
    let provider = seed_user(&pool, "Grace", &["Piano"], &["Rust"]).await;
    let (service, _) = create_service(&pool);
    let exchange = service
        .create_exchange(requester.id, draft(provider.id, 50))
        .await
        .unwrap();

    for value in [0, 6] {
        let result = service
            .rate_exchange(exchange.id, requester.id, value, None)
            .await;
        assert!(matches!(
            result,
            Err(EngineError::InvalidRating { .. })
        ));
    }
}

#[tokio::test]
async fn given_stranger_when_rating_then_forbidden() {
    let pool = create_test_pool().await;
    let requester = seed_user(&pool, "Ada", &["Rust"], &["Piano"]).await;
    let provider = seed_user(&pool, "Grace", &["Piano"], &["Rust"]).await;
    let stranger = seed_user(&pool, "Eve", &[], &[]).await;
    let (service, _) = create_service(&pool);
    let exchange = service
        .create_exchange(requester.id, draft(provider.id, 50))
        .await
        .unwrap();

    let result = service
        .rate_exchange(exchange.id, stranger.id, 5, None)
        .await;

    assert!(matches!(result, Err(EngineError::NotParticipant { .. })));
}
