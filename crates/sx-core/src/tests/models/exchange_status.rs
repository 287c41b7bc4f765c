use crate::ExchangeStatus;

use std::str::FromStr;

#[test]
fn test_linear_transitions_are_allowed() {
    assert!(ExchangeStatus::Pending.can_transition_to(ExchangeStatus::Accepted));
    assert!(ExchangeStatus::Accepted.can_transition_to(ExchangeStatus::InProgress));
    assert!(ExchangeStatus::InProgress.can_transition_to(ExchangeStatus::Completed));
}

#[test]
fn test_skipping_a_step_is_rejected() {
    assert!(!ExchangeStatus::Pending.can_transition_to(ExchangeStatus::InProgress));
    assert!(!ExchangeStatus::Pending.can_transition_to(ExchangeStatus::Completed));
    assert!(!ExchangeStatus::Accepted.can_transition_to(ExchangeStatus::Completed));
}

#[test]
fn test_backwards_transitions_are_rejected() {
    assert!(!ExchangeStatus::Accepted.can_transition_to(ExchangeStatus::Pending));
    assert!(!ExchangeStatus::Completed.can_transition_to(ExchangeStatus::InProgress));
}

#[test]
fn test_any_non_terminal_state_can_cancel() {
    assert!(ExchangeStatus::Pending.can_transition_to(ExchangeStatus::Cancelled));
    assert!(ExchangeStatus::Accepted.can_transition_to(ExchangeStatus::Cancelled));
    assert!(ExchangeStatus::InProgress.can_transition_to(ExchangeStatus::Cancelled));
}

#[test]
fn test_terminal_states_admit_nothing() {
    for next in [
        ExchangeStatus::Pending,
        ExchangeStatus::Accepted,
        ExchangeStatus::InProgress,
        ExchangeStatus::Completed,
        ExchangeStatus::Cancelled,
    ] {
        assert!(!ExchangeStatus::Completed.can_transition_to(next));
        assert!(!ExchangeStatus::Cancelled.can_transition_to(next));
    }
}

#[test]
fn test_round_trips_through_str() {
    for status in [
        ExchangeStatus::Pending,
        ExchangeStatus::Accepted,
        ExchangeStatus::InProgress,
        ExchangeStatus::Completed,
        ExchangeStatus::Cancelled,
    ] {
        assert_eq!(ExchangeStatus::from_str(status.as_str()).unwrap(), status);
    }
}

#[test]
fn test_unknown_status_string_is_an_error() {
    assert!(ExchangeStatus::from_str("In Progress").is_err());
    assert!(ExchangeStatus::from_str("").is_err());
}
