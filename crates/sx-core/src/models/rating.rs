use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregate rating carried on a user record. Recomputed from the
/// exchanges where the user was the rated party, never incremented.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct RatingSummary {
    pub average: f64,
    pub count: i64,
}

/// One side's rating of a completed exchange. The slot a role writes
/// rates the counterpart, not the writer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeRating {
    pub rating: u8,
    pub review: Option<String>,
    pub rated_at: DateTime<Utc>,
}

impl ExchangeRating {
    pub fn new(rating: u8, review: Option<String>) -> Self {
        Self {
            rating,
            review,
            rated_at: Utc::now(),
        }
    }
}
