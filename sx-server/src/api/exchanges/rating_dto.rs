use sx_core::ExchangeRating;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RatingDto {
    pub rating: u8,
    pub review: Option<String>,
    pub rated_at: i64,
}

impl From<ExchangeRating> for RatingDto {
    fn from(rating: ExchangeRating) -> Self {
        Self {
            rating: rating.rating,
            review: rating.review,
            rated_at: rating.rated_at.timestamp(),
        }
    }
}
