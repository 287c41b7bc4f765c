use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RateExchangeRequest {
    /// 1 to 5
    pub rating: u8,
    pub review: Option<String>,
}
