use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateExchangeRequest {
    pub provider_id: String,
    pub skill: String,
    pub description: String,
    /// "online" or "in_person"
    pub mode: Option<String>,
    pub location: Option<String>,
    /// Unix seconds
    pub scheduled_at: Option<i64>,
    pub duration_hours: Option<i64>,
    #[serde(default)]
    pub points_cost: i64,
}
