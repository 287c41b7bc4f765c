use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    /// One of: pending, accepted, in_progress, completed, cancelled
    pub status: String,
}
