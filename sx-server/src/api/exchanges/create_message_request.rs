use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateMessageRequest {
    pub body: String,
}
