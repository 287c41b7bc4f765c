use crate::ExchangeDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ExchangeListResponse {
    pub exchanges: Vec<ExchangeDto>,
}
