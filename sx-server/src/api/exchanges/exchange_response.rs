use crate::ExchangeDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ExchangeResponse {
    pub exchange: ExchangeDto,
}
