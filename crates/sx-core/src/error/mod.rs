use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid skill level: {value}")]
    InvalidSkillLevel { value: String },

    #[error("Invalid exchange status: {value}")]
    InvalidExchangeStatus { value: String },

    #[error("Invalid exchange mode: {value}")]
    InvalidExchangeMode { value: String },

    #[error("Invalid exchange role: {value}")]
    InvalidExchangeRole { value: String },
}

pub type Result<T> = StdResult<T, CoreError>;
