use crate::{CoreError, Result as CoreErrorResult};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which side of an exchange a user is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExchangeRole {
    Requester,
    Provider,
}

impl ExchangeRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Requester => "requester",
            Self::Provider => "provider",
        }
    }

    pub fn counterpart(&self) -> ExchangeRole {
        match self {
            Self::Requester => Self::Provider,
            Self::Provider => Self::Requester,
        }
    }
}

impl FromStr for ExchangeRole {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "requester" => Ok(Self::Requester),
            "provider" => Ok(Self::Provider),
            _ => Err(CoreError::InvalidExchangeRole {
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for ExchangeRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
