use crate::{CoreError, Result as CoreErrorResult};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How the session is held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExchangeMode {
    Online,
    InPerson,
}

impl ExchangeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::InPerson => "in_person",
        }
    }
}

impl FromStr for ExchangeMode {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "online" => Ok(Self::Online),
            "in_person" => Ok(Self::InPerson),
            _ => Err(CoreError::InvalidExchangeMode {
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for ExchangeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
