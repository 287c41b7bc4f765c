use std::path::PathBuf;
use std::result::Result as StdResult;

use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("Config error: {message}")]
    Config { message: String },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        ConfigError::Config {
            message: message.into(),
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
