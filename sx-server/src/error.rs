use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Logger setup failed: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("IO error: {message}")]
    Io { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
