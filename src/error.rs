use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrderError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Menu config error: {0}")]
    ConfigError(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Input ended before the session finished")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, OrderError>;
