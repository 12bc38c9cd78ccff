use thiserror::Error;

/// Every error is fatal for the current run
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MotifMarkError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Input format error: {0}")]
    InputFormat(String),

    #[error("Render error: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, MotifMarkError>;
