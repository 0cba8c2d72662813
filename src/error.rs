use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EatsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not create record file {}: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed record: {0}")]
    Parse(String),

    #[error("Order {0} not found")]
    NotFound(u32),

    #[error("Invalid order status: {0}")]
    InvalidStatus(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to register signal handler: {0}")]
    SignalHandler(String),

    #[error("Shell completion error: {0}")]
    ShellCompletion(String),
}

pub type Result<T> = std::result::Result<T, EatsError>;
