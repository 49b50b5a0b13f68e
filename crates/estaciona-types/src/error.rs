//! Error types for estaciona

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Vehicle not found: {0}")]
    VehicleNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No vehicles registered")]
    NoVehicles,

    #[error("Failed to open mail client: {0}")]
    MailIntent(String),
}

pub type Result<T> = std::result::Result<T, Error>;
