//! Error types for DhwaniNav

use dhwani_map::MapError;
use thiserror::Error;

/// DhwaniNav error type
#[derive(Error, Debug)]
pub enum NavError {
    /// Error from the mapping core
    #[error("Map error: {0}")]
    Map(#[from] MapError),

    /// Configuration could not be read or failed validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// Actuator rejected a command
    #[error("Actuator error: {0}")]
    Actuator(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Signal handler could not be installed
    #[error("Signal error: {0}")]
    Signal(String),

    /// The control loop already composed and exported its map
    #[error("Control loop already finalized")]
    AlreadyFinalized,
}

impl From<toml::de::Error> for NavError {
    fn from(e: toml::de::Error) -> Self {
        NavError::Config(e.to_string())
    }
}

impl From<ctrlc::Error> for NavError {
    fn from(e: ctrlc::Error) -> Self {
        NavError::Signal(e.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, NavError>;
