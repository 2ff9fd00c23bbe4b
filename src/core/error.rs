//! Error types and handling for the calculator services.
//!
//! Process-level failures (configuration, startup, serving). Per-request
//! failures are typed in their domains and turned into HTTP responses there.

use thiserror::Error;

use super::transport::TransportError;

/// A specialized Result type for process-level operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified process-level error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failure in the HTTP transport.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The gateway's outbound HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
