//! Enrichment error types
//!
//! Error handling for enricher construction and logging bootstrap. The
//! enrichment operation itself is infallible: absent request scope and
//! absent session are normal cases, not errors.

use thiserror::Error;

/// Result type for enrichment operations
pub type EnrichResult<T> = Result<T, EnrichError>;

/// Errors surfaced while configuring enrichment
#[derive(Error, Debug)]
pub enum EnrichError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Logging initialization failed: {message}")]
    LoggingInit { message: String },
}

impl EnrichError {
    /// Create a configuration error
    pub fn config<T: Into<String>>(message: T) -> Self {
        EnrichError::Config {
            message: message.into(),
        }
    }

    /// Create a logging initialization error
    pub fn logging_init<T: Into<String>>(message: T) -> Self {
        EnrichError::LoggingInit {
            message: message.into(),
        }
    }
}
