//! # Standardized Error Types
//!
//! Service-level errors raised while configuring and starting the AI services.

use std::error::Error as StdError;
use std::fmt;

/// A type alias for Result with the error type defaulting to ServiceError
pub type Result<T, E = ServiceError> = std::result::Result<T, E>;

/// Categorizes different kinds of errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or malformed configuration
    Configuration,
    /// Startup failure (logging, storage, listeners)
    Initialization,
    /// Internal server error
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Configuration => write!(f, "Configuration Error"),
            ErrorKind::Initialization => write!(f, "Initialization Error"),
            ErrorKind::Internal => write!(f, "Internal Server Error"),
        }
    }
}

/// Core error type shared by the service crates
#[derive(Debug, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ServiceError {
    pub kind: ErrorKind,
    pub message: String,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl ServiceError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Wraps an underlying error, keeping it reachable through `source()`
    pub fn with_source<E>(kind: ErrorKind, message: impl Into<String>, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Settings that could not be read, parsed or resolved
    pub fn configuration<E>(message: impl Into<String>, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::with_source(ErrorKind::Configuration, message, source)
    }
}
