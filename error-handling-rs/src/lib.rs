//! # Error Handling
//!
//! Shared error types and structured logging setup for the AI services.

pub mod types;
pub mod logging;

// Re-export commonly used types
pub use types::{ErrorKind, Result, ServiceError};
pub use logging::{init_logging, LoggingConfig};
