//! # Structured Logging
//!
//! Installs the global `tracing` subscriber used by the service binaries.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::types::{ErrorKind, Result, ServiceError};

// Flag to track if logging has been initialized
static LOGGING_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// The log level to use (trace, debug, info, warn, error)
    pub level: String,
    /// The service name for identification
    pub service_name: String,
    /// Whether to use JSON formatting
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            service_name: "ai-services".to_string(),
            json_format: false,
        }
    }
}

/// Builds the level filter; `RUST_LOG` takes precedence over the configured level
fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_lowercase()))
}

/// Initializes the structured logging system
///
/// Calling this more than once is a no-op.
pub fn init_logging(config: Option<LoggingConfig>) -> Result<()> {
    if LOGGING_INITIALIZED.load(Ordering::SeqCst) {
        return Ok(());
    }

    let config = config.unwrap_or_default();

    // Exactly one of the two formatting layers is populated
    let json_layer = config.json_format.then(|| {
        fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .with_target(true)
    });
    let text_layer = (!config.json_format).then(|| fmt::layer().with_target(true));

    Registry::default()
        .with(build_filter(&config.level))
        .with(json_layer)
        .with(text_layer)
        .try_init()
        .map_err(|e| {
            ServiceError::new(
                ErrorKind::Initialization,
                format!("Failed to set global subscriber: {}", e),
            )
        })?;

    LOGGING_INITIALIZED.store(true, Ordering::SeqCst);

    tracing::info!(
        service = %config.service_name,
        level = %config.level,
        json = %config.json_format,
        "Structured logging initialized"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.service_name, "ai-services");
        assert!(!config.json_format);
    }

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging(Some(LoggingConfig {
            level: "DEBUG".to_string(),
            ..LoggingConfig::default()
        }))
        .unwrap();
        init_logging(None).unwrap();
        assert!(LOGGING_INITIALIZED.load(Ordering::SeqCst));
    }
}
