//! Database lifecycle hooks
//!
//! No storage backend is wired up; these hooks only report what is configured.

use config_rs::Settings;
use error_handling_rs::Result;

/// Prepare storage connections. Returns `Ok(true)` once the service may proceed.
pub async fn init_db(settings: &Settings) -> Result<bool> {
    match &settings.database_url {
        Some(_) => tracing::info!("Database URL configured, connection setup not implemented yet"),
        None => tracing::info!("Database initialization skipped, no database configured"),
    }
    if settings.redis_url.is_some() {
        tracing::info!("Redis URL configured, cache client not implemented yet");
    }
    Ok(true)
}

pub async fn close_db() {
    tracing::info!("Database connections closed");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_init_db_succeeds_without_database() {
        assert!(init_db(&Settings::default()).await.unwrap());
    }

    #[tokio::test]
    async fn test_init_db_succeeds_with_database_url() {
        let settings = Settings {
            database_url: Some("postgres://localhost/golive".to_string()),
            ..Settings::default()
        };
        assert!(init_db(&settings).await.unwrap());
        close_db().await;
    }
}
