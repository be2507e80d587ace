//! AI Services
//!
//! HTTP/JSON service with heuristic test-scaffold generation and test-failure
//! classification. Nothing here calls a model: the extractor is a lexical
//! heuristic, the renderer emits fixed templates and the classifier walks a
//! keyword rule table.

use std::sync::Arc;

use axum::{
    http::HeaderValue,
    middleware,
    routing::{get, post},
    Router,
};
use config_rs::Settings;
use tower_http::compression::{predicate::SizeAbove, CompressionLayer};
use tower_http::cors::{AllowHeaders, AllowMethods, Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod classifier;
pub mod database;
pub mod errors;
pub mod extractor;
pub mod models;
pub mod placeholders;
pub mod renderer;
pub mod routes;
pub mod validation;

pub const SERVICE_NAME: &str = "ai-services";
pub const API_PREFIX: &str = "/api/v1";

/// Responses smaller than this are sent uncompressed
const MIN_COMPRESS_SIZE: u16 = 1000;

/// Shared, read-only service state
pub struct AiServices {
    settings: Settings,
}

impl AiServices {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Create the Axum router with all routes and middleware
    pub fn create_router(self: Arc<Self>) -> Router {
        let cors = self.cors_layer();

        Router::new()
            .route("/", get(routes::root))
            .route("/health", get(routes::health))
            .route(API_PREFIX, get(routes::api_root))
            .route(&format!("{}/", API_PREFIX), get(routes::api_root))
            .route(&format!("{}/health", API_PREFIX), get(routes::api_health))
            .route(
                &format!("{}/ai/generate-tests", API_PREFIX),
                post(routes::generate_tests),
            )
            .route(
                &format!("{}/ai/analyze-failures", API_PREFIX),
                post(routes::analyze_failures),
            )
            .route(&format!("{}/analyze", API_PREFIX), post(routes::analyze_code))
            .route(&format!("{}/generate", API_PREFIX), post(routes::generate_code))
            .layer(validation::payload_limit_config())
            .layer(middleware::from_fn(errors::error_envelope_middleware))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .layer(CompressionLayer::new().compress_when(SizeAbove::new(MIN_COMPRESS_SIZE)))
            .with_state(self)
    }

    /// Any origin when none are configured, otherwise the explicit list with credentials
    fn cors_layer(&self) -> CorsLayer {
        let configured = self.settings.cors_origins();
        if configured.is_empty() {
            return CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
        }

        let origins: Vec<HeaderValue> = configured
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true)
    }
}
