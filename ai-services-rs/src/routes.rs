//! Route handlers
//!
//! The AI handlers hand their work to the blocking pool; a failed join is the
//! only internal error they can hit and maps to the operation's 500 response.

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::errors::{ApiError, ApiJson};
use crate::models::{
    AnalyzeResponse, FailureAnalysisRequest, FailureAnalysisResult, GenerateResponse,
    HealthResponse, RootResponse, TestGenerationRequest, TestGenerationResponse,
};
use crate::validation::TextBody;
use crate::{classifier, placeholders, renderer, AiServices, SERVICE_NAME};

const API_DISPLAY_NAME: &str = "Comet AI Services";
const DOCS_PATH: &str = "/docs";

/// GET /
pub async fn root(State(services): State<Arc<AiServices>>) -> Json<RootResponse> {
    let settings = services.settings();
    Json(RootResponse {
        message: settings.app_name.clone(),
        version: settings.version.clone(),
        docs: DOCS_PATH,
    })
}

/// GET /health
pub async fn health(State(services): State<Arc<AiServices>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
        version: services.settings().version.clone(),
        message: None,
    })
}

/// GET /api/v1/
pub async fn api_root(State(services): State<Arc<AiServices>>) -> Json<RootResponse> {
    Json(RootResponse {
        message: API_DISPLAY_NAME.to_string(),
        version: services.settings().version.clone(),
        docs: DOCS_PATH,
    })
}

/// GET /api/v1/health
pub async fn api_health(State(services): State<Arc<AiServices>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
        version: services.settings().version.clone(),
        message: Some("AI Services are operational"),
    })
}

/// POST /api/v1/ai/generate-tests
pub async fn generate_tests(
    ApiJson(request): ApiJson<TestGenerationRequest>,
) -> Result<Json<TestGenerationResponse>, ApiError> {
    tracing::info!(
        language = %request.language,
        framework = %request.framework,
        test_type = %request.test_type,
        source_len = request.source_code.len(),
        "Test generation request"
    );

    let response = tokio::task::spawn_blocking(move || renderer::generate_tests(&request))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Test generation worker failed");
            ApiError::TestGeneration(e.to_string())
        })?;

    tracing::info!(
        total_tests = response.total_tests,
        truncated = response.truncated,
        "Generated test scaffolds"
    );
    Ok(Json(response))
}

/// POST /api/v1/ai/analyze-failures
pub async fn analyze_failures(
    ApiJson(request): ApiJson<FailureAnalysisRequest>,
) -> Result<Json<FailureAnalysisResult>, ApiError> {
    tracing::info!(
        has_error_message = request.error_message.is_some(),
        has_stack_trace = request.stack_trace.is_some(),
        "Failure analysis request"
    );

    let result = tokio::task::spawn_blocking(move || {
        classifier::classify(request.error_message.as_deref())
    })
    .await
    .map_err(|e| {
        tracing::error!(error = %e, "Failure analysis worker failed");
        ApiError::FailureAnalysis(e.to_string())
    })?;

    tracing::info!(root_cause = %result.root_cause, severity = ?result.severity, "Classified failure");
    Ok(Json(result))
}

/// POST /api/v1/analyze
pub async fn analyze_code(TextBody(code): TextBody) -> Json<AnalyzeResponse> {
    tracing::debug!(input_len = code.len(), "Code analysis placeholder");
    Json(placeholders::analyze_code(&code))
}

/// POST /api/v1/generate
pub async fn generate_code(TextBody(prompt): TextBody) -> Json<GenerateResponse> {
    tracing::debug!(prompt_len = prompt.len(), "Code generation placeholder");
    Json(placeholders::generate_code(&prompt))
}
