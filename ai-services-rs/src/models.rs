//! Request and response bodies for the AI endpoints
//!
//! All bodies are request-scoped values; field names follow the camelCase JSON
//! contract except for the placeholder endpoints, which keep snake_case.

use serde::{Deserialize, Serialize};

use crate::renderer::DEFAULT_FRAMEWORK;

pub const DEFAULT_TEST_TYPE: &str = "UNIT";

fn default_framework() -> String {
    DEFAULT_FRAMEWORK.to_string()
}

fn default_test_type() -> String {
    DEFAULT_TEST_TYPE.to_string()
}

/// POST /api/v1/ai/generate-tests request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestGenerationRequest {
    #[serde(default, alias = "code")]
    pub source_code: String,
    pub language: String,
    #[serde(default = "default_framework")]
    pub framework: String,
    #[serde(default = "default_test_type")]
    pub test_type: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// One rendered test file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedTest {
    pub file_name: String,
    pub test_code: String,
    pub description: String,
    pub framework: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestGenerationResponse {
    pub tests: Vec<GeneratedTest>,
    pub total_tests: usize,
    pub language: String,
    pub framework: String,
    /// Set when candidates beyond the per-request cap were dropped
    pub truncated: bool,
}

/// POST /api/v1/ai/analyze-failures request body
///
/// `test_results` and `stack_trace` are accepted for forward compatibility and
/// do not influence classification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureAnalysisRequest {
    #[serde(default)]
    pub test_results: serde_json::Value,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub stack_trace: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureAnalysisResult {
    pub analysis: String,
    pub suggested_fixes: Vec<String>,
    pub root_cause: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
    pub docs: &'static str,
}

/// POST /api/v1/analyze response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub status: String,
    pub message: String,
    pub input_length: usize,
    pub suggestions: Vec<String>,
}

/// POST /api/v1/generate response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub status: String,
    pub message: String,
    pub prompt: String,
    pub generated_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_generation_request_defaults() {
        let request: TestGenerationRequest =
            serde_json::from_value(json!({ "language": "javascript" })).unwrap();
        assert_eq!(request.source_code, "");
        assert_eq!(request.framework, "Jest");
        assert_eq!(request.test_type, "UNIT");
        assert!(request.description.is_none());
    }

    #[test]
    fn test_generation_request_accepts_code_alias() {
        let request: TestGenerationRequest = serde_json::from_value(json!({
            "code": "function a() {}",
            "language": "typescript",
            "framework": "Mocha",
            "testType": "INTEGRATION",
        }))
        .unwrap();
        assert_eq!(request.source_code, "function a() {}");
        assert_eq!(request.framework, "Mocha");
        assert_eq!(request.test_type, "INTEGRATION");
    }

    #[test]
    fn test_generation_request_requires_language() {
        let result: Result<TestGenerationRequest, _> =
            serde_json::from_value(json!({ "sourceCode": "const a = () => 1" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_failure_request_all_optional() {
        let request: FailureAnalysisRequest = serde_json::from_value(json!({})).unwrap();
        assert!(request.test_results.is_null());
        assert!(request.error_message.is_none());
        assert!(request.stack_trace.is_none());
    }

    #[test]
    fn test_failure_result_wire_shape() {
        let result = FailureAnalysisResult {
            analysis: "Analysis of test failure: boom".to_string(),
            suggested_fixes: vec!["Check it".to_string()],
            root_cause: "Unknown".to_string(),
            severity: Severity::Medium,
        };
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "analysis": "Analysis of test failure: boom",
                "suggestedFixes": ["Check it"],
                "rootCause": "Unknown",
                "severity": "medium",
            })
        );
    }

    #[test]
    fn test_health_omits_missing_message() {
        let health = HealthResponse {
            status: "healthy",
            service: "ai-services",
            version: "1.0.0".to_string(),
            message: None,
        };
        let value = serde_json::to_value(&health).unwrap();
        assert!(value.get("message").is_none());
    }
}
