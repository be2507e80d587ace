//! Placeholder code-analysis and code-generation responses

use crate::models::{AnalyzeResponse, GenerateResponse};

const PLACEHOLDER_STATUS: &str = "placeholder";

pub fn analyze_code(code: &str) -> AnalyzeResponse {
    AnalyzeResponse {
        status: PLACEHOLDER_STATUS.to_string(),
        message: "Code analysis not implemented yet".to_string(),
        input_length: code.chars().count(),
        suggestions: Vec::new(),
    }
}

pub fn generate_code(prompt: &str) -> GenerateResponse {
    GenerateResponse {
        status: PLACEHOLDER_STATUS.to_string(),
        message: "Code generation not implemented yet".to_string(),
        prompt: prompt.to_string(),
        generated_code: "# TODO: Implement code generation".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_counts_characters() {
        let response = analyze_code("let ü = 1;");
        assert_eq!(response.status, "placeholder");
        assert_eq!(response.input_length, 10);
        assert!(response.suggestions.is_empty());

        assert_eq!(analyze_code("").input_length, 0);
    }

    #[test]
    fn test_generate_echoes_prompt() {
        let response = generate_code("write a sorter");
        assert_eq!(response.prompt, "write a sorter");
        assert_eq!(response.message, "Code generation not implemented yet");
        assert_eq!(response.generated_code, "# TODO: Implement code generation");
    }
}
