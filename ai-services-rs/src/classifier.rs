//! Test-failure classification
//!
//! Maps an error message to a fixed root cause, severity and remediation list
//! using an ordered rule table. Rules are evaluated top to bottom against the
//! lowercased message; the first match wins.

use crate::models::{FailureAnalysisResult, Severity};

pub const UNKNOWN_ERROR: &str = "Unknown error";
pub const ANALYSIS_PREFIX: &str = "Analysis of test failure: ";

/// Characters of the message echoed into `analysis`
pub const ANALYSIS_EXCERPT_CHARS: usize = 200;

struct ClassificationRule {
    /// Lowercase substrings, any of which selects the rule
    keywords: &'static [&'static str],
    root_cause: &'static str,
    severity: Severity,
    fixes: &'static [&'static str],
}

impl ClassificationRule {
    fn matches(&self, lowered_message: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered_message.contains(keyword))
    }
}

const RULES: &[ClassificationRule] = &[
    ClassificationRule {
        keywords: &["undefined"],
        root_cause: "Undefined variable or function",
        severity: Severity::High,
        fixes: &[
            "Check if all variables are properly defined",
            "Verify function imports and exports",
            "Ensure all dependencies are installed",
        ],
    },
    ClassificationRule {
        keywords: &["timeout", "timed out"],
        root_cause: "Test timeout",
        severity: Severity::Medium,
        fixes: &[
            "Increase test timeout duration",
            "Check for infinite loops or blocking operations",
            "Verify async operations are properly handled",
        ],
    },
    ClassificationRule {
        keywords: &["assertion", "expected"],
        root_cause: "Assertion failure",
        severity: Severity::Medium,
        fixes: &[
            "Review expected vs actual values",
            "Check test logic and assertions",
            "Verify mock data and test setup",
        ],
    },
];

static FALLBACK_RULE: ClassificationRule = ClassificationRule {
    keywords: &[],
    root_cause: "Unknown",
    severity: Severity::Medium,
    fixes: &[
        "Review error message and stack trace",
        "Check test setup and dependencies",
        "Verify test environment configuration",
    ],
};

/// Classify a failure message; an absent or empty message reads as "Unknown error"
pub fn classify(error_message: Option<&str>) -> FailureAnalysisResult {
    let message = error_message
        .filter(|m| !m.is_empty())
        .unwrap_or(UNKNOWN_ERROR);
    let lowered = message.to_lowercase();

    let rule = RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .unwrap_or(&FALLBACK_RULE);

    let excerpt: String = message.chars().take(ANALYSIS_EXCERPT_CHARS).collect();

    FailureAnalysisResult {
        analysis: format!("{}{}", ANALYSIS_PREFIX, excerpt),
        suggested_fixes: rule.fixes.iter().map(|fix| fix.to_string()).collect(),
        root_cause: rule.root_cause.to_string(),
        severity: rule.severity,
    }
}
