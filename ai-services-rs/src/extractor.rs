//! Function-signature extraction
//!
//! A line-oriented lexical heuristic over web-scripting source text. It does not
//! parse: each trimmed line is checked for a `function` keyword or a `const`
//! binding to an arrow function, and whatever text sits in the name position is
//! emitted as a candidate.

use std::fmt;

use serde::Serialize;

/// Language tags the extractor understands (compared case-insensitively)
pub const SUPPORTED_LANGUAGES: [&str; 4] = ["javascript", "typescript", "jsx", "tsx"];

const FUNCTION_KEYWORD: &str = "function";
const CONST_KEYWORD: &str = "const";
const ARROW_TOKEN: &str = "=>";

/// Heuristically extracted identifier believed to name a function
///
/// Never empty after trimming. Not validated as a legal identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CandidateName(String);

impl CandidateName {
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CandidateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn supports_language(language: &str) -> bool {
    SUPPORTED_LANGUAGES
        .iter()
        .any(|supported| supported.eq_ignore_ascii_case(language))
}

/// Extract candidate function names in line order
///
/// Returns an empty list for unsupported languages. Duplicates are kept.
pub fn extract(source: &str, language: &str) -> Vec<CandidateName> {
    if !supports_language(language) {
        return Vec::new();
    }

    source
        .lines()
        .filter_map(|line| candidate_from_line(line.trim()))
        .collect()
}

fn candidate_from_line(line: &str) -> Option<CandidateName> {
    // `function` wins over `const ... =>` on the same line
    if let Some((_, rest)) = line.split_once(FUNCTION_KEYWORD) {
        let name = rest.split('(').next().unwrap_or_default();
        return CandidateName::new(name);
    }

    if line.contains(CONST_KEYWORD) && line.contains(ARROW_TOKEN) {
        let (_, rest) = line.split_once(CONST_KEYWORD)?;
        let name = rest.split('=').next().unwrap_or_default();
        return CandidateName::new(name);
    }

    None
}
