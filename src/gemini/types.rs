// Gemini API request/response types
//
// The response envelope is not contractually guaranteed: candidates may be
// missing, content may be a parts list, a bare string, or something else
// entirely. The deserialize side models that as a sum type and resolves it
// with an ordered fallback so normalization never fails.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Returned whenever the envelope yields no usable text.
pub const NO_TEXT_FALLBACK: &str = "AI returned no text.";

// --- Request side ---

#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Part {
    pub text: String,
}

impl GenerateRequest {
    /// Single user message carrying the whole analysis prompt.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.into(),
                }],
            }],
        }
    }
}

// --- Response side ---

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    /// Absent content is legal (e.g. a safety-blocked candidate).
    #[serde(default)]
    pub content: Option<CandidateContent>,
    #[serde(rename = "finishReason")]
    pub finish_reason: Option<String>,
}

/// The shapes candidate content has been observed to take. Untagged, so
/// deserialization tries each variant in declaration order: a parts list
/// first, then a bare string, then anything else captured verbatim.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CandidateContent {
    Fragments(FragmentList),
    Plain(String),
    Opaque(Value),
}

#[derive(Debug, Clone, Deserialize)]
pub struct FragmentList {
    pub parts: Vec<Fragment>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Fragment {
    /// Non-text fragments (e.g. function calls) have no text field.
    #[serde(default)]
    pub text: Option<String>,
}

impl GenerateResponse {
    /// Extract a single plain-text answer from the envelope.
    ///
    /// Total function - every branch degrades to text rather than erroring:
    /// fragment texts concatenated in order, a bare string taken verbatim,
    /// any other structure serialized to JSON, and the literal fallback
    /// when nothing usable remains.
    pub fn into_text(self) -> String {
        let text = match self.candidates.into_iter().next() {
            Some(candidate) => match candidate.content {
                Some(CandidateContent::Fragments(list)) => list
                    .parts
                    .into_iter()
                    .map(|fragment| fragment.text.unwrap_or_default())
                    .collect::<String>(),
                Some(CandidateContent::Plain(text)) => text,
                Some(CandidateContent::Opaque(value)) => value.to_string(),
                None => String::new(),
            },
            None => String::new(),
        };

        if text.is_empty() {
            NO_TEXT_FALLBACK.to_string()
        } else {
            text
        }
    }
}
