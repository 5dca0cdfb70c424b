//! Response models for the Gemini AI API.

use serde::Deserialize;

use super::Part;

/// A response from the Gemini AI API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// The generated candidates from the model.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Metadata about token usage.
    pub usage_metadata: Option<UsageMetadata>,
    /// The version of the model used.
    pub model_version: Option<String>,
}

impl Response {
    /// Gets the text of the first candidate's first part.
    ///
    /// Returns `None` when there is no candidate, the candidate has no parts,
    /// or the first part is not text.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .as_text()
    }
}

/// A candidate response from the model.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// The content of the candidate response.
    pub content: Option<CandidateContent>,
    /// The reason why the generation finished.
    pub finish_reason: Option<String>,
    /// Average log probabilities for the generation.
    pub avg_logprobs: Option<f64>,
}

/// Content of a candidate response.
#[derive(Debug, Clone, Deserialize)]
pub struct CandidateContent {
    /// The parts of the generated content.
    #[serde(default)]
    pub parts: Vec<Part>,
    /// The role that produced the content.
    pub role: Option<String>,
}

/// Metadata about token usage in the request and response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    /// Number of tokens in the prompt.
    pub prompt_token_count: Option<i32>,
    /// Number of tokens in the generated candidates.
    pub candidates_token_count: Option<i32>,
    /// Total number of tokens used.
    pub total_token_count: Option<i32>,
}
