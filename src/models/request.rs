//! Request models for the Gemini AI API.

use serde::Serialize;

use super::Part;

/// A request to the Gemini AI API.
#[derive(Debug, Clone, Serialize)]
pub struct Request {
    /// The contents of the request, including the prompt text.
    pub contents: Vec<Content>,
}

/// A content object containing parts of the request.
#[derive(Debug, Clone, Serialize)]
pub struct Content {
    /// The parts that make up the content.
    pub parts: Vec<Part>,
}

impl Request {
    /// Creates a single-content request with a text prompt followed by an inline part.
    ///
    /// # Arguments
    ///
    /// * `text` - The instruction for the model
    /// * `inline` - The inline data part (usually an image)
    pub fn with_inline_part(text: impl Into<String>, inline: Part) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part::text(text), inline],
            }],
        }
    }
}
