//! Common part model used in both requests and responses.

use serde::{Deserialize, Serialize};

/// A single segment of a content entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    /// A text part containing a string value
    Text {
        /// The text content of the part
        text: String,
    },
    /// A part containing inline binary data
    InlineData {
        /// The inline data content of the part
        #[serde(alias = "inlineData")]
        inline_data: InlineData,
    },
    /// Any other part shape, such as a function call, kept as raw JSON
    Other(serde_json::Value),
}

impl Part {
    /// Creates a text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Creates an inline data part from already base64-encoded data.
    pub fn inline_data(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self::InlineData {
            inline_data: InlineData {
                mime_type: mime_type.into(),
                data: data.into(),
            },
        }
    }

    /// Returns the text of this part, if it is a text part.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text } => Some(text),
            _ => None,
        }
    }
}

/// Base64-encoded binary data tagged with its MIME type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineData {
    /// The MIME type of the inline data
    #[serde(alias = "mimeType")]
    pub mime_type: String,
    /// The base64-encoded content
    pub data: String,
}
