//! Error types for the vehicle identifier.

use thiserror::Error;

/// Errors that can occur while talking to the description service.
#[derive(Debug, Error)]
pub enum VehicleIdError {
    /// Error occurred during an API request.
    ///
    /// The request URL is stripped because it carries the API key.
    #[error("API request failed: {0}")]
    RequestError(#[source] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("Request failed with status {status}: {body}")]
    StatusError {
        /// HTTP status returned by the service
        status: reqwest::StatusCode,
        /// Response body, if any
        body: String,
    },

    /// Error occurred when parsing JSON.
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Error occurred when reading an image from disk.
    #[error("Failed to read image: {0}")]
    ImageReadError(#[from] std::io::Error),

    /// The response did not contain a text part where one was expected.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for VehicleIdError {
    fn from(err: reqwest::Error) -> Self {
        Self::RequestError(err.without_url())
    }
}

/// Errors raised by an identification session before any request is sent.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// Submission was attempted without a selected image.
    #[error("Please select an image first.")]
    NoImageSelected,

    /// A submission is already in flight for this session.
    #[error("An identification request is already in progress.")]
    SubmissionInProgress,
}
