//! Data structures for the Gemini AI API requests and responses.

mod model_params;
mod part;
mod request;
mod response;

pub use model_params::{ModelParams, DEFAULT_MODEL};
pub use part::{InlineData, Part};
pub use request::{Content, Request};
pub use response::{Candidate, CandidateContent, Response, UsageMetadata};
