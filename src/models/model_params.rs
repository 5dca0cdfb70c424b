use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Default model used for vehicle identification.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Configuration parameters for the generative model
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[builder(doc)]
pub struct ModelParams {
    /// Model identifier (e.g., "gemini-1.5-flash")
    #[builder(setter(into), default = String::from(DEFAULT_MODEL))]
    pub model: String,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl From<&str> for ModelParams {
    fn from(model: &str) -> Self {
        Self::builder().model(model).build()
    }
}

impl From<String> for ModelParams {
    fn from(model: String) -> Self {
        Self::builder().model(model).build()
    }
}
