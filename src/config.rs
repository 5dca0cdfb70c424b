//! Client configuration read from the environment.

use tracing::warn;
use typed_builder::TypedBuilder;

use crate::models::ModelParams;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";
/// Environment variable overriding the API endpoint.
pub const BASE_URL_ENV: &str = "GOOGLE_BASE_URL";
/// Environment variable selecting the model.
pub const MODEL_ENV: &str = "GEMINI_MODEL";

/// Default API endpoint for Google's Generative AI service
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Settings needed to reach the description service.
#[derive(Clone, TypedBuilder)]
#[builder(doc)]
pub struct ClientConfig {
    /// The API key for authentication
    #[builder(setter(into))]
    pub api_key: String,
    /// Scheme and host of the API, without a trailing slash
    #[builder(setter(into), default = String::from(DEFAULT_BASE_URL))]
    pub base_url: String,
    /// The model parameters
    #[builder(default)]
    pub params: ModelParams,
}

impl ClientConfig {
    /// Reads the configuration from the environment.
    ///
    /// # Environment Variables
    ///
    /// * `GOOGLE_API_KEY` - The API key. When unset an empty key is used and the
    ///   service rejects the request.
    /// * `GOOGLE_BASE_URL` - Optional endpoint override
    /// * `GEMINI_MODEL` - Optional model identifier
    pub fn from_env() -> Self {
        let api_key = std::env::var(API_KEY_ENV).unwrap_or_else(|_| {
            warn!("{API_KEY_ENV} is not set; requests will be rejected by the service");
            String::new()
        });
        let base_url = std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let params = std::env::var(MODEL_ENV)
            .map(ModelParams::from)
            .unwrap_or_default();

        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            params,
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("params", &self.params)
            .finish()
    }
}
