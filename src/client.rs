//! Client implementation for the Gemini AI API.

use tracing::debug;

use crate::{
    config::ClientConfig,
    error::VehicleIdError,
    models::{ModelParams, Request, Response},
};

/// Default API version
const DEFAULT_API_VERSION: &str = "v1beta";

/// Model methods this client calls.
#[derive(Debug, Copy, Clone)]
enum RequestType {
    GenerateContent,
}

impl RequestType {
    fn method(self) -> &'static str {
        match self {
            Self::GenerateContent => "generateContent",
        }
    }
}

/// A client for interacting with the Gemini AI API.
#[derive(Debug, Clone)]
pub struct GenerativeModel {
    config: ClientConfig,
    client: reqwest::Client,
}

impl GenerativeModel {
    /// Creates a new GenerativeModel with the specified API key and model.
    ///
    /// # Arguments
    ///
    /// * `api_key` - The API key for authentication
    /// * `params` - The model parameters
    pub fn new(api_key: impl Into<String>, params: impl Into<ModelParams>) -> Self {
        Self::from_config(
            ClientConfig::builder()
                .api_key(api_key)
                .params(params.into())
                .build(),
        )
    }

    /// Creates a new GenerativeModel from a complete configuration.
    pub fn from_config(config: ClientConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// The model identifier requests are sent to.
    pub fn model(&self) -> &str {
        &self.config.params.model
    }

    fn build_url(&self, request_type: RequestType) -> String {
        format!(
            "{}/{}/models/{}:{}?key={}",
            self.config.base_url,
            DEFAULT_API_VERSION,
            self.config.params.model,
            request_type.method(),
            self.config.api_key
        )
    }

    /// Makes a request to the Gemini AI API.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent or the service answers
    /// with a non-success status.
    async fn make_request(
        &self,
        url: &str,
        request: &Request,
    ) -> Result<reqwest::Response, VehicleIdError> {
        let response = self.client.post(url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VehicleIdError::StatusError { status, body });
        }

        Ok(response)
    }

    /// Generates content using the Gemini AI API.
    ///
    /// # Arguments
    ///
    /// * `request` - The request to send to the API
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or if the response cannot be parsed.
    pub async fn generate_response(
        &self,
        request: impl Into<Request>,
    ) -> Result<Response, VehicleIdError> {
        let request = request.into();
        let url = self.build_url(RequestType::GenerateContent);
        debug!(model = %self.config.params.model, "Sending generateContent request");

        let body = self.make_request(&url, &request).await?.text().await?;
        debug!(%body, "API response");

        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_targets_generate_content_for_model() {
        let model = GenerativeModel::from_config(
            ClientConfig::builder()
                .api_key("k3y")
                .base_url("http://localhost:8080")
                .params(ModelParams::from("gemini-test"))
                .build(),
        );

        assert_eq!(
            model.build_url(RequestType::GenerateContent),
            "http://localhost:8080/v1beta/models/gemini-test:generateContent?key=k3y"
        );
        assert_eq!(model.model(), "gemini-test");
    }

    #[test]
    fn new_uses_default_endpoint() {
        let model = GenerativeModel::new("k3y", "gemini-1.5-pro");
        assert_eq!(
            model.build_url(RequestType::GenerateContent),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-pro:generateContent?key=k3y"
        );
    }
}
