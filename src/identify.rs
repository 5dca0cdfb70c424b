//! Submission of an image to the description service.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::{
    client::GenerativeModel, error::VehicleIdError, image::UploadedImage, models::Request,
};

/// Instruction sent alongside every image.
pub const IDENTIFY_PROMPT: &str =
    "Identify the car model, provide specs, pricing, fuel efficiency, and any other relevant details.";

/// Builds the two-part request for `image`: the instruction, then the image itself.
pub fn build_request(image: &UploadedImage) -> Request {
    Request::with_inline_part(IDENTIFY_PROMPT, image.to_part())
}

/// A service that turns an image into a free-text description.
#[async_trait]
pub trait DescriptionService: Send + Sync {
    /// Describes `image`, returning the service's raw text answer.
    ///
    /// # Errors
    ///
    /// Returns an error if the service cannot be reached, rejects the request,
    /// or answers without text.
    async fn describe(&self, image: &UploadedImage) -> Result<String, VehicleIdError>;
}

#[async_trait]
impl DescriptionService for GenerativeModel {
    async fn describe(&self, image: &UploadedImage) -> Result<String, VehicleIdError> {
        info!(
            model = %self.model(),
            mime_type = %image.mime_type(),
            size = image.bytes().len(),
            "Submitting image for identification"
        );

        let response = self.generate_response(build_request(image)).await?;
        if let Some(usage) = &response.usage_metadata {
            debug!(
                prompt_tokens = ?usage.prompt_token_count,
                total_tokens = ?usage.total_token_count,
                "Token usage"
            );
        }

        response.first_text().map(str::to_string).ok_or_else(|| {
            VehicleIdError::MalformedResponse(
                "expected candidates[0].content.parts[0].text".to_string(),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_has_prompt_then_inline_image() {
        let image = UploadedImage::new(b"car".to_vec(), "image/webp");
        let value = serde_json::to_value(build_request(&image)).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "contents": [{
                    "parts": [
                        { "text": IDENTIFY_PROMPT },
                        { "inline_data": { "mime_type": "image/webp", "data": "Y2Fy" } }
                    ]
                }]
            })
        );
    }
}
