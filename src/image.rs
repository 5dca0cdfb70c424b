//! The user-selected image that gets sent for identification.

use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use tracing::debug;

use crate::{error::VehicleIdError, models::Part};

/// MIME type assumed when it cannot be guessed from the file name.
pub const FALLBACK_MIME_TYPE: &str = "image/jpeg";

/// An image selected by the user, held in memory until it is submitted.
#[derive(Clone, PartialEq, Eq)]
pub struct UploadedImage {
    bytes: Vec<u8>,
    mime_type: String,
}

impl UploadedImage {
    /// Creates an image from raw bytes and an explicit MIME type.
    pub fn new(bytes: impl Into<Vec<u8>>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            mime_type: mime_type.into(),
        }
    }

    /// Reads an image from disk, guessing its MIME type from the extension.
    ///
    /// Unknown or non-image extensions fall back to `image/jpeg`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, VehicleIdError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let mime_type = mime_guess::from_path(path)
            .first()
            .filter(|mime| mime.type_() == mime_guess::mime::IMAGE)
            .map(|mime| mime.to_string())
            .unwrap_or_else(|| FALLBACK_MIME_TYPE.to_string());

        debug!(path = %path.display(), %mime_type, size = bytes.len(), "Loaded image");
        Ok(Self::new(bytes, mime_type))
    }

    /// The raw image bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The MIME type of the image.
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Encodes the image as standard, padded base64.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }

    /// Builds the inline data part carrying this image.
    pub fn to_part(&self) -> Part {
        Part::inline_data(self.mime_type.clone(), self.to_base64())
    }
}

impl std::fmt::Debug for UploadedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadedImage")
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn encodes_bytes_as_padded_base64() {
        let image = UploadedImage::new(b"car".to_vec(), "image/png");
        assert_eq!(image.to_base64(), "Y2Fy");

        let image = UploadedImage::new(b"cars".to_vec(), "image/png");
        assert_eq!(image.to_base64(), "Y2Fycw==");
    }

    #[test]
    fn part_carries_mime_type_and_data() {
        let image = UploadedImage::new(vec![0xff, 0xd8, 0xff], "image/jpeg");
        assert_eq!(image.to_part(), Part::inline_data("image/jpeg", "/9j/"));
    }

    #[tokio::test]
    async fn from_path_guesses_mime_type() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(b"\x89PNG").unwrap();

        let image = UploadedImage::from_path(file.path()).await.unwrap();
        assert_eq!(image.mime_type(), "image/png");
        assert_eq!(image.bytes(), b"\x89PNG");
    }

    #[tokio::test]
    async fn from_path_falls_back_to_jpeg() {
        let mut file = tempfile::Builder::new().suffix(".bin").tempfile().unwrap();
        file.write_all(b"data").unwrap();

        let image = UploadedImage::from_path(file.path()).await.unwrap();
        assert_eq!(image.mime_type(), FALLBACK_MIME_TYPE);
    }

    #[tokio::test]
    async fn from_path_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = UploadedImage::from_path(dir.path().join("missing.jpg")).await;
        assert!(matches!(result, Err(VehicleIdError::ImageReadError(_))));
    }
}
