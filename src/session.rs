//! Per-interaction state: the selected image and the outcome of its submission.

use tracing::{error, info};

use crate::{
    error::SessionError,
    identify::DescriptionService,
    image::UploadedImage,
    parser::{parse_response, VehicleRecord},
};

/// Where the current interaction stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Nothing submitted since the last image selection.
    #[default]
    Idle,
    /// A request is in flight.
    Submitting,
    /// The service answered and its text was parsed.
    Identified {
        /// The unmodified text returned by the service
        raw_response: String,
        /// The details parsed from `raw_response`
        record: VehicleRecord,
    },
    /// The request failed; the record only carries the failure message.
    Failed {
        /// The failure record
        record: VehicleRecord,
    },
}

/// Drives one identification interaction against a [`DescriptionService`].
///
/// Selecting an image resets the session to [`SessionState::Idle`]. `submit`
/// moves it through `Submitting` to `Identified` or `Failed`. A submit future
/// that is dropped mid-flight leaves the session in `Submitting` until the next
/// selection.
#[derive(Debug)]
pub struct IdentificationSession<S> {
    service: S,
    image: Option<UploadedImage>,
    state: SessionState,
}

impl<S: DescriptionService> IdentificationSession<S> {
    /// Creates an idle session with no image selected.
    pub fn new(service: S) -> Self {
        Self {
            service,
            image: None,
            state: SessionState::Idle,
        }
    }

    /// Replaces the selected image and discards any previous result.
    pub fn select_image(&mut self, image: UploadedImage) {
        self.image = Some(image);
        self.state = SessionState::Idle;
    }

    /// The currently selected image.
    pub fn image(&self) -> Option<&UploadedImage> {
        self.image.as_ref()
    }

    /// The current state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Whether a request is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self.state, SessionState::Submitting)
    }

    /// The record of the last completed submission.
    pub fn record(&self) -> Option<&VehicleRecord> {
        match &self.state {
            SessionState::Identified { record, .. } | SessionState::Failed { record } => {
                Some(record)
            }
            SessionState::Idle | SessionState::Submitting => None,
        }
    }

    /// The raw text of the last successful submission.
    pub fn raw_response(&self) -> Option<&str> {
        match &self.state {
            SessionState::Identified { raw_response, .. } => Some(raw_response),
            _ => None,
        }
    }

    /// Sends the selected image and stores the outcome.
    ///
    /// Service failures are not returned: they are logged and stored as a
    /// [`VehicleRecord::failure`] record.
    ///
    /// # Errors
    ///
    /// Returns an error, without contacting the service or touching the state,
    /// if no image is selected or a submission is already in flight.
    pub async fn submit(&mut self) -> Result<(), SessionError> {
        let image = self.image.as_ref().ok_or(SessionError::NoImageSelected)?;
        if self.is_loading() {
            return Err(SessionError::SubmissionInProgress);
        }

        self.state = SessionState::Submitting;
        self.state = match self.service.describe(image).await {
            Ok(raw_response) => {
                let record = parse_response(&raw_response);
                info!(?record, "Vehicle identified");
                SessionState::Identified {
                    raw_response,
                    record,
                }
            }
            Err(err) => {
                error!(error = %err, "Error identifying image");
                SessionState::Failed {
                    record: VehicleRecord::failure(),
                }
            }
        };

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use async_trait::async_trait;

    use super::*;
    use crate::{error::VehicleIdError, parser::Detail};

    #[derive(Clone, Default)]
    struct FakeService {
        answer: Option<String>,
        calls: Arc<AtomicUsize>,
    }

    impl FakeService {
        fn answering(text: &str) -> Self {
            Self {
                answer: Some(text.to_string()),
                ..Self::default()
            }
        }

        fn failing() -> Self {
            Self::default()
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl DescriptionService for FakeService {
        async fn describe(&self, _image: &UploadedImage) -> Result<String, VehicleIdError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.answer
                .clone()
                .ok_or_else(|| VehicleIdError::StatusError {
                    status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
                    body: "unavailable".to_string(),
                })
        }
    }

    fn image() -> UploadedImage {
        UploadedImage::new(vec![1, 2, 3], "image/jpeg")
    }

    #[tokio::test]
    async fn submit_without_image_makes_no_call() {
        let service = FakeService::answering("Model: Civic");
        let mut session = IdentificationSession::new(service.clone());

        assert_eq!(session.submit().await, Err(SessionError::NoImageSelected));
        assert_eq!(service.calls(), 0);
        assert_eq!(session.state(), &SessionState::Idle);
        assert!(session.record().is_none());
    }

    #[tokio::test]
    async fn successful_submission_parses_response() {
        let service = FakeService::answering("Model: Honda Civic\nPricing: $25,000\n");
        let mut session = IdentificationSession::new(service.clone());
        session.select_image(image());

        session.submit().await.unwrap();

        assert_eq!(service.calls(), 1);
        assert!(!session.is_loading());
        assert_eq!(
            session.raw_response(),
            Some("Model: Honda Civic\nPricing: $25,000\n")
        );
        let details = session.record().and_then(VehicleRecord::details).unwrap();
        assert_eq!(details.model, Detail::Found("Honda Civic".into()));
        assert_eq!(details.specs, Detail::NotFound);
        assert_eq!(details.pricing, Detail::Found("$25,000".into()));
        assert_eq!(details.fuel_efficiency, Detail::NotFound);
    }

    #[tokio::test]
    async fn service_failure_collapses_into_generic_record() {
        let mut session = IdentificationSession::new(FakeService::failing());
        session.select_image(image());

        session.submit().await.unwrap();

        assert_eq!(
            session.state(),
            &SessionState::Failed {
                record: VehicleRecord::failure()
            }
        );
        assert_eq!(
            session.record().and_then(VehicleRecord::error),
            Some("Failed to identify vehicle.")
        );
        assert!(session.raw_response().is_none());
    }

    #[tokio::test]
    async fn selecting_new_image_discards_previous_result() {
        let mut session = IdentificationSession::new(FakeService::answering("Model: Civic"));
        session.select_image(image());
        session.submit().await.unwrap();
        assert!(session.record().is_some());

        let replacement = UploadedImage::new(vec![9], "image/png");
        session.select_image(replacement.clone());

        assert_eq!(session.state(), &SessionState::Idle);
        assert!(session.record().is_none());
        assert!(session.raw_response().is_none());
        assert_eq!(session.image(), Some(&replacement));
    }

    #[tokio::test]
    async fn resubmission_replaces_the_record() {
        let service = FakeService::answering("Model: Civic");
        let mut session = IdentificationSession::new(service.clone());
        session.select_image(image());

        session.submit().await.unwrap();
        session.submit().await.unwrap();

        assert_eq!(service.calls(), 2);
        assert_eq!(
            session
                .record()
                .and_then(VehicleRecord::details)
                .map(|details| details.model.as_str()),
            Some("Civic")
        );
    }

    #[tokio::test]
    async fn submission_is_rejected_while_in_flight() {
        let service = FakeService::answering("Model: Civic");
        let mut session = IdentificationSession::new(service.clone());
        session.select_image(image());
        session.state = SessionState::Submitting;

        assert_eq!(
            session.submit().await,
            Err(SessionError::SubmissionInProgress)
        );
        assert_eq!(service.calls(), 0);
        assert!(session.is_loading());
    }
}
