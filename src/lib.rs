#![deny(missing_docs)]

//! Identify vehicles from photos with the Google Gemini AI API.
//!
//! An [`UploadedImage`] is sent to the `generateContent` endpoint together with
//! a fixed instruction. The free-text answer is then mined for a few labeled
//! fields ("Model", "Specs", "Pricing", "Fuel Efficiency") by the [`parser`].
//! [`IdentificationSession`] ties the two steps together and keeps the state of
//! one interaction.

pub mod client;
pub mod config;
pub mod error;
pub mod identify;
pub mod image;
pub mod models;
pub mod parser;
pub mod render;
pub mod session;

pub use client::GenerativeModel;
pub use config::ClientConfig;
pub use error::{SessionError, VehicleIdError};
pub use identify::DescriptionService;
pub use image::UploadedImage;
pub use parser::{parse_response, Detail, Label, VehicleDetails, VehicleRecord};
pub use session::{IdentificationSession, SessionState};
