//! Extraction of labeled vehicle details from the model's free-text answer.
//!
//! The model is asked for specs, pricing and fuel efficiency but nothing forces
//! it to answer in a fixed shape. Each label is therefore looked up on its own
//! with a `"<Label>: "` pattern and falls back to [`Detail::NotFound`] when the
//! model did not use it. A found value goes through three steps, in this order:
//!
//! 1. trim surrounding whitespace
//! 2. decode the known HTML entities ([`decode_html_entities`])
//! 3. strip Markdown emphasis ([`strip_markdown`])

mod entities;
mod markdown;

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};

pub use entities::decode_html_entities;
pub use markdown::strip_markdown;

/// Placeholder shown for a label that does not appear in the response.
pub const NOT_FOUND: &str = "Not found";

/// Message stored in a record when the service could not be reached or answered badly.
pub const FAILURE_MESSAGE: &str = "Failed to identify vehicle.";

/// The labels looked up in the model's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// `Model: `
    Model,
    /// `Specs: `
    Specs,
    /// `Pricing: `
    Pricing,
    /// `Fuel Efficiency: `
    FuelEfficiency,
}

impl Label {
    /// Every label, in display order.
    pub const ALL: [Label; 4] = [
        Label::Model,
        Label::Specs,
        Label::Pricing,
        Label::FuelEfficiency,
    ];

    /// The literal text matched in the response, without the `": "` suffix.
    pub fn as_str(self) -> &'static str {
        match self {
            Label::Model => "Model",
            Label::Specs => "Specs",
            Label::Pricing => "Pricing",
            Label::FuelEfficiency => "Fuel Efficiency",
        }
    }

    fn pattern(self) -> &'static Regex {
        static PATTERNS: Lazy<[Regex; 4]> = Lazy::new(|| {
            Label::ALL.map(|label| {
                Regex::new(&format!(r"{}: ([^\n]*)", regex::escape(label.as_str()))).unwrap()
            })
        });

        let index = match self {
            Label::Model => 0,
            Label::Specs => 1,
            Label::Pricing => 2,
            Label::FuelEfficiency => 3,
        };
        &PATTERNS[index]
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One extracted value, or the marker that the label was absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detail {
    /// The cleaned text following the label.
    Found(String),
    /// The label did not appear in the response.
    NotFound,
}

impl Detail {
    /// Returns the extracted text, if any.
    pub fn value(&self) -> Option<&str> {
        match self {
            Detail::Found(value) => Some(value),
            Detail::NotFound => None,
        }
    }

    /// The text to display: the value, or `"Not found"`.
    pub fn as_str(&self) -> &str {
        self.value().unwrap_or(NOT_FOUND)
    }
}

impl From<Option<String>> for Detail {
    // A model that literally answers "Not found" is indistinguishable from a miss.
    fn from(value: Option<String>) -> Self {
        match value {
            Some(value) if value != NOT_FOUND => Detail::Found(value),
            _ => Detail::NotFound,
        }
    }
}

impl fmt::Display for Detail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Detail {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// The four details extracted from one response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDetails {
    /// Make and model of the vehicle
    pub model: Detail,
    /// Technical specifications
    pub specs: Detail,
    /// Price information
    pub pricing: Detail,
    /// Fuel consumption information
    pub fuel_efficiency: Detail,
}

impl VehicleDetails {
    /// Returns the detail stored for `label`.
    pub fn get(&self, label: Label) -> &Detail {
        match label {
            Label::Model => &self.model,
            Label::Specs => &self.specs,
            Label::Pricing => &self.pricing,
            Label::FuelEfficiency => &self.fuel_efficiency,
        }
    }
}

/// The structured result of one identification attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum VehicleRecord {
    /// The service answered and its text was parsed.
    Details(VehicleDetails),
    /// The service could not be reached or its answer was unusable.
    Error {
        /// Message shown to the user
        #[serde(rename = "error")]
        message: String,
    },
}

impl VehicleRecord {
    /// The record stored for any transport or service failure.
    pub fn failure() -> Self {
        VehicleRecord::Error {
            message: FAILURE_MESSAGE.to_string(),
        }
    }

    /// The parsed details, unless this is an error record.
    pub fn details(&self) -> Option<&VehicleDetails> {
        match self {
            VehicleRecord::Details(details) => Some(details),
            VehicleRecord::Error { .. } => None,
        }
    }

    /// The error message, if this is an error record.
    pub fn error(&self) -> Option<&str> {
        match self {
            VehicleRecord::Details(_) => None,
            VehicleRecord::Error { message } => Some(message),
        }
    }
}

/// Extracts and cleans the value following `"<label>: "` in `text`.
///
/// Only the first occurrence is used and the value ends at the next newline.
pub fn extract_detail(text: &str, label: Label) -> Detail {
    label
        .pattern()
        .captures(text)
        .map(|caps| {
            let decoded = decode_html_entities(caps[1].trim());
            strip_markdown(&decoded).into_owned()
        })
        .into()
}

/// Parses a raw model answer into a [`VehicleRecord`].
pub fn parse_response(text: &str) -> VehicleRecord {
    VehicleRecord::Details(VehicleDetails {
        model: extract_detail(text, Label::Model),
        specs: extract_detail(text, Label::Specs),
        pricing: extract_detail(text, Label::Pricing),
        fuel_efficiency: extract_detail(text, Label::FuelEfficiency),
    })
}
