//! Selection of what to show for a record.

use crate::parser::{Label, VehicleRecord};

/// A titled block of text to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panel<'a> {
    /// Heading of the panel
    pub title: &'a str,
    /// Text shown in the panel
    pub body: &'a str,
}

/// One panel per detail that was found, in label order.
///
/// Error records and missing details produce no panels.
pub fn detail_panels(record: &VehicleRecord) -> Vec<Panel<'_>> {
    let Some(details) = record.details() else {
        return Vec::new();
    };

    Label::ALL
        .iter()
        .filter_map(|&label| {
            details.get(label).value().map(|body| Panel {
                title: label.as_str(),
                body,
            })
        })
        .collect()
}
