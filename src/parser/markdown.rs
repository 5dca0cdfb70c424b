//! Removal of Markdown emphasis markers from extracted values.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// Alternatives are tried left to right at each position, so `**` wins over `*`.
static RE_EMPHASIS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*|__(.*?)__|\*(.*?)\*|_(.*?)_").unwrap());

/// Replaces each `**text**`, `__text__`, `*text*` or `_text_` span with its inner text.
///
/// Matching is lazy and non-overlapping, and runs once: nested emphasis keeps
/// its inner markers.
pub fn strip_markdown(text: &str) -> Cow<'_, str> {
    RE_EMPHASIS.replace_all(text, |caps: &Captures| {
        caps.iter()
            .skip(1)
            .flatten()
            .next()
            .map(|inner| inner.as_str().to_string())
            .unwrap_or_default()
    })
}
