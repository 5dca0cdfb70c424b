//! Decoding of the small set of HTML entities the model tends to emit.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static RE_ENTITY: Lazy<Regex> = Lazy::new(|| Regex::new(r"&([^;]+);").unwrap());

/// Maps an entity name (the part between `&` and `;`) to its replacement.
fn lookup(name: &str) -> Option<&'static str> {
    let decoded = match name {
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        "apos" | "#039" | "#x27" => "'",
        "#x2F" => "/",
        "#x3D" => "=",
        "#x5B" => "[",
        "#x5D" => "]",
        _ => return None,
    };
    Some(decoded)
}

/// Decodes known HTML entities in a single pass.
///
/// Entity names are case-sensitive. Anything between `&` and the next `;`
/// that is not a known name is kept verbatim, `&` and `;` included.
pub fn decode_html_entities(text: &str) -> Cow<'_, str> {
    RE_ENTITY.replace_all(text, |caps: &Captures| match lookup(&caps[1]) {
        Some(decoded) => decoded.to_string(),
        None => caps[0].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_every_known_entity() {
        assert_eq!(
            decode_html_entities(
                "&amp; &lt; &gt; &quot; &apos; &#039; &#x27; &#x2F; &#x3D; &#x5B; &#x5D;"
            ),
            "& < > \" ' ' ' / = [ ]"
        );
    }

    #[test]
    fn unknown_entities_pass_through() {
        assert_eq!(decode_html_entities("$20k &copy; 2024"), "$20k &copy; 2024");
        assert_eq!(decode_html_entities("&#39;&#x2f;&AMP;"), "&#39;&#x2f;&AMP;");
    }

    #[test]
    fn decodes_a_single_level_only() {
        assert_eq!(decode_html_entities("&amp;lt;"), "&lt;");
    }

    #[test]
    fn text_without_entities_is_borrowed_unchanged() {
        let text = "2.5L hybrid, 200 hp & more";
        let decoded = decode_html_entities(text);
        assert!(matches!(decoded, Cow::Borrowed(_)));
        assert_eq!(decoded, text);
    }

    #[test]
    fn decoding_decoded_text_is_a_no_op() {
        let once = decode_html_entities("Tom &amp; Jerry &#x5B;1&#x5D;").into_owned();
        assert_eq!(once, "Tom & Jerry [1]");
        assert_eq!(decode_html_entities(&once), once);
    }

    #[test]
    fn stray_ampersand_swallows_up_to_next_semicolon() {
        assert_eq!(decode_html_entities("A & B; C &amp; D"), "A & B; C & D");
    }
}
