//! Gutenberg block markup generation.
//!
//! Each supported block kind has one generator that emits a
//! self-delimited fragment: a `<!-- wp:NAME {attrs} -->` open marker, the
//! HTML body, and the matching close marker. Fragments can be
//! concatenated by the composer with plain newline joining, no other
//! separator logic.
//!
//! The attribute payload between the markers is compact JSON and is
//! always present; an empty attribute set is emitted as `{}` so the
//! payload stays parseable in every fragment.

pub mod blocks;
pub mod style;

pub use style::{resolve, Declaration, ResolvedStyle};

use std::borrow::Cow;

/// Escape body text for the output grammar.
pub fn escape_text(text: &str) -> Cow<'_, str> {
    html_escape::encode_text(text)
}

/// Escape a value placed inside a double-quoted HTML attribute.
pub fn escape_attr(value: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn escape_text_covers_markup_characters() {
        assert_eq!(escape_text("a < b & c > d"), "a &lt; b &amp; c &gt; d");
    }

    #[test]
    fn escape_attr_covers_quotes() {
        assert_eq!(escape_attr(r#"say "hi""#), "say &quot;hi&quot;");
    }

    proptest! {
        // Escaping is total: unescaping the escaped form reproduces the
        // input exactly, for any string.
        #[test]
        fn escape_text_round_trips(input in "\\PC*") {
            let escaped = escape_text(&input);
            let decoded = html_escape::decode_html_entities(escaped.as_ref());
            prop_assert_eq!(decoded.as_ref(), input.as_str());
        }
    }
}
