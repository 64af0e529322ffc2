//! Style types for layout nodes.
//!
//! Colors and font sizes come in two flavors the target grammar keeps
//! apart: named preset tokens the theme resolves at render time, and
//! literal values embedded directly. `StyleValue` models that split
//! explicitly so generators never guess.

use serde::{Deserialize, Serialize};

/// A style field value: a named preset token or a literal value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StyleValue {
    /// Named token the target theme resolves (e.g. `primary`, `large`).
    Preset(String),
    /// Literal value embedded as-is (e.g. `#1a1a2e`, `18px`).
    Literal(String),
}

impl StyleValue {
    pub fn preset(name: impl Into<String>) -> Self {
        StyleValue::Preset(name.into())
    }

    pub fn literal(value: impl Into<String>) -> Self {
        StyleValue::Literal(value.into())
    }

    /// Classify a raw analyzer string. Hex colors, `rgb(...)`/`var(...)`
    /// expressions, and anything starting with a digit (lengths like
    /// `18px`) are literals; bare names are preset tokens.
    pub fn classify(raw: &str) -> Self {
        let is_literal = raw.starts_with('#')
            || raw.starts_with("rgb")
            || raw.starts_with("var(")
            || raw.chars().next().is_some_and(|c| c.is_ascii_digit());
        if is_literal {
            StyleValue::Literal(raw.to_string())
        } else {
            StyleValue::Preset(raw.to_string())
        }
    }

    /// The underlying string, whichever flavor it is.
    pub fn as_str(&self) -> &str {
        match self {
            StyleValue::Preset(s) | StyleValue::Literal(s) => s,
        }
    }
}

impl From<String> for StyleValue {
    fn from(raw: String) -> Self {
        StyleValue::classify(&raw)
    }
}

impl From<StyleValue> for String {
    fn from(value: StyleValue) -> Self {
        match value {
            StyleValue::Preset(s) | StyleValue::Literal(s) => s,
        }
    }
}

/// Optional styling attached to a section or nested element.
///
/// Every field is optional; an absent field means "inherit the target
/// system's default" and must not be emitted at all.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<StyleValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<StyleValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<StyleValue>,
    /// Unitless or unit-carrying line height, passed through verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<BoxSides>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<BoxSides>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<Border>,
}

impl Style {
    pub fn is_empty(&self) -> bool {
        *self == Style::default()
    }
}

/// Per-side spacing values. Sides left unset are omitted from output,
/// never zero-filled.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxSides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
}

impl BoxSides {
    /// Uniform value on all four sides.
    pub fn all(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            top: Some(value.clone()),
            right: Some(value.clone()),
            bottom: Some(value.clone()),
            left: Some(value),
        }
    }

    /// Sides in the target grammar's emission order: top, right, bottom, left.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("top", &self.top),
            ("right", &self.right),
            ("bottom", &self.bottom),
            ("left", &self.left),
        ]
        .into_iter()
        .filter_map(|(side, v)| v.as_deref().map(|v| (side, v)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// Border styling; each subfield independently optional.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Border {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_hex_as_literal() {
        assert_eq!(
            StyleValue::classify("#1a1a2e"),
            StyleValue::literal("#1a1a2e")
        );
    }

    #[test]
    fn classify_length_as_literal() {
        assert_eq!(StyleValue::classify("18px"), StyleValue::literal("18px"));
        assert_eq!(StyleValue::classify("1.5rem"), StyleValue::literal("1.5rem"));
    }

    #[test]
    fn classify_name_as_preset() {
        assert_eq!(StyleValue::classify("primary"), StyleValue::preset("primary"));
        assert_eq!(StyleValue::classify("x-large"), StyleValue::preset("x-large"));
    }

    #[test]
    fn style_value_json_round_trip() {
        let v: StyleValue = serde_json::from_str("\"#ff0000\"").unwrap();
        assert_eq!(v, StyleValue::literal("#ff0000"));
        assert_eq!(serde_json::to_string(&v).unwrap(), "\"#ff0000\"");
    }

    #[test]
    fn box_sides_iter_order_and_omission() {
        let sides = BoxSides {
            top: Some("80px".into()),
            left: Some("40px".into()),
            ..Default::default()
        };
        let collected: Vec<_> = sides.iter().collect();
        assert_eq!(collected, vec![("top", "80px"), ("left", "40px")]);
    }

    #[test]
    fn empty_style_detected() {
        assert!(Style::default().is_empty());
        let styled = Style {
            text_color: Some(StyleValue::preset("primary")),
            ..Default::default()
        };
        assert!(!styled.is_empty());
    }
}
