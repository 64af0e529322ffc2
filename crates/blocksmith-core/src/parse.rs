//! Loading layouts from analyzer JSON.
//!
//! In-memory layouts are compile-time exhaustive, so an unknown block
//! kind can only arrive through serialized input. A validation pass over
//! the raw JSON runs before decoding proper and turns the two ways a
//! document can be wrong into precise errors with index paths:
//! an unrecognized `type` ([`ParseError::UnsupportedBlockType`]) and a
//! section missing fields its type requires
//! ([`ParseError::MalformedContent`]).

use crate::errors::{IndexPath, ParseError};
use crate::layout::Layout;
use serde_json::Value;

/// Block kinds the compiler recognizes, as they appear in the `type` tag.
pub const KNOWN_KINDS: &[&str] = &[
    "heading",
    "paragraph",
    "image",
    "cover",
    "columns",
    "buttons",
    "group",
    "spacer",
    "separator",
    "list",
    "quote",
    "media-text",
];

impl Layout {
    /// Decode a layout from analyzer JSON.
    ///
    /// Layouts loaded from disk and layouts handed over in memory are
    /// identical in shape; this is just the validated decoding path.
    pub fn from_json(input: &str) -> Result<Self, ParseError> {
        let value: Value = serde_json::from_str(input)?;
        if let Some(sections) = value.get("sections").and_then(Value::as_array) {
            validate_sections(sections, &IndexPath::root())?;
        }
        Ok(serde_json::from_value(value)?)
    }
}

fn validate_sections(sections: &[Value], path: &IndexPath) -> Result<(), ParseError> {
    for (index, section) in sections.iter().enumerate() {
        validate_section(section, &path.child(index))?;
    }
    Ok(())
}

fn validate_section(section: &Value, path: &IndexPath) -> Result<(), ParseError> {
    let kind = section
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| ParseError::MalformedContent {
            kind: "unknown".to_string(),
            path: path.clone(),
            detail: "missing `type` tag".to_string(),
        })?;

    if !KNOWN_KINDS.contains(&kind) {
        return Err(ParseError::UnsupportedBlockType {
            kind: kind.to_string(),
            path: path.clone(),
        });
    }

    match kind {
        "heading" | "paragraph" | "quote" => {
            require_string(section, kind, "text", path)?;
        }
        "list" => {
            require_array(section, kind, "items", path)?;
        }
        "buttons" => {
            let buttons = require_array(section, kind, "buttons", path)?;
            if buttons.is_empty() {
                return Err(malformed(kind, path, "requires at least one button"));
            }
            for button in buttons {
                if button.get("text").and_then(Value::as_str).is_none() {
                    return Err(malformed(kind, path, "button missing `text`"));
                }
            }
        }
        "columns" => {
            let columns = require_array(section, kind, "columns", path)?;
            for (index, column) in columns.iter().enumerate() {
                if let Some(inner) = column.get("sections").and_then(Value::as_array) {
                    validate_sections(inner, &path.child(index))?;
                }
            }
        }
        "group" | "cover" => {
            if let Some(inner) = section.get("sections").and_then(Value::as_array) {
                validate_sections(inner, path)?;
            }
        }
        "media-text" => {
            if section.get("media").map(Value::is_object) != Some(true) {
                return Err(malformed(kind, path, "missing `media` descriptor"));
            }
            if let Some(inner) = section.get("sections").and_then(Value::as_array) {
                validate_sections(inner, path)?;
            }
        }
        // image, spacer, separator: every field has a default
        _ => {}
    }

    Ok(())
}

fn malformed(kind: &str, path: &IndexPath, detail: &str) -> ParseError {
    ParseError::MalformedContent {
        kind: kind.to_string(),
        path: path.clone(),
        detail: detail.to_string(),
    }
}

fn require_string<'a>(
    section: &'a Value,
    kind: &str,
    field: &str,
    path: &IndexPath,
) -> Result<&'a str, ParseError> {
    section
        .get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| malformed(kind, path, &format!("missing required field `{field}`")))
}

fn require_array<'a>(
    section: &'a Value,
    kind: &str,
    field: &str,
    path: &IndexPath,
) -> Result<&'a Vec<Value>, ParseError> {
    match section.get(field) {
        Some(Value::Array(items)) => Ok(items),
        _ => Err(malformed(kind, path, &format!("missing required field `{field}`"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Section;

    #[test]
    fn loads_a_simple_layout() {
        let layout = Layout::from_json(
            r#"{"sections":[{"type":"heading","text":"Hello","level":2}]}"#,
        )
        .unwrap();
        assert_eq!(layout.sections.len(), 1);
        assert!(matches!(layout.sections[0], Section::Heading(_)));
    }

    #[test]
    fn unknown_kind_is_unsupported_block_type() {
        let err = Layout::from_json(r#"{"sections":[{"type":"carousel"}]}"#).unwrap_err();
        match err {
            ParseError::UnsupportedBlockType { kind, path } => {
                assert_eq!(kind, "carousel");
                assert_eq!(path.to_string(), "0");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn heading_without_text_is_malformed() {
        let err = Layout::from_json(r#"{"sections":[{"type":"heading","level":2}]}"#)
            .unwrap_err();
        match err {
            ParseError::MalformedContent { kind, detail, .. } => {
                assert_eq!(kind, "heading");
                assert!(detail.contains("`text`"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn nested_error_reports_index_path() {
        let json = r#"{"sections":[
            {"type":"spacer"},
            {"type":"columns","columns":[
                {"sections":[{"type":"widget"}]}
            ]}
        ]}"#;
        let err = Layout::from_json(json).unwrap_err();
        match err {
            ParseError::UnsupportedBlockType { kind, path } => {
                assert_eq!(kind, "widget");
                assert_eq!(path.to_string(), "1/0/0");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_buttons_are_malformed() {
        let err =
            Layout::from_json(r#"{"sections":[{"type":"buttons","buttons":[]}]}"#).unwrap_err();
        assert!(matches!(err, ParseError::MalformedContent { .. }));
    }
}
