//! Style resolution.
//!
//! Maps the analyzer's style record onto the target grammar's dual
//! representation: preset tokens become flat attribute keys the theme
//! resolves at render time, literal values nest under the `style`
//! attribute object and additionally surface as inline CSS declarations.
//! A given semantic slot is emitted down exactly one of the two paths.
//!
//! Resolution is a pure function of its input; identical styles always
//! produce identical output, in a fixed canonical order.

use blocksmith_core::{Style, StyleValue};
use serde_json::{json, Map, Value};

/// One inline CSS declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl Declaration {
    fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

/// The target-grammar rendering of one style record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedStyle {
    /// Block comment attributes: preset keys plus the nested `style` object.
    pub attributes: Map<String, Value>,
    /// `has-*` class names the grammar pairs with the attributes.
    pub classes: Vec<String>,
    /// Inline declarations for the element's `style=` attribute, in the
    /// target system's property order.
    pub declarations: Vec<Declaration>,
}

impl ResolvedStyle {
    /// The inline `style=` value, or `None` when nothing was resolved.
    pub fn css(&self) -> Option<String> {
        if self.declarations.is_empty() {
            return None;
        }
        let parts: Vec<String> = self
            .declarations
            .iter()
            .map(|d| format!("{}:{}", d.property, d.value))
            .collect();
        Some(parts.join(";"))
    }
}

/// Resolve an optional style record into attributes, classes, and inline
/// declarations. Absent fields are omitted entirely so the target
/// system's own defaults stay in charge.
pub fn resolve(style: Option<&Style>) -> ResolvedStyle {
    let Some(style) = style else {
        return ResolvedStyle::default();
    };

    let mut out = ResolvedStyle::default();
    let mut nested = Map::new();

    resolve_colors(style, &mut out, &mut nested);
    resolve_typography(style, &mut out, &mut nested);
    resolve_spacing(style, &mut out, &mut nested);
    resolve_border(style, &mut out, &mut nested);

    if !nested.is_empty() {
        out.attributes.insert("style".to_string(), Value::Object(nested));
    }
    out
}

fn resolve_colors(style: &Style, out: &mut ResolvedStyle, nested: &mut Map<String, Value>) {
    let mut color = Map::new();

    match &style.text_color {
        Some(StyleValue::Preset(name)) => {
            out.attributes
                .insert("textColor".to_string(), json!(name));
            out.classes.push(format!("has-{name}-color"));
            out.classes.push("has-text-color".to_string());
        }
        Some(StyleValue::Literal(value)) => {
            color.insert("text".to_string(), json!(value));
            out.classes.push("has-text-color".to_string());
            out.declarations.push(Declaration::new("color", value));
        }
        None => {}
    }

    match &style.background_color {
        Some(StyleValue::Preset(name)) => {
            out.attributes
                .insert("backgroundColor".to_string(), json!(name));
            out.classes.push(format!("has-{name}-background-color"));
            out.classes.push("has-background".to_string());
        }
        Some(StyleValue::Literal(value)) => {
            color.insert("background".to_string(), json!(value));
            out.classes.push("has-background".to_string());
            out.declarations
                .push(Declaration::new("background-color", value));
        }
        None => {}
    }

    if !color.is_empty() {
        nested.insert("color".to_string(), Value::Object(color));
    }
}

fn resolve_typography(style: &Style, out: &mut ResolvedStyle, nested: &mut Map<String, Value>) {
    let mut typography = Map::new();

    match &style.font_size {
        Some(StyleValue::Preset(name)) => {
            out.attributes.insert("fontSize".to_string(), json!(name));
            out.classes.push(format!("has-{name}-font-size"));
        }
        Some(StyleValue::Literal(value)) => {
            typography.insert("fontSize".to_string(), json!(value));
            out.declarations.push(Declaration::new("font-size", value));
        }
        None => {}
    }

    if let Some(line_height) = &style.line_height {
        typography.insert("lineHeight".to_string(), json!(line_height));
        out.declarations
            .push(Declaration::new("line-height", line_height));
    }

    if !typography.is_empty() {
        nested.insert("typography".to_string(), Value::Object(typography));
    }
}

fn resolve_spacing(style: &Style, out: &mut ResolvedStyle, nested: &mut Map<String, Value>) {
    let mut spacing = Map::new();

    for (name, sides) in [("padding", &style.padding), ("margin", &style.margin)] {
        let Some(sides) = sides else { continue };
        if sides.is_empty() {
            continue;
        }
        let mut object = Map::new();
        for (side, value) in sides.iter() {
            object.insert(side.to_string(), json!(value));
            out.declarations
                .push(Declaration::new(format!("{name}-{side}"), value));
        }
        spacing.insert(name.to_string(), Value::Object(object));
    }

    if !spacing.is_empty() {
        nested.insert("spacing".to_string(), Value::Object(spacing));
    }
}

fn resolve_border(style: &Style, out: &mut ResolvedStyle, nested: &mut Map<String, Value>) {
    let Some(border) = &style.border else { return };

    let mut object = Map::new();
    if let Some(color) = &border.color {
        object.insert("color".to_string(), json!(color));
        out.declarations.push(Declaration::new("border-color", color));
        out.classes.push("has-border-color".to_string());
    }
    if let Some(width) = &border.width {
        object.insert("width".to_string(), json!(width));
        out.declarations.push(Declaration::new("border-width", width));
    }
    if let Some(radius) = &border.radius {
        object.insert("radius".to_string(), json!(radius));
        out.declarations
            .push(Declaration::new("border-radius", radius));
    }

    if !object.is_empty() {
        nested.insert("border".to_string(), Value::Object(object));
    }
}
