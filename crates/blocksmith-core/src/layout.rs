//! The layout model: an analyzer-produced description of a page.
//!
//! A [`Layout`] is an ordered sequence of [`Section`]s; order defines the
//! vertical document order and is preserved through composition. Each
//! section is one tagged block variant carrying its own content fields,
//! so the composer's dispatch is an exhaustive match and a new block kind
//! without a generator is a compile error rather than a runtime surprise.

use crate::style::{Style, StyleValue};
use serde::{Deserialize, Serialize};

/// A complete page layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Top-level sections, in document order.
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Layout {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }
}

/// One visual block. The `type` tag in analyzer JSON selects the variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Section {
    Heading(HeadingBlock),
    Paragraph(ParagraphBlock),
    Image(ImageBlock),
    Cover(CoverBlock),
    Columns(ColumnsBlock),
    Buttons(ButtonsBlock),
    Group(GroupBlock),
    Spacer(SpacerBlock),
    Separator(SeparatorBlock),
    List(ListBlock),
    Quote(QuoteBlock),
    MediaText(MediaTextBlock),
}

impl Section {
    /// The kind tag as it appears in analyzer JSON.
    pub fn kind(&self) -> &'static str {
        match self {
            Section::Heading(_) => "heading",
            Section::Paragraph(_) => "paragraph",
            Section::Image(_) => "image",
            Section::Cover(_) => "cover",
            Section::Columns(_) => "columns",
            Section::Buttons(_) => "buttons",
            Section::Group(_) => "group",
            Section::Spacer(_) => "spacer",
            Section::Separator(_) => "separator",
            Section::List(_) => "list",
            Section::Quote(_) => "quote",
            Section::MediaText(_) => "media-text",
        }
    }
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    Right,
}

impl Align {
    pub fn as_str(&self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        }
    }
}

/// Container width alignment relative to the content column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockAlign {
    Wide,
    Full,
}

impl BlockAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockAlign::Wide => "wide",
            BlockAlign::Full => "full",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingBlock {
    pub text: String,
    /// Heading level 1-6. Missing means the fixed default level 2.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphBlock {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
    #[serde(default)]
    pub drop_cap: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageBlock {
    /// Source reference. Resolution to a final URL is a pluggable
    /// composer step, so this may be a local path, an upload key, or
    /// absent entirely (a placeholder is synthesized).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverBlock {
    /// Background image reference, resolved like [`ImageBlock::src`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    /// Overlay opacity percent (0-100).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dim_ratio: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay_color: Option<StyleValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<BlockAlign>,
    #[serde(default)]
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnsBlock {
    pub columns: Vec<Column>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<BlockAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
}

/// One column: an optional explicit width plus a recursive sub-layout.
/// An empty section list is legal and renders as an empty container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Column {
    /// Explicit width such as `33.33%`. Either every column of a block
    /// has one or none does.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    pub sections: Vec<Section>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonsBlock {
    pub buttons: Vec<Button>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Button {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub style: ButtonStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<StyleValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<StyleValue>,
}

/// Button rendering style, mapped to a class-equivalent attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    #[default]
    Fill,
    Outline,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupBlock {
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<BlockAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpacerBlock {
    /// Height in pixels; missing means the fixed default of 40.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeparatorBlock {
    pub variant: SeparatorVariant,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<StyleValue>,
}

/// The closed set of horizontal-rule styles the target grammar accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeparatorVariant {
    #[default]
    Default,
    Wide,
    #[serde(alias = "dotted")]
    Dots,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBlock {
    pub items: Vec<String>,
    #[serde(default)]
    pub ordered: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteBlock {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaTextBlock {
    pub media: ImageBlock,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub media_position: MediaPosition,
    /// Media pane share of the split, in percent. Missing means 50.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_width: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaPosition {
    #[default]
    Left,
    Right,
}

impl MediaPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaPosition::Left => "left",
            MediaPosition::Right => "right",
        }
    }
}
