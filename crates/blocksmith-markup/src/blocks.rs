//! Per-block fragment generators.
//!
//! Generators are pure string builders: the composer resolves image
//! references, computes column widths, generates container identifiers,
//! and composes inner markup before calling in. Every generator returns
//! a fragment whose open and close markers balance, so fragments
//! concatenate with newline joining alone.

use crate::style::resolve;
use crate::{escape_attr, escape_text};
use blocksmith_core::{
    Button, ButtonStyle, ButtonsBlock, Column, ColumnsBlock, CoverBlock, GroupBlock,
    HeadingBlock, ImageBlock, ListBlock, MediaTextBlock, MediaPosition, ParagraphBlock,
    SeparatorBlock, SeparatorVariant, SpacerBlock, QuoteBlock, Style, StyleValue,
};
use serde_json::{json, Map, Value};

/// Default heading level when the layout does not specify one.
pub const DEFAULT_HEADING_LEVEL: u8 = 2;

/// Default spacer height in pixels.
pub const DEFAULT_SPACER_HEIGHT: u32 = 40;

/// Default media pane share for media-text splits, in percent.
pub const DEFAULT_MEDIA_WIDTH: u8 = 50;

/// Default cover overlay opacity, in percent.
pub const DEFAULT_DIM_RATIO: u8 = 50;

/// Wrap a body in the open/close comment markers for `name`.
///
/// The attribute payload is compact JSON and always present; an empty
/// set serializes as `{}`.
fn fragment(name: &str, attrs: &Map<String, Value>, body: &str) -> String {
    let payload = encode_payload(&Value::Object(attrs.clone()).to_string());
    format!("<!-- wp:{name} {payload} -->\n{body}\n<!-- /wp:{name} -->")
}

/// Escape characters that would terminate the enclosing comment marker
/// or leak markup out of the payload. The replacements are JSON string
/// escapes, so the payload stays valid JSON and decodes to the original
/// attribute values.
fn encode_payload(json: &str) -> String {
    json.replace("--", "\\u002d\\u002d")
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
        .replace("\\\"", "\\u0022")
}

fn class_attr(classes: &[String]) -> String {
    if classes.is_empty() {
        String::new()
    } else {
        format!(" class=\"{}\"", classes.join(" "))
    }
}

fn style_attr(css: Option<String>) -> String {
    match css {
        Some(css) => format!(" style=\"{css}\""),
        None => String::new(),
    }
}

pub fn heading(block: &HeadingBlock) -> String {
    let level = block.level.unwrap_or(DEFAULT_HEADING_LEVEL);
    let resolved = resolve(block.style.as_ref());

    let mut attrs = Map::new();
    attrs.insert("level".to_string(), json!(level));
    if let Some(align) = block.align {
        attrs.insert("textAlign".to_string(), json!(align.as_str()));
    }
    attrs.extend(resolved.attributes.clone());

    let mut classes = vec!["wp-block-heading".to_string()];
    if let Some(align) = block.align {
        classes.push(format!("has-text-align-{}", align.as_str()));
    }
    classes.extend(resolved.classes.clone());

    let body = format!(
        "<h{level}{}{}>{}</h{level}>",
        class_attr(&classes),
        style_attr(resolved.css()),
        escape_text(&block.text),
    );
    fragment("heading", &attrs, &body)
}

pub fn paragraph(block: &ParagraphBlock) -> String {
    let resolved = resolve(block.style.as_ref());

    let mut attrs = Map::new();
    if let Some(align) = block.align {
        attrs.insert("align".to_string(), json!(align.as_str()));
    }
    if block.drop_cap {
        attrs.insert("dropCap".to_string(), json!(true));
    }
    attrs.extend(resolved.attributes.clone());

    let mut classes = Vec::new();
    if let Some(align) = block.align {
        classes.push(format!("has-text-align-{}", align.as_str()));
    }
    if block.drop_cap {
        classes.push("has-drop-cap".to_string());
    }
    classes.extend(resolved.classes.clone());

    let body = format!(
        "<p{}{}>{}</p>",
        class_attr(&classes),
        style_attr(resolved.css()),
        escape_text(&block.text),
    );
    fragment("paragraph", &attrs, &body)
}

/// `src` is the already-resolved image URL.
pub fn image(block: &ImageBlock, src: &str) -> String {
    let mut attrs = Map::new();
    attrs.insert("sizeSlug".to_string(), json!("large"));
    if block.link.is_some() {
        attrs.insert("linkDestination".to_string(), json!("custom"));
    }
    if let Some(width) = block.width {
        attrs.insert("width".to_string(), json!(format!("{width}px")));
    }
    if let Some(height) = block.height {
        attrs.insert("height".to_string(), json!(format!("{height}px")));
    }

    let alt = block.alt.as_deref().unwrap_or("");
    let mut img = format!("<img src=\"{}\" alt=\"{}\"", escape_attr(src), escape_attr(alt));
    if let Some(width) = block.width {
        img.push_str(&format!(" width=\"{width}\""));
    }
    if let Some(height) = block.height {
        img.push_str(&format!(" height=\"{height}\""));
    }
    img.push_str("/>");

    if let Some(link) = &block.link {
        img = format!("<a href=\"{}\">{img}</a>", escape_attr(link));
    }

    let caption = match &block.caption {
        Some(caption) => format!(
            "<figcaption class=\"wp-element-caption\">{}</figcaption>",
            escape_text(caption)
        ),
        None => String::new(),
    };

    let body = format!("<figure class=\"wp-block-image size-large\">{img}{caption}</figure>");
    fragment("image", &attrs, &body)
}

/// `src` is the resolved background URL, `id` the container identifier,
/// `inner` the pre-composed inner markup.
pub fn cover(block: &CoverBlock, src: &str, id: &str, inner: &str) -> String {
    // Opacity is a percentage; out-of-range input saturates.
    let dim_ratio = block.dim_ratio.unwrap_or(DEFAULT_DIM_RATIO).min(100);

    let mut attrs = Map::new();
    attrs.insert("uniqueId".to_string(), json!(id));
    attrs.insert("url".to_string(), json!(src));
    attrs.insert("dimRatio".to_string(), json!(dim_ratio));
    if let Some(min_height) = block.min_height {
        attrs.insert("minHeight".to_string(), json!(min_height));
    }
    if let Some(StyleValue::Preset(name)) = &block.overlay_color {
        attrs.insert("overlayColor".to_string(), json!(name));
    }
    if let Some(align) = block.align {
        attrs.insert("align".to_string(), json!(align.as_str()));
    }

    let mut classes = vec!["wp-block-cover".to_string()];
    if let Some(align) = block.align {
        classes.push(format!("align{}", align.as_str()));
    }

    // Scrim: opacity becomes the dim class (rounded to the grammar's
    // accepted steps of 10), the overlay color its background.
    let dim_step = (u32::from(dim_ratio) + 5) / 10 * 10;
    let mut scrim_classes = vec!["wp-block-cover__background".to_string()];
    let mut scrim_style = String::new();
    match &block.overlay_color {
        Some(StyleValue::Preset(name)) => {
            scrim_classes.push(format!("has-{name}-background-color"));
        }
        Some(StyleValue::Literal(value)) => {
            scrim_style = format!(" style=\"background-color:{value}\"");
        }
        None => {}
    }
    scrim_classes.push(format!("has-background-dim-{dim_step}"));
    scrim_classes.push("has-background-dim".to_string());

    let min_height_style = match block.min_height {
        Some(h) => format!(" style=\"min-height:{h}px\""),
        None => String::new(),
    };

    let body = format!(
        "<div{}{min_height_style}>\
         <img class=\"wp-block-cover__image-background\" alt=\"\" src=\"{}\" data-object-fit=\"cover\"/>\
         <span aria-hidden=\"true\"{}{scrim_style}></span>\
         <div class=\"wp-block-cover__inner-container\">\n{inner}\n</div></div>",
        class_attr(&classes),
        escape_attr(src),
        class_attr(&scrim_classes),
    );
    fragment("cover", &attrs, &body)
}

pub fn columns(block: &ColumnsBlock, id: &str, inner: &str) -> String {
    let resolved = resolve(block.style.as_ref());

    let mut attrs = Map::new();
    attrs.insert("uniqueId".to_string(), json!(id));
    if let Some(align) = block.align {
        attrs.insert("align".to_string(), json!(align.as_str()));
    }
    attrs.extend(resolved.attributes.clone());

    let mut classes = vec!["wp-block-columns".to_string()];
    if let Some(align) = block.align {
        classes.push(format!("align{}", align.as_str()));
    }
    classes.extend(resolved.classes.clone());

    let body = format!(
        "<div{}{}>\n{inner}\n</div>",
        class_attr(&classes),
        style_attr(resolved.css()),
    );
    fragment("columns", &attrs, &body)
}

/// `width` is the computed percentage share (e.g. `50%`).
pub fn column(col: &Column, width: &str, inner: &str) -> String {
    let resolved = resolve(col.style.as_ref());

    let mut attrs = Map::new();
    attrs.insert("width".to_string(), json!(width));
    attrs.extend(resolved.attributes.clone());

    let mut classes = vec!["wp-block-column".to_string()];
    classes.extend(resolved.classes.clone());

    let css = match resolved.css() {
        Some(rest) => format!("flex-basis:{width};{rest}"),
        None => format!("flex-basis:{width}"),
    };

    let body = format!(
        "<div{} style=\"{css}\">\n{inner}\n</div>",
        class_attr(&classes),
    );
    fragment("column", &attrs, &body)
}

pub fn buttons(block: &ButtonsBlock, inner: &str) -> String {
    let mut attrs = Map::new();
    if let Some(align) = block.align {
        attrs.insert(
            "layout".to_string(),
            json!({"type": "flex", "justifyContent": align.as_str()}),
        );
    }

    let body = format!("<div class=\"wp-block-buttons\">\n{inner}\n</div>");
    fragment("buttons", &attrs, &body)
}

pub fn button(button: &Button) -> String {
    // Button colors ride the same preset/literal split as every other
    // color slot.
    let color_style = Style {
        background_color: button.background.clone(),
        text_color: button.text_color.clone(),
        ..Default::default()
    };
    let resolved = resolve(Some(&color_style));

    let mut attrs = Map::new();
    if button.style == ButtonStyle::Outline {
        attrs.insert("className".to_string(), json!("is-style-outline"));
    }
    attrs.extend(resolved.attributes.clone());

    let mut outer_classes = vec!["wp-block-button".to_string()];
    if button.style == ButtonStyle::Outline {
        outer_classes.push("is-style-outline".to_string());
    }

    let mut link_classes = vec!["wp-block-button__link".to_string()];
    link_classes.extend(resolved.classes.clone());
    link_classes.push("wp-element-button".to_string());

    let href = match &button.url {
        Some(url) => format!(" href=\"{}\"", escape_attr(url)),
        None => String::new(),
    };

    let body = format!(
        "<div{}><a{}{href}{}>{}</a></div>",
        class_attr(&outer_classes),
        class_attr(&link_classes),
        style_attr(resolved.css()),
        escape_text(&button.text),
    );
    fragment("button", &attrs, &body)
}

pub fn group(block: &GroupBlock, id: &str, inner: &str) -> String {
    let resolved = resolve(block.style.as_ref());

    let mut attrs = Map::new();
    attrs.insert("uniqueId".to_string(), json!(id));
    attrs.insert("layout".to_string(), json!({"type": "constrained"}));
    if let Some(align) = block.align {
        attrs.insert("align".to_string(), json!(align.as_str()));
    }
    attrs.extend(resolved.attributes.clone());

    let mut classes = vec!["wp-block-group".to_string()];
    if let Some(align) = block.align {
        classes.push(format!("align{}", align.as_str()));
    }
    classes.extend(resolved.classes.clone());

    let body = format!(
        "<div{}{}>\n{inner}\n</div>",
        class_attr(&classes),
        style_attr(resolved.css()),
    );
    fragment("group", &attrs, &body)
}

pub fn spacer(block: &SpacerBlock) -> String {
    let height = block.height.unwrap_or(DEFAULT_SPACER_HEIGHT);
    let mut attrs = Map::new();
    attrs.insert("height".to_string(), json!(format!("{height}px")));

    let body = format!(
        "<div style=\"height:{height}px\" aria-hidden=\"true\" class=\"wp-block-spacer\"></div>"
    );
    fragment("spacer", &attrs, &body)
}

pub fn separator(block: &SeparatorBlock) -> String {
    let mut attrs = Map::new();
    let mut classes = vec![
        "wp-block-separator".to_string(),
        "has-alpha-channel-opacity".to_string(),
    ];

    match block.variant {
        SeparatorVariant::Default => {}
        SeparatorVariant::Wide => {
            attrs.insert("className".to_string(), json!("is-style-wide"));
            classes.push("is-style-wide".to_string());
        }
        SeparatorVariant::Dots => {
            attrs.insert("className".to_string(), json!("is-style-dots"));
            classes.push("is-style-dots".to_string());
        }
    }

    let mut inline = None;
    match &block.color {
        Some(StyleValue::Preset(name)) => {
            attrs.insert("backgroundColor".to_string(), json!(name));
            classes.push(format!("has-{name}-background-color"));
            classes.push("has-background".to_string());
        }
        Some(StyleValue::Literal(value)) => {
            inline = Some(format!("background-color:{value}"));
        }
        None => {}
    }

    let body = format!("<hr{}{}/>", class_attr(&classes), style_attr(inline));
    fragment("separator", &attrs, &body)
}

pub fn list(block: &ListBlock) -> String {
    let mut attrs = Map::new();
    if block.ordered {
        attrs.insert("ordered".to_string(), json!(true));
    }

    let tag = if block.ordered { "ol" } else { "ul" };
    let items: Vec<String> = block
        .items
        .iter()
        .map(|item| {
            format!(
                "<!-- wp:list-item -->\n<li>{}</li>\n<!-- /wp:list-item -->",
                escape_text(item)
            )
        })
        .collect();

    let body = format!("<{tag}>\n{}\n</{tag}>", items.join("\n"));
    fragment("list", &attrs, &body)
}

pub fn quote(block: &QuoteBlock) -> String {
    let mut attrs = Map::new();
    if let Some(align) = block.align {
        attrs.insert("align".to_string(), json!(align.as_str()));
    }

    let citation = match &block.citation {
        Some(citation) => format!("\n<cite>{}</cite>", escape_text(citation)),
        None => String::new(),
    };

    let body = format!(
        "<blockquote class=\"wp-block-quote\">\n<p>{}</p>{citation}\n</blockquote>",
        escape_text(&block.text),
    );
    fragment("quote", &attrs, &body)
}

/// `media_src` is the resolved media URL.
pub fn media_text(block: &MediaTextBlock, media_src: &str, id: &str, inner: &str) -> String {
    let media_width = block.media_width.unwrap_or(DEFAULT_MEDIA_WIDTH).min(100);

    let mut attrs = Map::new();
    attrs.insert("uniqueId".to_string(), json!(id));
    attrs.insert("mediaType".to_string(), json!("image"));
    attrs.insert(
        "mediaPosition".to_string(),
        json!(block.media_position.as_str()),
    );
    attrs.insert("mediaUrl".to_string(), json!(media_src));
    attrs.insert("mediaWidth".to_string(), json!(media_width));

    let mut classes = vec!["wp-block-media-text".to_string()];
    if block.media_position == MediaPosition::Right {
        classes.push("has-media-on-the-right".to_string());
    }

    let grid = match block.media_position {
        MediaPosition::Left => format!("{media_width}% auto"),
        MediaPosition::Right => format!("auto {media_width}%"),
    };

    let alt = block.media.alt.as_deref().unwrap_or("");
    let body = format!(
        "<div{} style=\"grid-template-columns:{grid}\">\
         <figure class=\"wp-block-media-text__media\"><img src=\"{}\" alt=\"{}\"/></figure>\
         <div class=\"wp-block-media-text__content\">\n{inner}\n</div></div>",
        class_attr(&classes),
        escape_attr(media_src),
        escape_attr(alt),
    );
    fragment("media-text", &attrs, &body)
}
