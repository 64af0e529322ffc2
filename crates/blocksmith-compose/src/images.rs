//! Pluggable image-reference resolution.
//!
//! Layouts reference images loosely: a URL, an upload key, or nothing at
//! all. The publisher substitutes stable media URLs after uploading, so
//! resolution is a composer seam rather than a hardcoded path: inject an
//! [`ImageResolver`] and every `image`, `cover`, and `media-text` source
//! goes through it.

use std::collections::HashMap;

/// An image reference with fallback dimensions from its context.
#[derive(Debug, Clone, Copy)]
pub struct ImageRef<'a> {
    pub src: Option<&'a str>,
    pub alt: Option<&'a str>,
    pub width: u32,
    pub height: u32,
}

/// Resolves layout image references to final URLs.
pub trait ImageResolver {
    fn resolve(&self, image: &ImageRef<'_>) -> String;
}

/// Default resolver: pass URLs through, synthesize an inline SVG
/// placeholder when a reference has no source at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderImages;

impl ImageResolver for PlaceholderImages {
    fn resolve(&self, image: &ImageRef<'_>) -> String {
        match image.src {
            Some(src) => src.to_string(),
            None => placeholder_svg(image.alt.unwrap_or("Image"), image.width, image.height),
        }
    }
}

/// Substitutes uploaded-media URLs keyed by the layout's source
/// reference; anything unmapped falls back to [`PlaceholderImages`]
/// behavior.
#[derive(Debug, Clone, Default)]
pub struct UploadedImages {
    urls: HashMap<String, String>,
}

impl UploadedImages {
    pub fn new(urls: HashMap<String, String>) -> Self {
        Self { urls }
    }

    pub fn insert(&mut self, reference: impl Into<String>, url: impl Into<String>) {
        self.urls.insert(reference.into(), url.into());
    }
}

impl ImageResolver for UploadedImages {
    fn resolve(&self, image: &ImageRef<'_>) -> String {
        if let Some(url) = image.src.and_then(|src| self.urls.get(src)) {
            return url.clone();
        }
        PlaceholderImages.resolve(image)
    }
}

/// A data-URI SVG placeholder with the description as centered caption.
pub fn placeholder_svg(description: &str, width: u32, height: u32) -> String {
    let caption: String = description
        .chars()
        .filter(|c| !matches!(c, '\'' | '"' | '<' | '>' | '#' | '%'))
        .take(60)
        .collect();
    let caption = caption.replace('&', "and");
    format!(
        "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' \
         width='{width}' height='{height}'%3E%3Crect fill='%23ccc' width='{width}' \
         height='{height}'/%3E%3Ctext x='50%25' y='50%25' text-anchor='middle' \
         fill='%23666' font-size='20'%3E{caption}%3C/text%3E%3C/svg%3E"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passthrough_keeps_urls() {
        let image = ImageRef {
            src: Some("https://cdn.example.com/a.jpg"),
            alt: None,
            width: 800,
            height: 400,
        };
        assert_eq!(
            PlaceholderImages.resolve(&image),
            "https://cdn.example.com/a.jpg"
        );
    }

    #[test]
    fn missing_src_becomes_placeholder() {
        let image = ImageRef {
            src: None,
            alt: Some("Team photo"),
            width: 600,
            height: 400,
        };
        let url = PlaceholderImages.resolve(&image);
        assert!(url.starts_with("data:image/svg+xml,"));
        assert!(url.contains("Team photo"));
        assert!(url.contains("width='600'"));
    }

    #[test]
    fn placeholder_strips_markup_characters() {
        let url = placeholder_svg("Fish & chips <grill>", 100, 100);
        assert!(url.contains("Fish and chips grill"));
        assert!(!url.contains('<'));
        assert!(!url.contains('"'));
    }

    #[test]
    fn uploaded_map_substitutes_known_references() {
        let mut resolver = UploadedImages::default();
        resolver.insert("hero.png", "https://site.example/wp-content/uploads/hero.png");
        let known = ImageRef {
            src: Some("hero.png"),
            alt: None,
            width: 800,
            height: 400,
        };
        assert_eq!(
            resolver.resolve(&known),
            "https://site.example/wp-content/uploads/hero.png"
        );
        let unknown = ImageRef {
            src: Some("other.png"),
            alt: None,
            width: 800,
            height: 400,
        };
        assert_eq!(resolver.resolve(&unknown), "other.png");
    }
}
