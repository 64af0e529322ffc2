//! Document composition.
//!
//! Walks a [`Layout`] in section order, dispatches each block to its
//! generator through one exhaustive match, and joins the fragments into
//! the final markup document. The walk owns everything that needs
//! context the generators don't have: column width shares, recursion
//! depth, container identifiers, and image-reference resolution.
//!
//! Failures abort the whole composition; a partial block document is
//! worse than none, so no partial output ever escapes.

mod images;
mod widths;

pub use images::{placeholder_svg, ImageRef, ImageResolver, PlaceholderImages, UploadedImages};

use blocksmith_core::{
    ComposeError, CoverBlock, IdSource, ImageBlock, IndexPath, Layout, MediaTextBlock,
    RandomIds, Section,
};
use blocksmith_markup::blocks;
use widths::column_widths;

/// Default cap on column nesting. Untrusted analyzer output should not
/// be able to exhaust the stack.
pub const DEFAULT_MAX_DEPTH: usize = 16;

/// Composes layouts into markup documents.
///
/// Each call to [`compose`](Composer::compose) is independent; the only
/// state consumed is the identifier source's randomness.
pub struct Composer {
    ids: Box<dyn IdSource>,
    images: Box<dyn ImageResolver>,
    max_depth: usize,
}

impl Default for Composer {
    fn default() -> Self {
        Self::new()
    }
}

impl Composer {
    pub fn new() -> Self {
        Self {
            ids: Box::new(RandomIds),
            images: Box::new(PlaceholderImages),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Substitute the identifier source (tests use sequential ids).
    pub fn with_ids(mut self, ids: impl IdSource + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    /// Substitute the image-reference resolver.
    pub fn with_images(mut self, images: impl ImageResolver + 'static) -> Self {
        self.images = Box::new(images);
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Compose the full markup document for a layout.
    pub fn compose(&mut self, layout: &Layout) -> Result<String, ComposeError> {
        self.compose_sections(&layout.sections, &IndexPath::root(), 0)
    }

    fn compose_sections(
        &mut self,
        sections: &[Section],
        path: &IndexPath,
        depth: usize,
    ) -> Result<String, ComposeError> {
        if depth > self.max_depth {
            return Err(ComposeError::MaxDepthExceeded {
                limit: self.max_depth,
            });
        }
        let fragments: Vec<String> = sections
            .iter()
            .enumerate()
            .map(|(index, section)| self.compose_section(section, &path.child(index), depth))
            .collect::<Result<_, _>>()?;
        Ok(fragments.join("\n"))
    }

    fn compose_section(
        &mut self,
        section: &Section,
        path: &IndexPath,
        depth: usize,
    ) -> Result<String, ComposeError> {
        match section {
            Section::Heading(block) => {
                if let Some(level) = block.level {
                    if !(1..=6).contains(&level) {
                        return Err(malformed(
                            section,
                            path,
                            format!("heading level {level} is outside 1-6"),
                        ));
                    }
                }
                Ok(blocks::heading(block))
            }
            Section::Paragraph(block) => Ok(blocks::paragraph(block)),
            Section::Image(block) => {
                let src = self.images.resolve(&image_ref(block, 800, 400));
                Ok(blocks::image(block, &src))
            }
            Section::Cover(block) => {
                let inner = self.compose_sections(&block.sections, path, depth + 1)?;
                let src = self.images.resolve(&cover_ref(block));
                let id = self.ids.next_id();
                Ok(blocks::cover(block, &src, &id, &inner))
            }
            Section::Columns(block) => {
                let shares = column_widths(&block.columns, path)?;
                let mut rendered = Vec::with_capacity(block.columns.len());
                for (index, (col, width)) in block.columns.iter().zip(&shares).enumerate() {
                    let inner = self.compose_sections(&col.sections, &path.child(index), depth + 1)?;
                    rendered.push(blocks::column(col, width, &inner));
                }
                let id = self.ids.next_id();
                Ok(blocks::columns(block, &id, &rendered.join("\n")))
            }
            Section::Buttons(block) => {
                if block.buttons.is_empty() {
                    return Err(malformed(section, path, "requires at least one button".into()));
                }
                let inner: Vec<String> = block.buttons.iter().map(blocks::button).collect();
                Ok(blocks::buttons(block, &inner.join("\n")))
            }
            Section::Group(block) => {
                let inner = self.compose_sections(&block.sections, path, depth + 1)?;
                let id = self.ids.next_id();
                Ok(blocks::group(block, &id, &inner))
            }
            Section::Spacer(block) => Ok(blocks::spacer(block)),
            Section::Separator(block) => Ok(blocks::separator(block)),
            Section::List(block) => Ok(blocks::list(block)),
            Section::Quote(block) => Ok(blocks::quote(block)),
            Section::MediaText(block) => {
                let inner = self.compose_sections(&block.sections, path, depth + 1)?;
                let src = self.images.resolve(&media_ref(block));
                let id = self.ids.next_id();
                Ok(blocks::media_text(block, &src, &id, &inner))
            }
        }
    }
}

fn malformed(section: &Section, path: &IndexPath, detail: String) -> ComposeError {
    ComposeError::MalformedContent {
        kind: section.kind().to_string(),
        path: path.clone(),
        detail,
    }
}

fn image_ref(block: &ImageBlock, fallback_w: u32, fallback_h: u32) -> ImageRef<'_> {
    ImageRef {
        src: block.src.as_deref(),
        alt: block.alt.as_deref(),
        width: block.width.unwrap_or(fallback_w),
        height: block.height.unwrap_or(fallback_h),
    }
}

fn cover_ref(block: &CoverBlock) -> ImageRef<'_> {
    ImageRef {
        src: block.src.as_deref(),
        alt: None,
        width: 1920,
        height: 800,
    }
}

fn media_ref(block: &MediaTextBlock) -> ImageRef<'_> {
    image_ref(&block.media, 600, 400)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blocksmith_core::{
        Button, ButtonStyle, ButtonsBlock, Column, ColumnsBlock, HeadingBlock, ParagraphBlock,
        SequentialIds,
    };

    fn deterministic() -> Composer {
        Composer::new().with_ids(SequentialIds::default())
    }

    fn paragraph(text: &str) -> Section {
        Section::Paragraph(ParagraphBlock {
            text: text.into(),
            align: None,
            drop_cap: false,
            style: None,
        })
    }

    /// Remove `uniqueId` attribute values so outputs from different
    /// identifier sources can be compared.
    fn strip_ids(markup: &str) -> String {
        let mut out = String::with_capacity(markup.len());
        let mut rest = markup;
        let needle = "\"uniqueId\":\"";
        while let Some(at) = rest.find(needle) {
            let end = at + needle.len();
            out.push_str(&rest[..end]);
            rest = &rest[end..];
            let close = rest.find('"').unwrap();
            rest = &rest[close..];
        }
        out.push_str(rest);
        out
    }

    #[test]
    fn heading_scenario() {
        let layout = Layout::new(vec![Section::Heading(HeadingBlock {
            text: "Hello & Welcome".into(),
            level: Some(2),
            align: None,
            style: None,
        })]);
        let markup = deterministic().compose(&layout).unwrap();
        assert_eq!(
            markup,
            "<!-- wp:heading {\"level\":2} -->\n\
             <h2 class=\"wp-block-heading\">Hello &amp; Welcome</h2>\n\
             <!-- /wp:heading -->"
        );
    }

    #[test]
    fn two_column_scenario() {
        let layout = Layout::new(vec![Section::Columns(ColumnsBlock {
            columns: vec![
                Column {
                    sections: vec![paragraph("left")],
                    ..Default::default()
                },
                Column {
                    sections: vec![paragraph("right")],
                    ..Default::default()
                },
            ],
            align: None,
            style: None,
        })]);
        let markup = deterministic().compose(&layout).unwrap();
        assert_eq!(markup.matches("<!-- wp:column ").count(), 2);
        assert_eq!(markup.matches("\"width\":\"50%\"").count(), 2);
        assert_eq!(markup.matches("<!-- wp:paragraph").count(), 2);
        assert!(markup.contains("flex-basis:50%"));
    }

    #[test]
    fn buttons_scenario_preserves_order_and_styles() {
        let layout = Layout::new(vec![Section::Buttons(ButtonsBlock {
            buttons: vec![
                Button {
                    text: "Buy".into(),
                    url: Some("/buy".into()),
                    style: ButtonStyle::Fill,
                    background: None,
                    text_color: None,
                },
                Button {
                    text: "Info".into(),
                    url: Some("/info".into()),
                    style: ButtonStyle::Outline,
                    background: None,
                    text_color: None,
                },
            ],
            align: None,
        })]);
        let markup = deterministic().compose(&layout).unwrap();
        assert_eq!(markup.matches("<!-- wp:button ").count(), 2);
        let buy = markup.find(">Buy<").unwrap();
        let info = markup.find(">Info<").unwrap();
        assert!(buy < info);
        assert!(markup.contains("is-style-outline"));
    }

    #[test]
    fn fragments_join_with_single_newline() {
        let layout = Layout::new(vec![paragraph("one"), paragraph("two")]);
        let markup = deterministic().compose(&layout).unwrap();
        assert!(markup.contains("<!-- /wp:paragraph -->\n<!-- wp:paragraph"));
        assert!(!markup.ends_with('\n'));
    }

    #[test]
    fn deterministic_modulo_identifiers() {
        let layout = Layout::new(vec![Section::Columns(ColumnsBlock {
            columns: vec![
                Column {
                    sections: vec![paragraph("a")],
                    ..Default::default()
                },
                Column::default(),
            ],
            align: None,
            style: None,
        })]);
        let first = Composer::new().compose(&layout).unwrap();
        let second = Composer::new().compose(&layout).unwrap();
        assert_ne!(first, second);
        assert_eq!(strip_ids(&first), strip_ids(&second));
    }

    #[test]
    fn empty_column_is_legal() {
        let layout = Layout::new(vec![Section::Columns(ColumnsBlock {
            columns: vec![Column::default()],
            align: None,
            style: None,
        })]);
        let markup = deterministic().compose(&layout).unwrap();
        assert!(markup.contains("wp-block-column"));
    }

    #[test]
    fn nesting_beyond_max_depth_fails() {
        let mut section = Section::Columns(ColumnsBlock {
            columns: vec![Column::default()],
            align: None,
            style: None,
        });
        for _ in 0..4 {
            section = Section::Columns(ColumnsBlock {
                columns: vec![Column {
                    sections: vec![section],
                    ..Default::default()
                }],
                align: None,
                style: None,
            });
        }
        let layout = Layout::new(vec![section]);
        let err = deterministic()
            .with_max_depth(3)
            .compose(&layout)
            .unwrap_err();
        assert!(matches!(err, ComposeError::MaxDepthExceeded { limit: 3 }));
    }

    #[test]
    fn out_of_range_heading_level_fails_with_path() {
        let layout = Layout::new(vec![
            paragraph("fine"),
            Section::Heading(HeadingBlock {
                text: "broken".into(),
                level: Some(9),
                align: None,
                style: None,
            }),
        ]);
        let err = deterministic().compose(&layout).unwrap_err();
        match err {
            ComposeError::MalformedContent { kind, path, .. } => {
                assert_eq!(kind, "heading");
                assert_eq!(path.to_string(), "1");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn markers_balance_across_whole_document() {
        let layout = Layout::new(vec![Section::Columns(ColumnsBlock {
            columns: vec![Column {
                sections: vec![paragraph("nested")],
                ..Default::default()
            }],
            align: None,
            style: None,
        })]);
        let markup = deterministic().compose(&layout).unwrap();
        assert_eq!(
            markup.matches("<!-- wp:").count(),
            markup.matches("<!-- /wp:").count()
        );
    }
}
