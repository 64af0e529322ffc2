//! Pattern export.
//!
//! Wraps one composed markup document into a named, categorized pattern
//! and serializes it either as a plain JSON record for programmatic
//! reuse or as a PHP `register_block_pattern` snippet for static
//! installation. Patterns are built once, never mutated, and serialized
//! immediately.

use blocksmith_compose::Composer;
use blocksmith_core::{ComposeError, ExportError, Layout};
use serde::{Deserialize, Serialize};

/// Fixed category identifying patterns produced by this pipeline, so
/// downstream systems can group and filter the imports.
pub const PATTERN_CATEGORY: &str = "blocksmith-imported";

/// Namespace prefix for registered pattern slugs.
pub const PATTERN_NAMESPACE: &str = "blocksmith";

/// A reusable packaging of one composed markup document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    pub title: String,
    pub category: String,
    pub content: String,
}

impl Pattern {
    /// Compose `layout` once and wrap the result.
    pub fn from_layout(
        layout: &Layout,
        title: impl Into<String>,
        composer: &mut Composer,
    ) -> Result<Self, ComposeError> {
        Ok(Self {
            title: title.into(),
            category: PATTERN_CATEGORY.to_string(),
            content: composer.compose(layout)?,
        })
    }

    /// The registered pattern name, e.g. `blocksmith/hero-landing`.
    pub fn name(&self) -> String {
        format!("{PATTERN_NAMESPACE}/{}", slugify(&self.title))
    }

    /// Serialize as the plain `{title, category, content}` record.
    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize as one PHP registration statement.
    pub fn to_php(&self) -> String {
        format!(
            "register_block_pattern(\n\
             \t'{}',\n\
             \tarray(\n\
             \t\t'title'      => '{}',\n\
             \t\t'categories' => array( '{}' ),\n\
             \t\t'content'    => '{}',\n\
             \t)\n\
             );",
            php_quote(&self.name()),
            php_quote(&self.title),
            php_quote(&self.category),
            php_quote(&self.content),
        )
    }
}

/// Aggregate any number of patterns into one installable PHP file.
/// Registrations are independent and keep their input order.
pub fn registration_file(patterns: &[Pattern]) -> String {
    let mut out = String::from("<?php\n");
    out.push_str("/**\n * Block patterns generated from analyzed layouts.\n */\n\n");
    out.push_str("add_action( 'init', function () {\n");
    out.push_str("\tregister_block_pattern_category(\n");
    out.push_str(&format!("\t\t'{PATTERN_CATEGORY}',\n"));
    out.push_str("\t\tarray( 'label' => 'Blocksmith Imports' )\n");
    out.push_str("\t);\n");
    // Statements go in unindented: content strings span lines, and any
    // added indentation would land inside the quoted content itself.
    for pattern in patterns {
        out.push('\n');
        out.push_str(&pattern.to_php());
        out.push('\n');
    }
    out.push_str("} );\n");
    out
}

/// Escape a value for a single-quoted PHP string literal. Only `\` and
/// `'` are special there; newlines survive literally.
fn php_quote(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Derive a slug from a pattern title: ASCII-fold the Norwegian letters
/// the analyzer routinely produces, lowercase, and collapse every other
/// non-alphanumeric run into single dashes.
fn slugify(title: &str) -> String {
    let folded: String = title
        .chars()
        .flat_map(|c| match c {
            'æ' | 'Æ' => "ae".chars().collect::<Vec<_>>(),
            'ø' | 'Ø' => vec!['o'],
            'å' | 'Å' => vec!['a'],
            other => vec![other],
        })
        .collect();

    let mut slug = String::with_capacity(folded.len());
    let mut pending_dash = false;
    for c in folded.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    if slug.is_empty() {
        slug.push_str("pattern");
    }
    slug
}
