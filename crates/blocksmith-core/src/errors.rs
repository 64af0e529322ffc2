//! Error types for the blocksmith compiler.

use std::fmt;
use thiserror::Error;

/// Top-level error type for the blocksmith pipeline.
#[derive(Debug, Error)]
pub enum BlocksmithError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Compose(#[from] ComposeError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Index path of a section inside the layout tree, for error reporting.
///
/// Each element is an index into the enclosing section (or column)
/// sequence, e.g. `sections[2] > columns[0] > sections[1]` prints as
/// `2/0/1`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IndexPath(pub Vec<usize>);

impl IndexPath {
    pub fn root() -> Self {
        Self::default()
    }

    /// Path extended by one more index.
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }
}

impl fmt::Display for IndexPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("(root)");
        }
        let mut first = true;
        for index in &self.0 {
            if !first {
                f.write_str("/")?;
            }
            write!(f, "{index}")?;
            first = false;
        }
        Ok(())
    }
}

/// Errors while decoding an analyzer layout document.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unsupported block type `{kind}` at section {path}")]
    UnsupportedBlockType { kind: String, path: IndexPath },

    #[error("malformed `{kind}` block at section {path}: {detail}")]
    MalformedContent {
        kind: String,
        path: IndexPath,
        detail: String,
    },

    #[error("invalid layout document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors during document composition.
#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("columns block at section {path} mixes explicit and implicit widths")]
    InconsistentColumnWidths { path: IndexPath },

    #[error("malformed `{kind}` block at section {path}: {detail}")]
    MalformedContent {
        kind: String,
        path: IndexPath,
        detail: String,
    },

    #[error("layout nesting exceeds the maximum depth of {limit}")]
    MaxDepthExceeded { limit: usize },
}

/// Errors during pattern serialization.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("pattern serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_path_display() {
        assert_eq!(IndexPath::root().to_string(), "(root)");
        let path = IndexPath::root().child(2).child(0).child(1);
        assert_eq!(path.to_string(), "2/0/1");
    }

    #[test]
    fn compose_error_message_carries_path() {
        let err = ComposeError::InconsistentColumnWidths {
            path: IndexPath(vec![3]),
        };
        assert_eq!(
            err.to_string(),
            "columns block at section 3 mixes explicit and implicit widths"
        );
    }
}
