//! Core types for inline document locations

use serde::{Deserialize, Serialize};

/// A point in source text (0-indexed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SourceLocation {
    /// Line number (0-indexed)
    pub line: usize,
    /// Column number (0-indexed)
    pub column: usize,
    /// The file this point belongs to, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

/// A range in source text from start to end
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceRange {
    /// Start point (inclusive)
    pub start: SourceLocation,
    /// End point (exclusive)
    pub end: SourceLocation,
    /// The file this range belongs to, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

/// Where an embedded fragment begins inside its container.
///
/// `line` and `col` are zero-based. `filename` is set when the fragment is
/// logically part of a different named source than the locations it will be
/// applied to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LocationOffset {
    /// Zero based line index.
    pub line: usize,
    /// Zero based column index.
    pub col: usize,
    /// The url of the source file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl SourceLocation {
    /// Create a point with no file attached
    pub const fn new(line: usize, column: usize) -> Self {
        SourceLocation {
            line,
            column,
            file: None,
        }
    }

    /// Attach a file to this point
    pub fn in_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

impl SourceRange {
    pub fn new(start: SourceLocation, end: SourceLocation) -> Self {
        SourceRange {
            start,
            end,
            file: None,
        }
    }

    /// Attach a file to this range
    pub fn in_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

impl LocationOffset {
    /// Create an offset that does not change file identity
    pub const fn new(line: usize, col: usize) -> Self {
        LocationOffset {
            line,
            col,
            filename: None,
        }
    }

    /// Create an offset that also moves locations into `filename`
    pub fn with_filename(line: usize, col: usize, filename: impl Into<String>) -> Self {
        LocationOffset {
            line,
            col,
            filename: Some(filename.into()),
        }
    }

    /// Returns `true` if applying this offset leaves line and column unchanged.
    pub fn is_zero(&self) -> bool {
        self.line == 0 && self.col == 0
    }

    /// Fold two nesting levels into one offset.
    ///
    /// `inner` positions a fragment inside an intermediate document, `outer`
    /// positions that intermediate document inside its own container. The
    /// result maps fragment locations straight to the outermost document:
    /// applying it gives the same answer as applying `inner` and then `outer`.
    pub fn compose(inner: &LocationOffset, outer: &LocationOffset) -> LocationOffset {
        let col = if inner.line == 0 {
            inner.col + outer.col
        } else {
            inner.col
        };
        LocationOffset {
            line: inner.line + outer.line,
            col,
            filename: outer.filename.clone().or_else(|| inner.filename.clone()),
        }
    }
}
