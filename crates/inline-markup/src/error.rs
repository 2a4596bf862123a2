//! Error types for markup parsing.

use thiserror::Error;

/// Result type alias for inline-markup operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a markup tree.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Syntax error reported by quick-xml.
    #[error("Markup syntax error: {message}")]
    Syntax {
        message: String,
        /// Byte offset where the error occurred.
        position: Option<u64>,
    },

    /// A closing tag with no open element.
    #[error("Unexpected closing tag </{name}> at byte {offset}")]
    UnexpectedEndTag { name: String, offset: usize },

    /// A closing tag that does not match the innermost open element.
    #[error("Mismatched end tag: expected </{expected}>, found </{found}>")]
    MismatchedEndTag {
        expected: String,
        found: String,
        /// Line of the mismatched closing tag (1-indexed).
        line: usize,
    },

    /// Input ended with an element still open.
    #[error("Unclosed element <{name}> opened on line {line}")]
    UnclosedElement { name: String, line: usize },
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Syntax {
            message: err.to_string(),
            position: None,
        }
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::Syntax {
            message: format!("Attribute error: {}", err),
            position: None,
        }
    }
}
