//! Error types for inline document extraction.

use thiserror::Error;

/// Errors that can occur while describing inline documents.
#[derive(Debug, Error)]
pub enum InlineDocumentError {
    /// Neither the node nor any of its children carry location metadata.
    ///
    /// The parser is expected to annotate every node an inline document can
    /// come from, so this indicates a broken tree rather than bad input.
    #[error("Couldn't extract a location offset from node: {node}")]
    MissingLocation { node: String },

    /// The scanned document of an inline document can only be set once.
    #[error("Inline {kind} document has already been scanned")]
    AlreadyScanned { kind: String },

    /// The configuration file could not be parsed.
    #[error("Invalid inline document configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// A comment marker is not a valid regular expression.
    #[error("Invalid comment marker pattern: {0}")]
    MarkerPattern(#[from] regex::Error),
}

/// Result type for inline document operations.
pub type Result<T> = std::result::Result<T, InlineDocumentError>;
