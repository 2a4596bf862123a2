//! Inline documents embedded in markup.
//!
//! A markup document can carry other documents inline: scripts and styles
//! inside `<script>` and `<style>` elements, for instance. Each one is
//! scanned on its own, so this crate records what is needed to relate the
//! results back to the containing document:
//!
//! - where the inline document's text begins ([`LocationOffset`]), so that
//!   locations found while scanning it can be translated with
//!   [`correct_source_location`]
//! - the documentation comment attached to the node it came from
//!
//! # Example
//!
//! ```rust
//! use inline_document::{InlineParsedDocument, LicenseFilter, SourceLocation};
//! use inline_markup::{NodeId, parse};
//!
//! let html = "<html>\n  <!-- Adds one. -->\n  <script>\n    inc(x);\n  </script>\n</html>";
//! let tree = parse(html).unwrap();
//! let script = tree.find_elements("script")[0];
//!
//! let doc: InlineParsedDocument<NodeId, ()> =
//!     InlineParsedDocument::from_markup(&tree, script, "javascript", &LicenseFilter::default())
//!         .unwrap();
//! assert_eq!(doc.attached_comment(), Some("Adds one."));
//!
//! // `inc` is on line 1, column 4 of the script's text
//! let found = doc.correct_location(Some(SourceLocation::new(1, 4)));
//! assert_eq!(found, Some(SourceLocation::new(3, 4)));
//! ```

pub mod comment;
pub mod config;
pub mod document;
pub mod error;
pub mod offset;
pub mod tree;
pub mod unindent;

pub use comment::{
    CommentFilter, DEFAULT_LICENSE_MARKER, LicenseFilter, get_attached_comment_text,
    get_attached_comment_text_with_filter,
};
pub use config::{CommentConfig, InlineDocumentConfig};
pub use document::InlineParsedDocument;
pub use error::{InlineDocumentError, Result};
pub use offset::{get_location_offset_of_start_of_text_content, text_start_offset};
pub use tree::{LocatedTree, document_order, nodes_before};
pub use unindent::unindent;

pub use inline_markup::NodeLocation;
pub use inline_source_map::{
    LocationOffset, SourceLocation, SourceRange, correct_source_location, correct_source_range,
};
