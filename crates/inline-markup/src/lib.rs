//! Source-tracked markup trees.
//!
//! This crate wraps [`quick-xml`] to build a [`MarkupTree`] in which every
//! element, text run and comment is a node carrying [`NodeLocation`]
//! metadata. Comments are kept as nodes so that documentation preceding an
//! element can be found later; elements record where their start and end
//! tags sit so that the text between them can be located.
//!
//! # Overview
//!
//! - [`MarkupTree`]: Arena of nodes below a synthetic document root
//! - [`NodeKind`]: Element, text, comment or the document root
//! - [`NodeLocation`]: Either a [`PlainLocation`] or an [`ElementLocation`]
//!
//! Lines are 1-indexed and columns 0-indexed in all location metadata.
//!
//! # Example
//!
//! ```rust
//! use inline_markup::parse;
//!
//! let tree = parse("<!-- Greets -->\n<script>greet();</script>").unwrap();
//!
//! let script = tree.find_elements("script")[0];
//! let top = tree.children(tree.root());
//! assert_eq!(tree.comment_text(top[0]), Some(" Greets "));
//! assert_eq!(tree.text_content(script), "greet();");
//! ```

pub mod error;
mod line_index;
pub mod parser;
pub mod types;

// Re-export main types
pub use error::{Error, Result};
pub use parser::parse;
pub use types::{
    Attribute, ElementLocation, MarkupTree, NodeId, NodeKind, NodeLocation, PlainLocation,
    TagLocation,
};
