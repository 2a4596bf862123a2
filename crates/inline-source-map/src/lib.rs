//! Location offsets for inline documents
//!
//! A document embedded in another one (a `<script>` or `<style>` block inside
//! markup, for example) is analyzed on its own, so every location found while
//! scanning it is relative to the start of the fragment. This crate describes
//! where such a fragment begins in its container and translates fragment-local
//! locations back to the container's coordinates.
//!
//! # Overview
//!
//! The core types are:
//! - [`LocationOffset`]: Where an embedded fragment starts in its container
//! - [`SourceLocation`]: A zero-based line/column point, optionally in a named file
//! - [`SourceRange`]: A pair of points sharing a file
//!
//! # Example
//!
//! ```rust
//! use inline_source_map::*;
//!
//! // The fragment starts on line 10, column 4 of the outer document
//! let offset = LocationOffset::new(10, 4);
//!
//! // A point on the fragment's first line picks up the column offset
//! let corrected = correct_source_location(Some(SourceLocation::new(0, 3)), Some(&offset));
//! assert_eq!(corrected, Some(SourceLocation::new(10, 7)));
//!
//! // Later lines already start at the real line start
//! let corrected = correct_source_location(Some(SourceLocation::new(2, 3)), Some(&offset));
//! assert_eq!(corrected, Some(SourceLocation::new(12, 3)));
//! ```

pub mod correct;
pub mod types;

pub use correct::{correct_source_location, correct_source_range};
pub use types::{LocationOffset, SourceLocation, SourceRange};
