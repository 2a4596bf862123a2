//! Documentation comments attached to nodes.
//!
//! The comment documenting a node is the nearest comment before it in
//! document order. In documents built from imports followed by a comment and
//! then a `<dom-module>`, the comment can end up inside `<head>` instead of
//! next to the element it documents, so the search climbs through ancestors
//! and their earlier siblings instead of stopping at the parent.

use crate::tree::{LocatedTree, nodes_before};
use crate::unindent::unindent;
use once_cell::sync::Lazy;
use regex::Regex;

/// Marker identifying license banners.
pub const DEFAULT_LICENSE_MARKER: &str = "@license";

static LICENSE_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(DEFAULT_LICENSE_MARKER).unwrap());

/// Decides whether a comment may be used as documentation.
pub trait CommentFilter {
    /// `true` if `comment` may be attached as documentation.
    fn accepts(&self, comment: &str) -> bool;
}

impl<F> CommentFilter for F
where
    F: Fn(&str) -> bool,
{
    fn accepts(&self, comment: &str) -> bool {
        self(comment)
    }
}

/// Rejects comments matching any of a set of marker patterns.
///
/// The default filter rejects comments containing `@license`.
#[derive(Debug, Clone)]
pub struct LicenseFilter {
    markers: Vec<Regex>,
}

impl Default for LicenseFilter {
    fn default() -> Self {
        LicenseFilter {
            markers: vec![Regex::clone(&LICENSE_MARKER)],
        }
    }
}

impl LicenseFilter {
    /// Build a filter from regular expressions matched anywhere in a comment.
    ///
    /// # Errors
    ///
    /// Returns an error if any pattern is not a valid regular expression.
    pub fn new<I, S>(patterns: I) -> crate::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let markers = patterns
            .into_iter()
            .map(|pattern| Regex::new(pattern.as_ref()))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(LicenseFilter { markers })
    }

    pub fn markers(&self) -> impl Iterator<Item = &str> {
        self.markers.iter().map(Regex::as_str)
    }
}

impl CommentFilter for LicenseFilter {
    fn accepts(&self, comment: &str) -> bool {
        !self.markers.iter().any(|marker| marker.is_match(comment))
    }
}

/// Text of the comment documenting `node`, unindented and trimmed.
///
/// Returns `None` when no comment precedes the node, or when the nearest one
/// is empty or a license banner.
pub fn get_attached_comment_text<T: LocatedTree>(tree: &T, node: T::Node) -> Option<String> {
    get_attached_comment_text_with_filter(tree, node, &LicenseFilter::default())
}

/// Like [`get_attached_comment_text`], with a custom policy for which
/// comments count as documentation.
///
/// Only the nearest preceding comment is considered. If `filter` rejects it,
/// the node has no attached comment; earlier comments are not tried.
pub fn get_attached_comment_text_with_filter<T, F>(
    tree: &T,
    node: T::Node,
    filter: &F,
) -> Option<String>
where
    T: LocatedTree,
    F: CommentFilter + ?Sized,
{
    let comment = nodes_before(tree, node).find_map(|candidate| tree.comment_text(candidate));
    let Some(comment) = comment.filter(|text| !text.is_empty()) else {
        tracing::trace!(node = ?node, "No comment precedes node");
        return None;
    };

    if !filter.accepts(comment) {
        tracing::debug!(node = ?node, "Nearest comment rejected as documentation");
        return None;
    }

    Some(unindent(comment).trim().to_string())
}
