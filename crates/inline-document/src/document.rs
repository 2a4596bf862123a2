//! Inline documents found inside a containing document.

use crate::comment::{CommentFilter, get_attached_comment_text_with_filter};
use crate::error::{InlineDocumentError, Result};
use crate::offset::get_location_offset_of_start_of_text_content;
use inline_markup::{MarkupTree, NodeId};
use inline_source_map::{
    LocationOffset, SourceLocation, SourceRange, correct_source_location, correct_source_range,
};
use once_cell::sync::OnceCell;

/// An inline document, usually a `<script>` or `<style>` element in markup.
///
/// `N` is the node type of the containing document's tree; the node is kept
/// so that features found by different scanners can be ordered by where
/// they come from. `D` is whatever the scanning pipeline produces for the
/// document's contents. Everything but the scanned document is fixed at
/// construction; the scanned document is filled in once, later.
#[derive(Debug, Clone)]
pub struct InlineParsedDocument<N, D> {
    /// Language or content tag such as "javascript", "css" or "html".
    kind: String,

    /// Raw text of the inline document.
    contents: String,

    node: N,

    /// The location offset of this document within the containing document.
    location_offset: LocationOffset,

    attached_comment: Option<String>,

    scanned_document: OnceCell<D>,
}

impl<N, D> InlineParsedDocument<N, D> {
    pub fn new(
        kind: impl Into<String>,
        contents: impl Into<String>,
        node: N,
        location_offset: LocationOffset,
        attached_comment: Option<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            contents: contents.into(),
            node,
            location_offset,
            attached_comment,
            scanned_document: OnceCell::new(),
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    pub fn node(&self) -> &N {
        &self.node
    }

    pub fn location_offset(&self) -> &LocationOffset {
        &self.location_offset
    }

    pub fn attached_comment(&self) -> Option<&str> {
        self.attached_comment.as_deref()
    }

    /// The result of scanning [`contents`](Self::contents), once available.
    pub fn scanned_document(&self) -> Option<&D> {
        self.scanned_document.get()
    }

    /// Record the result of scanning this document's contents.
    ///
    /// # Errors
    ///
    /// Returns [`InlineDocumentError::AlreadyScanned`] if a scanned document
    /// was set before. The earlier value is kept.
    pub fn set_scanned_document(&self, scanned: D) -> Result<()> {
        if self.scanned_document.set(scanned).is_err() {
            tracing::debug!(kind = %self.kind, "Rejected second scanned document");
            return Err(InlineDocumentError::AlreadyScanned {
                kind: self.kind.clone(),
            });
        }
        tracing::trace!(kind = %self.kind, "Attached scanned document");
        Ok(())
    }

    /// Translate a location found in this document's contents into the
    /// containing document.
    pub fn correct_location(&self, location: Option<SourceLocation>) -> Option<SourceLocation> {
        correct_source_location(location, Some(&self.location_offset))
    }

    /// Translate a range found in this document's contents into the
    /// containing document.
    pub fn correct_range(&self, range: Option<SourceRange>) -> Option<SourceRange> {
        correct_source_range(range, Some(&self.location_offset))
    }
}

impl<D> InlineParsedDocument<NodeId, D> {
    /// Describe the text content of a markup node as an inline document.
    ///
    /// The contents are the node's text, unmodified. The offset and the
    /// attached comment come from the node's position in `tree`, with
    /// `filter` deciding which comments count as documentation.
    ///
    /// # Errors
    ///
    /// Returns [`InlineDocumentError::MissingLocation`] if the node and its
    /// children carry no location metadata.
    pub fn from_markup<F>(
        tree: &MarkupTree,
        node: NodeId,
        kind: impl Into<String>,
        filter: &F,
    ) -> Result<Self>
    where
        F: CommentFilter + ?Sized,
    {
        let location_offset = get_location_offset_of_start_of_text_content(tree, node)?;
        let attached_comment = get_attached_comment_text_with_filter(tree, node, filter);
        let kind = kind.into();
        tracing::debug!(
            kind = %kind,
            line = location_offset.line,
            col = location_offset.col,
            documented = attached_comment.is_some(),
            "Found inline document"
        );
        Ok(Self::new(
            kind,
            tree.text_content(node),
            node,
            location_offset,
            attached_comment,
        ))
    }
}
