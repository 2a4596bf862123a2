//! The tree capabilities inline document extraction relies on.

use inline_markup::{MarkupTree, NodeId, NodeLocation};
use std::fmt::Debug;

/// A parsed tree whose nodes may carry location metadata.
///
/// Extraction only needs to enumerate children, read a node's location, and
/// tell comments apart from other nodes. Any parser output can take part by
/// converting its location data to [`NodeLocation`] at this boundary.
pub trait LocatedTree {
    /// Handle identifying a node of this tree.
    type Node: Copy + Eq + Debug;

    fn root(&self) -> Self::Node;

    /// Children of `node`, in document order.
    fn children(&self, node: Self::Node) -> &[Self::Node];

    fn location(&self, node: Self::Node) -> Option<&NodeLocation>;

    /// The text of `node` if it is a comment, `None` for any other node.
    fn comment_text(&self, node: Self::Node) -> Option<&str>;

    fn is_comment(&self, node: Self::Node) -> bool {
        self.comment_text(node).is_some()
    }
}

impl LocatedTree for MarkupTree {
    type Node = NodeId;

    fn root(&self) -> NodeId {
        MarkupTree::root(self)
    }

    fn children(&self, node: NodeId) -> &[NodeId] {
        MarkupTree::children(self, node)
    }

    fn location(&self, node: NodeId) -> Option<&NodeLocation> {
        MarkupTree::location(self, node)
    }

    fn comment_text(&self, node: NodeId) -> Option<&str> {
        MarkupTree::comment_text(self, node)
    }
}

/// Every node of `tree` in document order (pre-order).
pub fn document_order<T: LocatedTree>(tree: &T) -> Vec<T::Node> {
    let mut order = Vec::new();
    let mut stack = vec![tree.root()];
    while let Some(node) = stack.pop() {
        order.push(node);
        stack.extend(tree.children(node).iter().rev());
    }
    order
}

/// Nodes that come before `node` in the document, nearest first.
///
/// This crosses nesting levels: once the node's preceding siblings (and
/// their descendants) are exhausted, the walk continues with its parent and
/// then the parent's preceding siblings, up to the root. A node that is not
/// part of `tree` has no predecessors.
pub fn nodes_before<T: LocatedTree>(
    tree: &T,
    node: T::Node,
) -> std::iter::Rev<std::vec::IntoIter<T::Node>> {
    let mut order = document_order(tree);
    let position = order.iter().position(|n| *n == node).unwrap_or(0);
    order.truncate(position);
    order.into_iter().rev()
}
