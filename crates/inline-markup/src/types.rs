//! Core types for source-tracked markup trees.

use serde::{Deserialize, Serialize};

/// Handle to a node stored in a [`MarkupTree`].
///
/// Handles are only meaningful for the tree that produced them. Reading a
/// handle the tree does not know yields nothing rather than panicking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

/// Location of a node that is a single run of source text.
///
/// Used for text, CDATA and comment nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlainLocation {
    /// Line where the node starts (1-indexed)
    pub line: usize,
    /// Column where the node starts (0-indexed)
    pub col: usize,
    /// Byte offset where the node starts
    pub start_offset: usize,
    /// Byte offset just past the node
    pub end_offset: usize,
}

/// Location of one tag of an element (`<name ...>` or `</name>`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagLocation {
    /// Line where the tag starts (1-indexed)
    pub line: usize,
    /// Column of the tag's `<` (0-indexed)
    pub col: usize,
    /// Column just past the tag's `>` (0-indexed), measured on the line
    /// where the tag ends
    pub end_col: usize,
    /// Byte offset of the tag's `<`
    pub start_offset: usize,
    /// Byte offset just past the tag's `>`
    pub end_offset: usize,
}

/// Location of an element, split into its tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementLocation {
    /// The opening tag (the whole tag for self-closing elements)
    pub start_tag: TagLocation,
    /// The closing tag, absent for self-closing elements
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_tag: Option<TagLocation>,
}

/// Location metadata attached to a node.
///
/// Parsers report one of two shapes. Text-like nodes have a single
/// [`PlainLocation`]; elements report where their tags are.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NodeLocation {
    Plain(PlainLocation),
    Element(ElementLocation),
}

/// An attribute of an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// The local name of the attribute (without namespace prefix).
    pub name: String,
    /// The attribute value (after unescaping entities).
    pub value: String,
}

/// What a node is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// The synthetic root holding every top-level node.
    Document,

    /// An element with its name and attributes.
    Element {
        /// The local name of the element (without namespace prefix).
        name: String,
        /// Namespace prefix, if any (e.g., "svg" in `<svg:rect>`).
        prefix: Option<String>,
        attributes: Vec<Attribute>,
    },

    /// Text as written in the source (entities undecoded), or CDATA content.
    Text(String),

    /// A comment, holding the text between `<!--` and `-->`.
    Comment(String),
}

#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    pub(crate) kind: NodeKind,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) location: Option<NodeLocation>,
}

/// A markup document stored as an arena of nodes.
///
/// The tree always has a [`NodeKind::Document`] root. Nodes are appended
/// to their parent in document order, either by the parser or by the
/// `add_*` builder methods.
#[derive(Debug, Clone)]
pub struct MarkupTree {
    pub(crate) nodes: Vec<NodeData>,
}

impl Default for MarkupTree {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkupTree {
    /// Create a tree holding only the document root.
    pub fn new() -> Self {
        MarkupTree {
            nodes: vec![NodeData {
                kind: NodeKind::Document,
                parent: None,
                children: Vec::new(),
                location: None,
            }],
        }
    }

    /// The document root.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes, the root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree holds only the document root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    fn data(&self, node: NodeId) -> Option<&NodeData> {
        self.nodes.get(node.0)
    }

    /// What `node` is, `None` if it is not a node of this tree.
    pub fn kind(&self, node: NodeId) -> Option<&NodeKind> {
        self.data(node).map(|data| &data.kind)
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.data(node).and_then(|data| data.parent)
    }

    /// Children of `node`, empty if it is not a node of this tree.
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.data(node)
            .map(|data| data.children.as_slice())
            .unwrap_or_default()
    }

    pub fn location(&self, node: NodeId) -> Option<&NodeLocation> {
        self.data(node).and_then(|data| data.location.as_ref())
    }

    /// Replace the location metadata of a node. Unknown nodes are ignored.
    pub fn set_location(&mut self, node: NodeId, location: Option<NodeLocation>) {
        if let Some(data) = self.nodes.get_mut(node.0) {
            data.location = location;
        }
    }

    /// Append an element under `parent`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` is not a node of this tree, as do the other
    /// `add_*` methods.
    pub fn add_element(
        &mut self,
        parent: NodeId,
        name: impl Into<String>,
        attributes: Vec<Attribute>,
        location: Option<NodeLocation>,
    ) -> NodeId {
        let name: String = name.into();
        let (prefix, name) = split_prefix(&name);
        self.push(
            parent,
            NodeKind::Element {
                name,
                prefix,
                attributes,
            },
            location,
        )
    }

    /// Append a text node under `parent`.
    pub fn add_text(
        &mut self,
        parent: NodeId,
        text: impl Into<String>,
        location: Option<NodeLocation>,
    ) -> NodeId {
        self.push(parent, NodeKind::Text(text.into()), location)
    }

    /// Append a comment under `parent`.
    pub fn add_comment(
        &mut self,
        parent: NodeId,
        text: impl Into<String>,
        location: Option<NodeLocation>,
    ) -> NodeId {
        self.push(parent, NodeKind::Comment(text.into()), location)
    }

    fn push(&mut self, parent: NodeId, kind: NodeKind, location: Option<NodeLocation>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            kind,
            parent: Some(parent),
            children: Vec::new(),
            location,
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Get the local name of an element node.
    pub fn element_name(&self, node: NodeId) -> Option<&str> {
        match self.kind(node) {
            Some(NodeKind::Element { name, .. }) => Some(name),
            _ => None,
        }
    }

    /// Get an attribute value of an element node by name.
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        match self.kind(node) {
            Some(NodeKind::Element { attributes, .. }) => attributes
                .iter()
                .find(|a| a.name == name)
                .map(|a| a.value.as_str()),
            _ => None,
        }
    }

    /// The text of a comment node.
    pub fn comment_text(&self, node: NodeId) -> Option<&str> {
        match self.kind(node) {
            Some(NodeKind::Comment(text)) => Some(text),
            _ => None,
        }
    }

    pub fn is_comment(&self, node: NodeId) -> bool {
        matches!(self.kind(node), Some(NodeKind::Comment(_)))
    }

    /// Concatenated text of every text node below `node`, in document order.
    ///
    /// Comments are not part of the text content.
    pub fn text_content(&self, node: NodeId) -> String {
        let mut content = String::new();
        let mut stack = vec![node];
        while let Some(current) = stack.pop() {
            match self.kind(current) {
                Some(NodeKind::Text(text)) => content.push_str(text),
                Some(NodeKind::Comment(_)) | None => {}
                Some(NodeKind::Document | NodeKind::Element { .. }) => {
                    stack.extend(self.children(current).iter().rev());
                }
            }
        }
        content
    }

    /// All elements named `name`, in document order.
    pub fn find_elements(&self, name: &str) -> Vec<NodeId> {
        let mut found = Vec::new();
        let mut stack = vec![self.root()];
        while let Some(current) = stack.pop() {
            if self.element_name(current) == Some(name) {
                found.push(current);
            }
            stack.extend(self.children(current).iter().rev());
        }
        found
    }
}

/// Split `prefix:name` into its prefix and local name.
pub(crate) fn split_prefix(full_name: &str) -> (Option<String>, String) {
    match full_name.split_once(':') {
        Some((prefix, local_name)) => (Some(prefix.to_string()), local_name.to_string()),
        None => (None, full_name.to_string()),
    }
}
