//! Markup parser that builds MarkupTree values with location metadata.

use crate::types::{
    Attribute, ElementLocation, MarkupTree, NodeId, NodeLocation, PlainLocation, TagLocation,
    split_prefix,
};
use crate::line_index::LineIndex;
use crate::{Error, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesCData, BytesEnd, BytesStart, BytesText, Event};

/// Length of the `<![CDATA[` marker preceding CDATA content.
const CDATA_OPEN_LEN: usize = 9;

/// Parse markup from a string, producing a MarkupTree.
///
/// Elements, text, CDATA sections and comments all become nodes, in
/// document order, below the tree's synthetic document root. Several
/// top-level nodes are allowed, so fragments such as
/// `<!-- docs --><script>...</script>` parse as-is.
///
/// # Example
///
/// ```rust
/// use inline_markup::{parse, NodeLocation};
///
/// let tree = parse("<script>var x;</script>").unwrap();
/// let script = tree.find_elements("script")[0];
/// assert_eq!(tree.text_content(script), "var x;");
/// assert!(matches!(tree.location(script), Some(NodeLocation::Element(_))));
/// ```
///
/// # Errors
///
/// Returns an error if the markup is malformed.
pub fn parse(content: &str) -> Result<MarkupTree> {
    let mut parser = MarkupParser::new(content);
    parser.parse()
}

/// Internal parser state.
struct MarkupParser<'a> {
    /// The quick-xml reader.
    reader: Reader<&'a [u8]>,

    /// Line index used to turn byte offsets into lines and columns.
    line_index: LineIndex,

    /// The tree being built.
    tree: MarkupTree,

    /// Open elements with the full name their closing tag must repeat.
    stack: Vec<(NodeId, String)>,
}

impl<'a> MarkupParser<'a> {
    fn new(source: &'a str) -> Self {
        let mut reader = Reader::from_str(source);
        reader.config_mut().trim_text_start = false;
        reader.config_mut().trim_text_end = false;

        Self {
            reader,
            line_index: LineIndex::new(source),
            tree: MarkupTree::new(),
            stack: Vec::new(),
        }
    }

    fn parse(&mut self) -> Result<MarkupTree> {
        loop {
            // Capture position before reading the event
            let event_start = self.reader.buffer_position() as usize;

            match self.reader.read_event() {
                Ok(Event::Start(e)) => self.handle_start(&e, event_start)?,
                Ok(Event::End(e)) => self.handle_end(&e, event_start)?,
                Ok(Event::Empty(e)) => {
                    self.handle_empty(&e, event_start)?;
                }
                Ok(Event::Text(e)) => self.handle_text(&e, event_start),
                Ok(Event::CData(e)) => self.handle_cdata(&e, event_start),
                Ok(Event::Comment(e)) => self.handle_comment(&e, event_start),
                Ok(Event::Eof) => break,
                Ok(_) => {
                    // Processing instructions, declarations and DOCTYPE carry
                    // nothing the tree needs
                }
                Err(e) => {
                    return Err(Error::Syntax {
                        message: e.to_string(),
                        position: Some(self.reader.error_position()),
                    });
                }
            }
        }

        if let Some((node, name)) = self.stack.last() {
            let line = match self.tree.location(*node) {
                Some(NodeLocation::Element(location)) => location.start_tag.line,
                _ => 0,
            };
            return Err(Error::UnclosedElement {
                name: name.clone(),
                line,
            });
        }

        tracing::debug!(nodes = self.tree.len(), "Parsed markup tree");
        Ok(std::mem::take(&mut self.tree))
    }

    fn current_parent(&self) -> NodeId {
        self.stack
            .last()
            .map_or_else(|| self.tree.root(), |(node, _)| *node)
    }

    fn handle_start(&mut self, e: &BytesStart<'_>, event_start: usize) -> Result<()> {
        let node = self.handle_empty(e, event_start)?;
        let full_name = String::from_utf8_lossy(e.name().as_ref()).to_string();
        self.stack.push((node, full_name));
        Ok(())
    }

    fn handle_empty(&mut self, e: &BytesStart<'_>, event_start: usize) -> Result<NodeId> {
        let full_name = String::from_utf8_lossy(e.name().as_ref()).to_string();
        let attributes = self.parse_attributes(e, event_start)?;

        let tag_end = self.reader.buffer_position() as usize;
        let location = NodeLocation::Element(ElementLocation {
            start_tag: self.tag_location(event_start, tag_end),
            end_tag: None,
        });

        let parent = self.current_parent();
        Ok(self
            .tree
            .add_element(parent, full_name, attributes, Some(location)))
    }

    fn handle_end(&mut self, e: &BytesEnd<'_>, event_start: usize) -> Result<()> {
        let end_name = String::from_utf8_lossy(e.name().as_ref()).to_string();

        let (node, name) = self.stack.pop().ok_or_else(|| Error::UnexpectedEndTag {
            name: end_name.clone(),
            offset: event_start,
        })?;

        let end_tag = self.tag_location(event_start, self.reader.buffer_position() as usize);

        // Verify tag names match
        if name != end_name {
            return Err(Error::MismatchedEndTag {
                expected: name,
                found: end_name,
                line: end_tag.line,
            });
        }

        if let Some(NodeLocation::Element(location)) = self.tree.location(node).cloned() {
            self.tree.set_location(
                node,
                Some(NodeLocation::Element(ElementLocation {
                    end_tag: Some(end_tag),
                    ..location
                })),
            );
        }
        Ok(())
    }

    /// Text is kept exactly as written. Entities stay undecoded so that the
    /// text lines up byte for byte with its location.
    fn handle_text(&mut self, e: &BytesText<'_>, event_start: usize) {
        if e.is_empty() {
            return;
        }

        let text = String::from_utf8_lossy(e).to_string();
        let end_offset = self.reader.buffer_position() as usize;
        let location = self.plain_location(event_start, end_offset);
        let parent = self.current_parent();
        self.tree.add_text(parent, text, Some(location));
    }

    fn handle_cdata(&mut self, e: &BytesCData<'_>, event_start: usize) {
        let text = String::from_utf8_lossy(e).to_string();
        let end_offset = self.reader.buffer_position() as usize;
        // The content starts after the `<![CDATA[` marker
        let location = self.plain_location(event_start + CDATA_OPEN_LEN, end_offset);
        let parent = self.current_parent();
        self.tree.add_text(parent, text, Some(location));
    }

    fn handle_comment(&mut self, e: &BytesText<'_>, event_start: usize) {
        let text = String::from_utf8_lossy(e).to_string();
        let end_offset = self.reader.buffer_position() as usize;
        let location = self.plain_location(event_start, end_offset);
        let parent = self.current_parent();
        tracing::trace!(offset = event_start, "Recording comment node");
        self.tree.add_comment(parent, text, Some(location));
    }

    fn parse_attributes(&self, e: &BytesStart<'_>, tag_start: usize) -> Result<Vec<Attribute>> {
        let mut attributes = Vec::new();

        for attr_result in e.attributes() {
            let attr = attr_result?;

            let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
            let (_, name) = split_prefix(&key);

            let value = attr.unescape_value().map_err(|err| Error::Syntax {
                message: format!("Invalid attribute value: {}", err),
                position: Some(tag_start as u64),
            })?;

            attributes.push(Attribute {
                name,
                value: value.into_owned(),
            });
        }

        Ok(attributes)
    }

    fn plain_location(&self, start: usize, end: usize) -> NodeLocation {
        let (line, col) = self.line_index.position(start);
        NodeLocation::Plain(PlainLocation {
            line,
            col,
            start_offset: start,
            end_offset: end,
        })
    }

    fn tag_location(&self, start: usize, end: usize) -> TagLocation {
        let (line, col) = self.line_index.position(start);
        let (_, end_col) = self.line_index.position(end);
        TagLocation {
            line,
            col,
            end_col,
            start_offset: start,
            end_offset: end,
        }
    }
}
