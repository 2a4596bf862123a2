//! Where the text content of a node begins.

use crate::error::{InlineDocumentError, Result};
use crate::tree::LocatedTree;
use inline_markup::NodeLocation;
use inline_source_map::LocationOffset;

/// The offset at which the text content of `node` begins.
///
/// Text content usually starts at the node's first child (the text right
/// after an opening tag), so the first child carrying a location is
/// preferred and the node's own location is the fallback.
///
/// # Errors
///
/// Returns [`InlineDocumentError::MissingLocation`] if neither the node nor
/// any of its children carry location metadata.
pub fn get_location_offset_of_start_of_text_content<T: LocatedTree>(
    tree: &T,
    node: T::Node,
) -> Result<LocationOffset> {
    let best_location = tree
        .children(node)
        .iter()
        .find_map(|child| tree.location(*child))
        .or_else(|| tree.location(node));

    let Some(location) = best_location else {
        tracing::debug!(node = ?node, "Node and children carry no location");
        return Err(InlineDocumentError::MissingLocation {
            node: format!("{:?}", node),
        });
    };

    let offset = text_start_offset(location);
    tracing::trace!(
        node = ?node,
        line = offset.line,
        col = offset.col,
        "Located start of text content"
    );
    Ok(offset)
}

/// Offset of the text that starts at a location.
///
/// Plain locations point at the text itself. For elements the text starts
/// after the opening tag.
pub fn text_start_offset(location: &NodeLocation) -> LocationOffset {
    match location {
        NodeLocation::Plain(plain) => LocationOffset::new(plain.line.saturating_sub(1), plain.col),
        NodeLocation::Element(element) => LocationOffset::new(
            element.start_tag.line.saturating_sub(1),
            element.start_tag.end_col,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inline_markup::{ElementLocation, MarkupTree, PlainLocation, TagLocation, parse};
    use pretty_assertions::assert_eq;

    fn plain(line: usize, col: usize) -> NodeLocation {
        NodeLocation::Plain(PlainLocation {
            line,
            col,
            start_offset: 0,
            end_offset: 0,
        })
    }

    fn element(line: usize, end_col: usize) -> NodeLocation {
        NodeLocation::Element(ElementLocation {
            start_tag: TagLocation {
                line,
                col: 0,
                end_col,
                start_offset: 0,
                end_offset: 0,
            },
            end_tag: None,
        })
    }

    #[test]
    fn test_first_child_plain_location() {
        let mut tree = MarkupTree::new();
        let root = tree.root();
        let script = tree.add_element(root, "script", vec![], Some(element(5, 8)));
        tree.add_text(script, "var x;", Some(plain(5, 2)));

        assert_eq!(
            get_location_offset_of_start_of_text_content(&tree, script).unwrap(),
            LocationOffset::new(4, 2)
        );
    }

    #[test]
    fn test_first_located_child_is_used() {
        let mut tree = MarkupTree::new();
        let root = tree.root();
        let style = tree.add_element(root, "style", vec![], None);
        tree.add_text(style, "", None);
        tree.add_text(style, ".a {}", Some(plain(3, 9)));
        tree.add_text(style, ".b {}", Some(plain(4, 0)));

        assert_eq!(
            get_location_offset_of_start_of_text_content(&tree, style).unwrap(),
            LocationOffset::new(2, 9)
        );
    }

    #[test]
    fn test_element_location_without_located_children() {
        let mut tree = MarkupTree::new();
        let root = tree.root();
        let script = tree.add_element(root, "script", vec![], Some(element(5, 20)));

        assert_eq!(
            get_location_offset_of_start_of_text_content(&tree, script).unwrap(),
            LocationOffset::new(4, 20)
        );
    }

    #[test]
    fn test_missing_location_is_an_error() {
        let mut tree = MarkupTree::new();
        let root = tree.root();
        let script = tree.add_element(root, "script", vec![], None);
        tree.add_text(script, "var x;", None);

        let err = get_location_offset_of_start_of_text_content(&tree, script).unwrap_err();
        assert!(
            matches!(err, InlineDocumentError::MissingLocation { ref node } if node == "NodeId(1)"),
            "Expected MissingLocation, got: {:?}",
            err
        );
    }

    #[test]
    fn test_node_of_another_tree_is_an_error() {
        let page = parse("<html><body><script>x</script></body></html>").unwrap();
        let script = page.find_elements("script")[0];

        let fragment = parse("<p/>").unwrap();
        let result = get_location_offset_of_start_of_text_content(&fragment, script);
        assert!(matches!(
            result,
            Err(InlineDocumentError::MissingLocation { .. })
        ));
    }

    #[test]
    fn test_parsed_script_on_later_line() {
        let tree = parse("<html>\n  <script>\n    var x;\n  </script>\n</html>").unwrap();
        let script = tree.find_elements("script")[0];

        // The text starts right after `<script>`, on the tag's line
        assert_eq!(
            get_location_offset_of_start_of_text_content(&tree, script).unwrap(),
            LocationOffset::new(1, 10)
        );
    }

    #[test]
    fn test_multi_line_start_tag_pairs_first_line_with_last_column() {
        // `<script` opens on line 1; the tag ends just past `>`, column 16 of line 2
        let tree = parse("<script\n  type=\"module\"></script>").unwrap();
        let script = tree.find_elements("script")[0];

        assert_eq!(
            get_location_offset_of_start_of_text_content(&tree, script).unwrap(),
            LocationOffset::new(0, 16)
        );
    }

    #[test]
    fn test_parsed_empty_element_uses_its_start_tag() {
        let tree = parse("<style></style>").unwrap();
        let style = tree.find_elements("style")[0];
        assert_eq!(
            get_location_offset_of_start_of_text_content(&tree, style).unwrap(),
            LocationOffset::new(0, 7)
        );
    }
}
