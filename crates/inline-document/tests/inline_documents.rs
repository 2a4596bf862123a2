use inline_document::{
    CommentFilter, InlineDocumentConfig, InlineParsedDocument, LicenseFilter, LocationOffset,
    SourceLocation, SourceRange,
};
use inline_markup::{MarkupTree, NodeId, parse};
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

const PAGE: &str = r#"<html>
  <head>
    <!-- @license BSD -->
    <style>
      .a { color: red; }
    </style>
  </head>
  <body>
    <!--
      Counts clicks.
    -->
    <script>var clicks = 0;</script>
  </body>
</html>"#;

/// Where a word occurs in an inline document's own coordinates.
fn find_word(contents: &str, word: &str) -> Option<SourceLocation> {
    let offset = contents.find(word)?;
    let before = &contents[..offset];
    let line_start = before.rfind('\n').map_or(0, |newline| newline + 1);
    Some(SourceLocation::new(
        before.matches('\n').count(),
        offset - line_start,
    ))
}

fn inline_documents<F: CommentFilter>(
    tree: &MarkupTree,
    filter: &F,
) -> Vec<InlineParsedDocument<NodeId, Vec<SourceLocation>>> {
    let mut documents = Vec::new();
    for (tag, kind) in [("style", "css"), ("script", "javascript")] {
        for node in tree.find_elements(tag) {
            documents.push(InlineParsedDocument::from_markup(tree, node, kind, filter).unwrap());
        }
    }
    documents
}

fn summarize(documents: &[InlineParsedDocument<NodeId, Vec<SourceLocation>>]) -> String {
    documents
        .iter()
        .map(|doc| {
            format!(
                "{} {}:{} {}",
                doc.kind(),
                doc.location_offset().line,
                doc.location_offset().col,
                doc.attached_comment().unwrap_or("-")
            )
        })
        .collect::<Vec<_>>()
        .join("; ")
}

#[test]
fn test_page_inline_documents() {
    let tree = parse(PAGE).unwrap();
    let documents = inline_documents(&tree, &LicenseFilter::default());

    assert_snapshot!(summarize(&documents), @"css 3:11 -; javascript 11:12 Counts clicks.");
}

#[test]
fn test_scanner_locations_map_to_page() {
    let tree = parse(PAGE).unwrap();
    let documents = inline_documents(&tree, &LicenseFilter::default());
    let (style, script) = (&documents[0], &documents[1]);

    let rule = find_word(style.contents(), ".a").unwrap();
    assert_eq!(rule, SourceLocation::new(1, 6));
    assert_eq!(
        style.correct_location(Some(rule)),
        Some(SourceLocation::new(4, 6))
    );

    let clicks = find_word(script.contents(), "clicks").unwrap();
    assert_eq!(clicks, SourceLocation::new(0, 4));
    assert_eq!(
        script.correct_location(Some(clicks.clone())),
        Some(SourceLocation::new(11, 16))
    );

    let range = SourceRange::new(clicks, SourceLocation::new(0, 10));
    let corrected = script.correct_range(Some(range)).unwrap();
    assert_eq!(corrected.start, SourceLocation::new(11, 16));
    assert_eq!(corrected.end, SourceLocation::new(11, 22));
}

#[test]
fn test_scan_results_are_attached_once() {
    let tree = parse(PAGE).unwrap();
    let documents = inline_documents(&tree, &LicenseFilter::default());
    let script = &documents[1];

    let found: Vec<SourceLocation> = ["var", "clicks"]
        .iter()
        .filter_map(|word| find_word(script.contents(), word))
        .filter_map(|location| script.correct_location(Some(location)))
        .collect();
    script.set_scanned_document(found).unwrap();
    assert!(script.set_scanned_document(Vec::new()).is_err());

    assert_eq!(
        script.scanned_document().unwrap(),
        &vec![SourceLocation::new(11, 12), SourceLocation::new(11, 16)]
    );
}

#[test]
fn test_config_controls_attached_comments() {
    let config = InlineDocumentConfig::from_toml_str(
        r#"
[comments]
license-markers = ["(?i)counts"]
"#,
    )
    .unwrap();
    let filter = config.comment_filter().unwrap();

    let tree = parse(PAGE).unwrap();
    let documents = inline_documents(&tree, &filter);

    assert_eq!(documents[0].attached_comment(), Some("@license BSD"));
    assert_eq!(documents[1].attached_comment(), None);
}

#[test]
fn test_script_with_entities_keeps_outer_columns() {
    let page = "<script>x = \"&amp;\"; if (a && b) y</script>";
    let tree = parse(page).unwrap();
    let documents = inline_documents(&tree, &LicenseFilter::default());
    let script = &documents[0];

    assert_eq!(script.contents(), "x = \"&amp;\"; if (a && b) y");
    let y = find_word(script.contents(), " y").unwrap();
    let corrected = script.correct_location(Some(y)).unwrap();
    assert_eq!(corrected, SourceLocation::new(0, 32));
    assert_eq!(&page[corrected.column..corrected.column + 2], " y");
}

#[test]
fn test_nested_document_offsets_compose() {
    // A template inside the script, starting at column 14 of its first line
    let tree = parse(PAGE).unwrap();
    let documents = inline_documents(&tree, &LicenseFilter::default());
    let script = &documents[1];

    let nested = LocationOffset::new(0, 14);
    let combined = LocationOffset::compose(&nested, script.location_offset());
    assert_eq!(combined, LocationOffset::new(11, 26));
}
