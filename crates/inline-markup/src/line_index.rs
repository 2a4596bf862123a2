//! Byte offset to line/column lookup for parser locations.

/// Start offsets of every line of the source being parsed.
pub(crate) struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub(crate) fn new(source: &str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(newline, _)| newline + 1))
            .collect();
        LineIndex { line_starts }
    }

    /// The 1-indexed line and 0-indexed byte column of `offset`, the shape
    /// [`PlainLocation`](crate::PlainLocation) and
    /// [`TagLocation`](crate::TagLocation) store.
    ///
    /// A newline sits on the line it ends.
    pub(crate) fn position(&self, offset: usize) -> (usize, usize) {
        let line = self.line_starts.partition_point(|start| *start <= offset);
        let line_start = self.line_starts[line - 1];
        (line, offset - line_start)
    }
}
