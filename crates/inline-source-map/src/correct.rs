//! Translating fragment-local locations into container coordinates

use crate::types::{LocationOffset, SourceLocation, SourceRange};

/// Map a location found inside an embedded fragment to the location it has
/// in the containing document.
///
/// Either argument may be absent: with no location there is nothing to
/// translate, and with no offset the location is already expressed in the
/// container's coordinates. In both cases `source_location` is returned as is.
///
/// The column offset only applies to points on the fragment's first line.
/// Every later line of the fragment starts at a real line start of the
/// container. The offset's filename, when present, replaces the location's
/// file.
pub fn correct_source_location(
    source_location: Option<SourceLocation>,
    location_offset: Option<&LocationOffset>,
) -> Option<SourceLocation> {
    let (source_location, location_offset) = match (source_location, location_offset) {
        (Some(location), Some(offset)) => (location, offset),
        (location, _) => return location,
    };
    Some(apply_offset(&source_location, location_offset))
}

/// Map both ends of a fragment-local range into the containing document.
///
/// Follows the same pass-through rules as [`correct_source_location`].
pub fn correct_source_range(
    source_range: Option<SourceRange>,
    location_offset: Option<&LocationOffset>,
) -> Option<SourceRange> {
    let (source_range, location_offset) = match (source_range, location_offset) {
        (Some(range), Some(offset)) => (range, offset),
        (range, _) => return range,
    };
    Some(SourceRange {
        start: apply_offset(&source_range.start, location_offset),
        end: apply_offset(&source_range.end, location_offset),
        file: location_offset.filename.clone().or(source_range.file),
    })
}

fn apply_offset(location: &SourceLocation, offset: &LocationOffset) -> SourceLocation {
    let column_offset = if location.line == 0 { offset.col } else { 0 };
    SourceLocation {
        line: location.line + offset.line,
        column: location.column + column_offset,
        file: offset.filename.clone().or_else(|| location.file.clone()),
    }
}
