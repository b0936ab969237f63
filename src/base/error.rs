//! Out-of-range errors for document and position lookups.

use thiserror::Error;

/// Errors raised when a lookup falls outside a [`Doc`](super::Doc).
///
/// These are programming errors in the caller. Lookups never clamp, since a
/// clamped position would silently point diagnostics at the wrong place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocError {
    /// A single offset lies outside the document.
    #[error("offset {offset} is out of range for document of length {len}")]
    OffsetOutOfRange { offset: usize, len: usize },

    /// A `[start, end)` range is inverted or exceeds the document.
    #[error("range {start}..{end} is out of range for document of length {len}")]
    RangeOutOfRange { start: usize, end: usize, len: usize },

    /// A 1-based line number outside `[1, line_count]`.
    #[error("line {line} is out of range for document with {line_count} lines")]
    LineOutOfRange { line: usize, line_count: usize },

    /// A 1-based column past the end of its line.
    #[error("column {column} is out of range for line {line} of width {width}")]
    ColumnOutOfRange {
        line: usize,
        column: usize,
        width: usize,
    },
}
