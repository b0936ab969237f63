//! Position tracking inside document snapshots.
//!
//! An [`Index`] names one location in one [`Doc`]. Indices are only handed out
//! by the document itself, so the offset, line and column always agree.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use super::doc::Doc;

/// A location in a document (offset 0-based, line and column 1-based)
#[derive(Clone)]
pub struct Index {
    doc: Arc<Doc>,
    offset: usize,
    line: usize,
    column: usize,
}

impl Index {
    pub(crate) fn new(doc: Arc<Doc>, offset: usize, line: usize, column: usize) -> Self {
        Self {
            doc,
            offset,
            line,
            column,
        }
    }

    /// The document snapshot this position belongs to
    pub fn doc(&self) -> &Arc<Doc> {
        &self.doc
    }

    /// Character offset from the start of the document (0 is the first char)
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// `(line, column)` pair, handy for assertions and LSP conversion
    pub fn line_col(&self) -> (usize, usize) {
        (self.line, self.column)
    }

    /// Check whether both positions point into the same snapshot
    pub fn same_doc(&self, other: &Index) -> bool {
        self.doc.revision() == other.doc.revision()
    }

    /// Text of the line this position sits on (without the terminator)
    pub fn line_text(&self) -> &str {
        // The line number was derived from this very document.
        self.doc
            .line_range(self.line)
            .ok()
            .and_then(|range| self.doc.slice(range.start, range.end).ok())
            .unwrap_or_default()
    }
}

impl PartialEq for Index {
    fn eq(&self, other: &Self) -> bool {
        self.offset == other.offset && self.same_doc(other)
    }
}

impl Eq for Index {}

impl Hash for Index {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.doc.revision().hash(state);
        self.offset.hash(state);
    }
}

impl PartialOrd for Index {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Ordered by offset; ties across different snapshots break on the
/// document revision so the order stays total and agrees with `Eq`.
impl Ord for Index {
    fn cmp(&self, other: &Self) -> Ordering {
        self.offset
            .cmp(&other.offset)
            .then_with(|| self.doc.revision().cmp(&other.doc.revision()))
    }
}

impl fmt::Debug for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Index")
            .field("doc", &self.doc.revision())
            .field("offset", &self.offset)
            .field("line", &self.line)
            .field("column", &self.column)
            .finish()
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.doc.source().name(),
            self.line,
            self.column
        )
    }
}
