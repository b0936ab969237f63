//! Per-line views over a document.

use std::ops::Range;
use std::sync::Arc;

use super::doc::Doc;
use super::position::Index;

/// One line of a [`Doc`], terminator excluded.
///
/// Derived entirely from [`Doc::line_range`] and [`Doc::index_at`]; holding a
/// `Line` keeps its snapshot alive.
#[derive(Debug, Clone)]
pub struct Line {
    doc: Arc<Doc>,
    number: usize,
    range: Range<usize>,
}

impl Line {
    pub(crate) fn new(doc: Arc<Doc>, number: usize, range: Range<usize>) -> Self {
        Self { doc, number, range }
    }

    /// 1-based line number
    pub fn number(&self) -> usize {
        self.number
    }

    /// `[start, end)` character offsets
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// Position of the first character (column 1)
    pub fn start(&self) -> Index {
        Index::new(Arc::clone(&self.doc), self.range.start, self.number, 1)
    }

    /// Position just past the last character
    pub fn end(&self) -> Index {
        Index::new(
            Arc::clone(&self.doc),
            self.range.end,
            self.number,
            self.range.len() + 1,
        )
    }

    pub fn text(&self) -> &str {
        self.doc
            .slice(self.range.start, self.range.end)
            .unwrap_or_default()
    }

    pub fn doc(&self) -> &Arc<Doc> {
        &self.doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_view() {
        let doc = Arc::new(Doc::standalone("let x\n\nlet yy"));
        let lines: Vec<Line> = doc.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].text(), "let x");
        assert!(lines[1].is_empty());
        assert_eq!(lines[2].text(), "let yy");
        assert_eq!(lines[2].number(), 3);
        assert_eq!(lines[2].range(), 7..13);
    }

    #[test]
    fn test_line_bounds_match_index_at() {
        let doc = Arc::new(Doc::standalone("ab\ncde\n"));
        for line in doc.lines() {
            assert_eq!(line.start(), doc.index_at(line.range().start).unwrap());
            assert_eq!(line.end(), doc.index_at(line.range().end).unwrap());
        }
    }
}
