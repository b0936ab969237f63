//! Immutable document snapshots.
//!
//! A [`Doc`] owns newline-normalized text together with a line table, so
//! offset to line/column conversion is a binary search. Offsets count
//! characters (Unicode scalar values), not bytes.

use std::borrow::Cow;
use std::ops::Range;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use super::error::DocError;
use super::line::Line;
use super::position::Index;
use super::source_info::SourceInfo;

static NEXT_REVISION: AtomicU64 = AtomicU64::new(1);

/// Collapse `\r\n` and lone `\r` into `\n`.
///
/// Borrows the input when it contains no carriage return, which makes the
/// operation idempotent at zero cost.
pub fn normalize_newlines(raw: &str) -> Cow<'_, str> {
    if !raw.contains('\r') {
        return Cow::Borrowed(raw);
    }

    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            out.push('\n');
        } else {
            out.push(ch);
        }
    }
    Cow::Owned(out)
}

/// An immutable snapshot of source text.
///
/// Created by a [`Source`](crate::source::Source) whenever its content changed;
/// older snapshots stay valid for as long as something holds them.
#[derive(Debug)]
pub struct Doc {
    text: String,
    /// Byte offset of every char plus a trailing `text.len()`.
    /// `None` for pure ASCII text, where char and byte offsets coincide.
    char_bytes: Option<Box<[usize]>>,
    len: usize,
    /// Start offset of each line. Equivalent to the newline table
    /// `[-1, nl_1, .., nl_k]` shifted by one; the final bound is `len`.
    line_starts: Vec<usize>,
    revision: u64,
    created_at: Instant,
    source: Arc<SourceInfo>,
}

impl Doc {
    /// Build a snapshot from raw text owned by `source`
    pub fn new(raw: &str, source: Arc<SourceInfo>) -> Self {
        let text = normalize_newlines(raw).into_owned();

        let mut char_bytes = (!text.is_ascii()).then(|| Vec::with_capacity(text.len() + 1));
        let mut line_starts = vec![0];
        let mut len = 0;
        for (byte, ch) in text.char_indices() {
            if let Some(table) = char_bytes.as_mut() {
                table.push(byte);
            }
            len += 1;
            if ch == '\n' {
                line_starts.push(len);
            }
        }
        if let Some(table) = char_bytes.as_mut() {
            table.push(text.len());
        }

        Self {
            text,
            char_bytes: char_bytes.map(Vec::into_boxed_slice),
            len,
            line_starts,
            revision: NEXT_REVISION.fetch_add(1, Ordering::Relaxed),
            created_at: Instant::now(),
            source,
        }
    }

    /// Build a snapshot that belongs to no particular source
    pub fn standalone(raw: &str) -> Self {
        Self::new(raw, Arc::new(SourceInfo::placeholder()))
    }

    /// Number of characters in the normalized text
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The normalized text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Strictly increasing across every snapshot created in this process
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Identity of the source that produced this snapshot
    pub fn source(&self) -> &Arc<SourceInfo> {
        &self.source
    }

    /// Number of lines; an empty document has one empty line
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    pub fn char_at(&self, offset: usize) -> Result<char, DocError> {
        let out_of_range = || DocError::OffsetOutOfRange {
            offset,
            len: self.len,
        };
        if offset >= self.len {
            return Err(out_of_range());
        }
        self.text[self.byte_of(offset)..]
            .chars()
            .next()
            .ok_or_else(out_of_range)
    }

    /// Text in the `[start, end)` character range
    pub fn slice(&self, start: usize, end: usize) -> Result<&str, DocError> {
        if start > end || end > self.len {
            return Err(DocError::RangeOutOfRange {
                start,
                end,
                len: self.len,
            });
        }
        Ok(&self.text[self.byte_of(start)..self.byte_of(end)])
    }

    /// Position of `offset`; `offset == len` names the end of the document
    pub fn index_at(self: &Arc<Self>, offset: usize) -> Result<Index, DocError> {
        if offset > self.len {
            return Err(DocError::OffsetOutOfRange {
                offset,
                len: self.len,
            });
        }
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let column = offset - self.line_starts[line - 1] + 1;
        Ok(Index::new(Arc::clone(self), offset, line, column))
    }

    /// Position of a 1-based `(line, column)` pair.
    ///
    /// The column right after the last character of a line (where its
    /// terminator sits) is accepted.
    pub fn index_of(self: &Arc<Self>, line: usize, column: usize) -> Result<Index, DocError> {
        let range = self.line_range(line)?;
        let width = range.len();
        if column == 0 || column > width + 1 {
            return Err(DocError::ColumnOutOfRange {
                line,
                column,
                width,
            });
        }
        Ok(Index::new(
            Arc::clone(self),
            range.start + column - 1,
            line,
            column,
        ))
    }

    /// `[start, end)` offsets of a 1-based line, terminator excluded
    pub fn line_range(&self, line: usize) -> Result<Range<usize>, DocError> {
        let line_count = self.line_count();
        if line == 0 || line > line_count {
            return Err(DocError::LineOutOfRange { line, line_count });
        }
        let start = self.line_starts[line - 1];
        let end = match self.line_starts.get(line) {
            Some(next) => next - 1,
            None => self.len,
        };
        Ok(start..end)
    }

    pub fn line(self: &Arc<Self>, line: usize) -> Result<Line, DocError> {
        let range = self.line_range(line)?;
        Ok(Line::new(Arc::clone(self), line, range))
    }

    /// Every line of the document, in order
    pub fn lines(self: &Arc<Self>) -> impl Iterator<Item = Line> + '_ {
        (1..=self.line_count()).filter_map(move |line| self.line(line).ok())
    }

    fn byte_of(&self, offset: usize) -> usize {
        match &self.char_bytes {
            Some(table) => table[offset],
            None => offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn doc(raw: &str) -> Arc<Doc> {
        Arc::new(Doc::standalone(raw))
    }

    #[test]
    fn test_mixed_line_endings() {
        let doc = doc("line1\r\nline2\rline3\nline4");

        assert_eq!(doc.as_str(), "line1\nline2\nline3\nline4");
        assert_eq!(doc.line_count(), 4);
        assert_eq!(doc.index_at(6).unwrap().line_col(), (2, 1));
    }

    #[test]
    fn test_empty_document() {
        let doc = doc("");

        assert_eq!(doc.len(), 0);
        assert!(doc.is_empty());
        assert_eq!(doc.line_count(), 1);
        assert_eq!(doc.index_at(0).unwrap().line_col(), (1, 1));
        assert_eq!(doc.line_range(1).unwrap(), 0..0);
    }

    #[rstest]
    #[case("a\r\n\r\nb", "a\n\nb")]
    #[case("\r\r", "\n\n")]
    #[case("\n\r", "\n\n")]
    #[case("no breaks", "no breaks")]
    fn test_normalize_newlines(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalize_newlines(raw), expected);
    }

    #[test]
    fn test_normalize_borrows_clean_input() {
        assert!(matches!(normalize_newlines("a\nb"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_trailing_newline_adds_empty_line() {
        let doc = doc("abc\n");

        assert_eq!(doc.line_count(), 2);
        assert_eq!(doc.line_range(1).unwrap(), 0..3);
        assert_eq!(doc.line_range(2).unwrap(), 4..4);
        // The terminator belongs to the line it ends
        assert_eq!(doc.index_at(3).unwrap().line_col(), (1, 4));
        assert_eq!(doc.index_at(4).unwrap().line_col(), (2, 1));
    }

    #[test]
    fn test_char_at_and_slice() {
        let doc = doc("ab\ncd");

        assert_eq!(doc.char_at(0).unwrap(), 'a');
        assert_eq!(doc.char_at(2).unwrap(), '\n');
        assert_eq!(doc.slice(1, 4).unwrap(), "b\nc");
        assert_eq!(doc.slice(5, 5).unwrap(), "");
    }

    #[test]
    fn test_out_of_range_access() {
        let doc = doc("abc");

        assert_eq!(
            doc.char_at(3),
            Err(DocError::OffsetOutOfRange { offset: 3, len: 3 })
        );
        assert_eq!(
            doc.slice(2, 1),
            Err(DocError::RangeOutOfRange {
                start: 2,
                end: 1,
                len: 3
            })
        );
        assert!(doc.slice(0, 4).is_err());
        assert!(doc.index_at(4).is_err());
        assert_eq!(
            doc.line_range(0),
            Err(DocError::LineOutOfRange {
                line: 0,
                line_count: 1
            })
        );
        assert!(doc.line_range(2).is_err());
    }

    #[test]
    fn test_non_ascii_offsets_count_chars() {
        let doc = doc("héllo\nwörld");

        assert_eq!(doc.len(), 11);
        assert_eq!(doc.char_at(1).unwrap(), 'é');
        assert_eq!(doc.char_at(7).unwrap(), 'ö');
        assert_eq!(doc.slice(6, 11).unwrap(), "wörld");
        assert_eq!(doc.index_at(8).unwrap().line_col(), (2, 3));
    }

    #[test]
    fn test_index_of_inverts_index_at() {
        let doc = doc("ab\ncde\n");

        assert_eq!(doc.index_of(2, 2).unwrap().offset(), 4);
        assert_eq!(doc.index_of(2, 4).unwrap().offset(), 6);
        assert_eq!(
            doc.index_of(2, 5),
            Err(DocError::ColumnOutOfRange {
                line: 2,
                column: 5,
                width: 3
            })
        );
        assert!(doc.index_of(2, 0).is_err());
        assert!(doc.index_of(4, 1).is_err());
    }

    #[test]
    fn test_revisions_increase() {
        let first = Doc::standalone("x");
        let second = Doc::standalone("x");

        assert!(second.revision() > first.revision());
        assert!(second.created_at() >= first.created_at());
    }
}
