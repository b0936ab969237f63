#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use mono::base::normalize_newlines;
use mono::{Doc, Source};
use proptest::prelude::*;
use rstest::rstest;

fn doc(raw: &str) -> Arc<Doc> {
    Arc::new(Doc::standalone(raw))
}

/// Text made of a few letters and every terminator style
fn source_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            Just("a"),
            Just("é"),
            Just(" "),
            Just("\n"),
            Just("\r"),
            Just("\r\n"),
        ],
        0..64,
    )
    .prop_map(|pieces| pieces.concat())
}

#[rstest]
#[case("", 1)]
#[case("x", 1)]
#[case("\n", 2)]
#[case("a\r\nb\r\n", 3)]
#[case("\r\r\n\n", 4)]
fn test_line_count(#[case] raw: &str, #[case] expected: usize) {
    assert_eq!(doc(raw).line_count(), expected);
}

#[test]
fn test_positions_from_string_source() {
    let mut source = Source::string("let a\r\nlet b");
    let doc = source.latest_doc().unwrap();

    let index = doc.index_at(10).unwrap();
    assert_eq!(index.line_col(), (2, 5));
    assert_eq!(index.to_string(), "<string source>:2:5");
    assert_eq!(index.line_text(), "let b");
    assert_eq!(doc.line(2).unwrap().start().offset(), 6);
}

proptest! {
    #[test]
    fn normalization_is_idempotent(raw in source_text()) {
        let once = normalize_newlines(&raw).into_owned();
        let twice = normalize_newlines(&once).into_owned();
        prop_assert_eq!(&once, &twice);
        prop_assert!(!once.contains('\r'));
    }

    #[test]
    fn line_count_is_terminators_plus_one(raw in source_text()) {
        let terminators = raw.replace("\r\n", "\n").matches(['\r', '\n']).count();
        prop_assert_eq!(doc(&raw).line_count(), terminators + 1);
    }

    #[test]
    fn offsets_round_trip(raw in source_text()) {
        let doc = doc(&raw);
        for offset in 0..=doc.len() {
            let index = doc.index_at(offset).unwrap();
            let back = doc.index_of(index.line(), index.column()).unwrap();
            prop_assert_eq!(back.offset(), offset);
            let line_start = doc.line_range(index.line()).unwrap().start;
            prop_assert_eq!(line_start + index.column() - 1, offset);
        }
    }

    #[test]
    fn order_follows_offsets(raw in source_text()) {
        let doc = doc(&raw);
        for offset in 1..=doc.len() {
            let before = doc.index_at(offset - 1).unwrap();
            let after = doc.index_at(offset).unwrap();
            prop_assert!(before < after);
            prop_assert!(before.line_col() < after.line_col());
        }
    }
}
