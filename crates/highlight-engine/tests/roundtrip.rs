//! Property tests for the highlight/clear round-trip law.
//!
//! For any document text and any keyword list, highlighting followed by a
//! clear must restore the document text byte-for-byte, and the reported
//! match count must equal the naive occurrence count.

use highlight_engine::{HighlightEngine, Page, TextRun, ViewerDocument};
use proptest::prelude::*;

fn run_texts() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[ -~]{0,40}", 1..6)
}

fn keywords() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zA-Z+.()*]{1,6}", 1..4)
}

/// Non-overlapping case-insensitive occurrence count, scanning exactly the
/// way the engine does (left to right, advance past each match).
fn naive_count(haystack: &str, needle: &str) -> usize {
    let haystack = haystack.to_lowercase();
    let needle = needle.to_lowercase();
    let mut count = 0;
    let mut from = 0;
    while let Some(pos) = haystack[from..].find(&needle) {
        count += 1;
        from += pos + needle.len();
    }
    count
}

proptest! {
    #[test]
    fn highlight_then_clear_restores_text(texts in run_texts(), kws in keywords()) {
        let mut doc =
            ViewerDocument::with_text_layer(texts.iter().map(TextRun::new).collect());
        let before = doc.text_content();

        let mut engine = HighlightEngine::new();
        // InvalidInput (all-whitespace keywords) is fine here; the law only
        // requires that clear gets back to the original text.
        let _ = engine.highlight(&mut doc, &kws);
        engine.clear(&mut doc);

        prop_assert_eq!(doc.text_content(), before);
    }

    #[test]
    fn repeated_highlight_is_idempotent(texts in run_texts(), kws in keywords()) {
        let mut doc =
            ViewerDocument::with_text_layer(texts.iter().map(TextRun::new).collect());
        let before = doc.text_content();

        let mut engine = HighlightEngine::new();
        let first = engine.highlight(&mut doc, &kws);
        let text_after_first = doc.text_content();
        let second = engine.highlight(&mut doc, &kws);

        prop_assert_eq!(first.is_ok(), second.is_ok());
        if let (Ok(a), Ok(b)) = (first, second) {
            prop_assert_eq!(a, b);
        }
        prop_assert_eq!(&doc.text_content(), &text_after_first);
        prop_assert_eq!(&text_after_first, &before);
    }

    #[test]
    fn single_keyword_count_matches_naive_scan(texts in run_texts(), kw in "[a-zA-Z]{1,5}") {
        let mut doc =
            ViewerDocument::with_text_layer(texts.iter().map(TextRun::new).collect());
        let expected: usize = texts.iter().map(|t| naive_count(t, &kw)).sum();

        let mut engine = HighlightEngine::new();
        let count = engine.highlight(&mut doc, &[kw]).unwrap();

        prop_assert_eq!(count, expected);
    }

    #[test]
    fn structured_pages_round_trip(texts in run_texts(), kws in keywords()) {
        let pages: Vec<Page> = texts
            .chunks(2)
            .map(|chunk| Page::new(chunk.iter().map(TextRun::new).collect()))
            .collect();
        let mut doc = ViewerDocument::with_structured_pages(pages);
        let before = doc.text_content();

        let mut engine = HighlightEngine::new();
        let _ = engine.highlight(&mut doc, &kws);
        engine.clear(&mut doc);

        prop_assert_eq!(doc.text_content(), before);
    }
}
