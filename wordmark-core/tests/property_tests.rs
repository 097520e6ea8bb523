//! Property tests for the chunk invariants

use proptest::prelude::*;
use wordmark_core::{combine_chunks, find_chunks, Chunk, FindOptions, MatchRequest, MatchSpan, SearchTerm};

fn text_strategy() -> impl Strategy<Value = String> {
    "[abcé .]{0,40}"
}

fn terms_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[abcé .]{0,3}", 0..5)
}

fn assert_partition(chunks: &[Chunk], text: &str) {
    if text.is_empty() {
        assert!(chunks.is_empty());
        return;
    }

    assert_eq!(chunks.first().map(|c| c.start), Some(0));
    assert_eq!(chunks.last().map(|c| c.end), Some(text.len()));
    for chunk in chunks {
        assert!(chunk.start < chunk.end, "empty chunk {chunk:?}");
        assert!(text.is_char_boundary(chunk.start));
        assert!(text.is_char_boundary(chunk.end));
    }
    for pair in chunks.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
        assert_ne!(pair[0].highlight, pair[1].highlight);
    }
}

proptest! {
    #[test]
    fn chunks_partition_text(
        text in text_strategy(),
        words in terms_strategy(),
        case_sensitive in any::<bool>(),
        auto_escape in any::<bool>(),
    ) {
        let options = FindOptions::builder()
            .case_sensitive(case_sensitive)
            .auto_escape(auto_escape)
            .build();
        let terms = SearchTerm::literals(words);
        let chunks = find_chunks(&terms, &text, &options).unwrap();

        assert_partition(&chunks, &text);

        let rebuilt: String = chunks.iter().map(|c| c.slice(&text)).collect();
        prop_assert_eq!(rebuilt, text.clone());

        let again = find_chunks(&terms, &text, &options).unwrap();
        prop_assert_eq!(chunks, again);
    }

    #[test]
    fn highlights_cover_exactly_the_literal_matches(
        text in text_strategy(),
        words in terms_strategy(),
    ) {
        let options = FindOptions::builder()
            .case_sensitive(true)
            .auto_escape(true)
            .build();
        let chunks = find_chunks(&SearchTerm::literals(words.clone()), &text, &options).unwrap();

        let mut expected = vec![false; text.len()];
        for word in words.iter().filter(|w| !w.is_empty()) {
            for (start, found) in text.match_indices(word.as_str()) {
                expected[start..start + found.len()].fill(true);
            }
        }

        let mut actual = vec![false; text.len()];
        for chunk in chunks.iter().filter(|c| c.highlight) {
            actual[chunk.start..chunk.end].fill(true);
        }
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn combine_output_is_sorted_and_disjoint(
        raw in prop::collection::vec((0usize..50, 0usize..10), 0..20),
    ) {
        let spans: Vec<MatchSpan> = raw
            .iter()
            .map(|&(start, len)| MatchSpan::new(start, start + len))
            .collect();
        let merged = combine_chunks(spans.clone());

        for pair in merged.windows(2) {
            prop_assert!(pair[0].end < pair[1].start);
        }
        for span in spans.iter().filter(|s| !s.is_empty()) {
            prop_assert!(merged
                .iter()
                .any(|m| m.start <= span.start && span.end <= m.end));
        }
    }

    #[test]
    fn arbitrary_strategy_spans_keep_invariants(
        text in text_strategy(),
        raw in prop::collection::vec((0usize..60, 0usize..60), 0..10),
    ) {
        let spans: Vec<MatchSpan> = raw
            .into_iter()
            .map(|(start, end)| MatchSpan::new(start, end))
            .collect();
        let options = FindOptions::builder()
            .find_chunks(move |_: &MatchRequest<'_>| -> wordmark_core::Result<Vec<MatchSpan>> {
                Ok(spans.clone())
            })
            .build();

        let chunks = find_chunks(&SearchTerm::literals(["a"]), &text, &options).unwrap();
        assert_partition(&chunks, &text);
    }
}
