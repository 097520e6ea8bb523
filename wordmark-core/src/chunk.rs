//! Chunk and span types, plus the merge and fill steps of chunk finding

/// A raw half-open `[start, end)` interval produced by matching one search term
///
/// Offsets are UTF-8 byte offsets into the text being searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchSpan {
    /// Byte offset of the first matched byte
    pub start: usize,
    /// Byte offset one past the last matched byte
    pub end: usize,
}

impl MatchSpan {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the span in bytes
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the span covers no bytes
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

impl From<regex::Match<'_>> for MatchSpan {
    fn from(m: regex::Match<'_>) -> Self {
        Self::new(m.start(), m.end())
    }
}

/// A contiguous piece of the text, tagged as highlighted or not
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chunk {
    /// Byte offset where the chunk starts
    pub start: usize,
    /// Byte offset where the chunk ends (exclusive)
    pub end: usize,
    /// True when at least one match covered this range
    pub highlight: bool,
}

impl Chunk {
    /// Create a new chunk
    pub fn new(start: usize, end: usize, highlight: bool) -> Self {
        Self {
            start,
            end,
            highlight,
        }
    }

    /// Length of the chunk in bytes
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the chunk covers no bytes
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// The piece of `text` this chunk covers
    ///
    /// `text` must be the string the chunk was computed for.
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }
}

/// Sort spans by start and merge every overlapping or touching pair
///
/// Spans with equal starts keep their input order. Empty spans are dropped.
pub fn combine_chunks(mut spans: Vec<MatchSpan>) -> Vec<MatchSpan> {
    spans.retain(|span| !span.is_empty());
    spans.sort_by_key(|span| span.start);

    let mut merged: Vec<MatchSpan> = Vec::with_capacity(spans.len());
    for span in spans {
        match merged.last_mut() {
            Some(current) if span.start <= current.end => {
                current.end = current.end.max(span.end);
            }
            _ => merged.push(span),
        }
    }

    merged
}

/// Interleave highlighted spans with unhighlighted fillers covering `[0, total_len)`
///
/// `highlighted` must be sorted, disjoint and non-touching, as returned by
/// [`combine_chunks`]. Zero-length chunks are never emitted.
pub fn fill_in_chunks(highlighted: &[MatchSpan], total_len: usize) -> Vec<Chunk> {
    let mut chunks = Vec::with_capacity(highlighted.len() * 2 + 1);
    let mut append = |start: usize, end: usize, highlight: bool| {
        if end > start {
            chunks.push(Chunk::new(start, end, highlight));
        }
    };

    let mut last_end = 0;
    for span in highlighted {
        append(last_end, span.start, false);
        append(span.start, span.end, true);
        last_end = span.end;
    }
    append(last_end, total_len, false);

    chunks
}

/// Fit a span onto `text`: clamp it to the text length and widen it to `char` boundaries
///
/// Returns `None` when nothing of the span is left.
pub(crate) fn align_span(span: MatchSpan, text: &str) -> Option<MatchSpan> {
    let len = text.len();
    let mut start = span.start.min(len);
    let mut end = span.end.min(len);

    while start > 0 && !text.is_char_boundary(start) {
        start -= 1;
    }
    while end < len && !text.is_char_boundary(end) {
        end += 1;
    }

    (start < end).then_some(MatchSpan::new(start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(pairs: &[(usize, usize)]) -> Vec<MatchSpan> {
        pairs.iter().map(|&(s, e)| MatchSpan::new(s, e)).collect()
    }

    #[test]
    fn test_combine_merges_overlapping() {
        let merged = combine_chunks(spans(&[(0, 3), (1, 3)]));
        assert_eq!(merged, spans(&[(0, 3)]));
    }

    #[test]
    fn test_combine_merges_touching() {
        let merged = combine_chunks(spans(&[(4, 6), (0, 2), (2, 4)]));
        assert_eq!(merged, spans(&[(0, 6)]));
    }

    #[test]
    fn test_combine_keeps_gaps() {
        let merged = combine_chunks(spans(&[(5, 7), (0, 2)]));
        assert_eq!(merged, spans(&[(0, 2), (5, 7)]));
    }

    #[test]
    fn test_combine_contained_span() {
        let merged = combine_chunks(spans(&[(0, 10), (2, 4), (12, 13)]));
        assert_eq!(merged, spans(&[(0, 10), (12, 13)]));
    }

    #[test]
    fn test_combine_drops_empty_spans() {
        let merged = combine_chunks(spans(&[(3, 3), (1, 2), (5, 4)]));
        assert_eq!(merged, spans(&[(1, 2)]));
    }

    #[test]
    fn test_fill_in_with_gaps() {
        let chunks = fill_in_chunks(&spans(&[(2, 4), (6, 7)]), 10);
        assert_eq!(
            chunks,
            vec![
                Chunk::new(0, 2, false),
                Chunk::new(2, 4, true),
                Chunk::new(4, 6, false),
                Chunk::new(6, 7, true),
                Chunk::new(7, 10, false),
            ]
        );
    }

    #[test]
    fn test_fill_in_highlight_at_edges() {
        let chunks = fill_in_chunks(&spans(&[(0, 3), (5, 8)]), 8);
        assert_eq!(
            chunks,
            vec![
                Chunk::new(0, 3, true),
                Chunk::new(3, 5, false),
                Chunk::new(5, 8, true),
            ]
        );
    }

    #[test]
    fn test_fill_in_without_highlights() {
        assert_eq!(fill_in_chunks(&[], 5), vec![Chunk::new(0, 5, false)]);
        assert!(fill_in_chunks(&[], 0).is_empty());
    }

    #[test]
    fn test_chunk_slice() {
        let text = "the cat";
        let chunk = Chunk::new(4, 7, false);
        assert_eq!(chunk.slice(text), "cat");
        assert_eq!(chunk.len(), 3);
        assert!(!chunk.is_empty());
    }

    #[test]
    fn test_align_span_clamps_to_text() {
        assert_eq!(
            align_span(MatchSpan::new(2, 40), "hello"),
            Some(MatchSpan::new(2, 5))
        );
        assert_eq!(align_span(MatchSpan::new(9, 12), "hello"), None);
    }

    #[test]
    fn test_align_span_widens_to_char_boundaries() {
        // "é" is two bytes: 1..3
        let text = "aéb";
        assert_eq!(
            align_span(MatchSpan::new(2, 3), text),
            Some(MatchSpan::new(1, 3))
        );
        assert_eq!(
            align_span(MatchSpan::new(0, 2), text),
            Some(MatchSpan::new(0, 3))
        );
    }
}
