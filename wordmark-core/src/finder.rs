//! The chunk finder: match, merge, fill

use crate::chunk::{align_span, combine_chunks, fill_in_chunks, Chunk};
use crate::error::Result;
use crate::matcher::{DefaultMatcher, MatchRequest, MatchStrategy};
use crate::options::FindOptions;
use crate::term::SearchTerm;
use std::borrow::Cow;

/// Split `text` into highlighted and unhighlighted chunks
///
/// Chunks are returned in order, cover the whole text, and never put two
/// chunks with the same `highlight` flag next to each other. Empty text yields
/// no chunks; text without matches yields one unhighlighted chunk.
///
/// # Errors
///
/// Fails with [`FindError::InvalidPattern`](crate::FindError::InvalidPattern)
/// on the first term that does not compile, or with whatever error a custom
/// strategy returns.
pub fn find_chunks(
    search_words: &[SearchTerm],
    text: &str,
    options: &FindOptions,
) -> Result<Vec<Chunk>> {
    let terms: Cow<'_, [SearchTerm]> = if search_words.iter().any(SearchTerm::is_empty) {
        Cow::Owned(
            search_words
                .iter()
                .filter(|term| !term.is_empty())
                .cloned()
                .collect(),
        )
    } else {
        Cow::Borrowed(search_words)
    };

    let request = MatchRequest {
        terms: &terms,
        text,
        sanitize: options.sanitizer(),
        case_sensitive: options.case_sensitive(),
        auto_escape: options.auto_escape(),
    };

    let spans = match options.strategy() {
        Some(strategy) => {
            log::debug!("finding spans with '{}' strategy", strategy.name());
            strategy.find_spans(&request)?
        }
        None => DefaultMatcher.find_spans(&request)?,
    };
    let raw_count = spans.len();

    let spans = spans
        .into_iter()
        .filter_map(|span| align_span(span, text))
        .collect();
    let merged = combine_chunks(spans);
    let chunks = fill_in_chunks(&merged, text.len());

    log::debug!(
        "{} terms, {} spans, {} highlighted ranges, {} chunks over {} bytes",
        terms.len(),
        raw_count,
        merged.len(),
        chunks.len(),
        text.len()
    );

    Ok(chunks)
}

/// Reusable finder holding a set of options
#[derive(Debug, Clone, Default)]
pub struct ChunkFinder {
    options: FindOptions,
}

impl ChunkFinder {
    /// Create a finder with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a finder with the given options
    pub fn with_options(options: FindOptions) -> Self {
        Self { options }
    }

    /// The options in use
    pub fn options(&self) -> &FindOptions {
        &self.options
    }

    /// Find chunks of `text` for `search_words`
    pub fn find(&self, search_words: &[SearchTerm], text: &str) -> Result<Vec<Chunk>> {
        find_chunks(search_words, text, &self.options)
    }
}
