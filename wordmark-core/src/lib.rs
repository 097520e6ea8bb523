//! Find search term matches and split text into highlighted chunks
//!
//! Given a text and a list of search terms, this crate locates every match,
//! merges overlapping matches from different terms, and fills the gaps so the
//! text is partitioned into an ordered list of [`Chunk`]s. Each chunk is either
//! highlighted (covered by at least one match) or plain. Rendering the chunks is
//! left to the caller.
//!
//! # Pipeline
//!
//! 1. **Match**: every non-empty term is compiled (case folding, optional
//!    escaping, optional sanitizing) and scanned over the text. A custom
//!    [`MatchStrategy`] can replace this step.
//! 2. **Combine**: spans are sorted by start and merged when they overlap or
//!    touch ([`combine_chunks`]).
//! 3. **Fill**: plain chunks are inserted between highlighted ones
//!    ([`fill_in_chunks`]).
//!
//! All offsets are UTF-8 byte offsets on `char` boundaries of the input text.
//!
//! # Example
//!
//! ```rust
//! use wordmark_core::{find_chunks, Chunk, FindOptions, SearchTerm};
//!
//! let terms = SearchTerm::literals(["the", "he"]);
//! let chunks = find_chunks(&terms, "the cat", &FindOptions::default()).unwrap();
//!
//! assert_eq!(
//!     chunks,
//!     vec![Chunk::new(0, 3, true), Chunk::new(3, 7, false)]
//! );
//! ```

#![warn(missing_docs)]

pub mod chunk;
pub mod error;
pub mod finder;
pub mod matcher;
pub mod options;
pub mod sanitize;
pub mod term;

// Re-export key types
pub use chunk::{combine_chunks, fill_in_chunks, Chunk, MatchSpan};
pub use error::{FindError, Result};
pub use finder::{find_chunks, ChunkFinder};
pub use matcher::{DefaultMatcher, MatchRequest, MatchStrategy};
pub use options::{FindOptions, FindOptionsBuilder, Sanitizer};
pub use sanitize::BuiltinSanitizer;
pub use term::SearchTerm;
