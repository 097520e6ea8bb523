//! Error types for chunk finding

use thiserror::Error;

/// Errors raised while finding chunks
#[derive(Error, Debug)]
pub enum FindError {
    /// A search term could not be compiled into a matcher
    #[error("invalid search pattern '{term}': {source}")]
    InvalidPattern {
        /// The offending search term, as given by the caller
        term: String,
        /// The underlying regex compilation error
        #[source]
        source: regex::Error,
    },

    /// A sanitizer name did not match any built-in sanitizer
    #[error("unknown sanitizer '{name}'")]
    UnknownSanitizer {
        /// The name that failed to parse
        name: String,
    },

    /// A custom match strategy failed
    #[error("match strategy failed: {0}")]
    Strategy(String),
}

/// Result type for chunk finding
pub type Result<T> = std::result::Result<T, FindError>;
