//! Search terms: plain strings or pre-compiled patterns

use crate::error::{FindError, Result};
use crate::options::Sanitizer;
use regex::{Regex, RegexBuilder};
use std::borrow::Cow;

/// A single thing to look for in the text
#[derive(Debug, Clone)]
pub enum SearchTerm {
    /// A string compiled at match time with the caller's options
    ///
    /// Without auto-escape the string is read as a regular expression.
    Literal(String),
    /// A compiled pattern
    ///
    /// Case-insensitive matching rebuilds it with case folding; with
    /// `case_sensitive` it is used as compiled.
    Pattern(Regex),
}

impl SearchTerm {
    /// Create a literal term
    pub fn literal(text: impl Into<String>) -> Self {
        SearchTerm::Literal(text.into())
    }

    /// Compile `source` into a pattern term
    pub fn pattern(source: &str) -> Result<Self> {
        Regex::new(source)
            .map(SearchTerm::Pattern)
            .map_err(|source_err| FindError::InvalidPattern {
                term: source.to_string(),
                source: source_err,
            })
    }

    /// Build literal terms from a list of strings
    pub fn literals<I, S>(words: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        words.into_iter().map(Self::literal).collect()
    }

    /// The term as written: the literal text or the pattern source
    pub fn as_str(&self) -> &str {
        match self {
            SearchTerm::Literal(text) => text,
            SearchTerm::Pattern(regex) => regex.as_str(),
        }
    }

    /// Whether the term would match nothing and should be skipped
    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }

    /// Resolve the term into a matcher
    ///
    /// Both kinds follow `case_sensitive`. Literals are also sanitized and
    /// optionally escaped. Returns `None` when sanitizing leaves an empty
    /// literal.
    pub fn compile(
        &self,
        case_sensitive: bool,
        auto_escape: bool,
        sanitize: Option<&Sanitizer>,
    ) -> Result<Option<Cow<'_, Regex>>> {
        let text = match self {
            SearchTerm::Pattern(regex) if case_sensitive => {
                return Ok(Some(Cow::Borrowed(regex)));
            }
            SearchTerm::Pattern(regex) => {
                return RegexBuilder::new(regex.as_str())
                    .case_insensitive(true)
                    .build()
                    .map(|folded| Some(Cow::Owned(folded)))
                    .map_err(|source_err| FindError::InvalidPattern {
                        term: regex.as_str().to_string(),
                        source: source_err,
                    });
            }
            SearchTerm::Literal(text) => text,
        };

        let sanitized = match sanitize {
            Some(sanitize) => Cow::Owned(sanitize(text)),
            None => Cow::Borrowed(text.as_str()),
        };
        if sanitized.is_empty() {
            return Ok(None);
        }

        let source = if auto_escape {
            Cow::Owned(regex::escape(&sanitized))
        } else {
            sanitized
        };

        RegexBuilder::new(&source)
            .case_insensitive(!case_sensitive)
            .build()
            .map(|regex| Some(Cow::Owned(regex)))
            .map_err(|source_err| FindError::InvalidPattern {
                term: text.clone(),
                source: source_err,
            })
    }
}

impl From<&str> for SearchTerm {
    fn from(text: &str) -> Self {
        SearchTerm::Literal(text.to_string())
    }
}

impl From<String> for SearchTerm {
    fn from(text: String) -> Self {
        SearchTerm::Literal(text)
    }
}

impl From<&String> for SearchTerm {
    fn from(text: &String) -> Self {
        SearchTerm::Literal(text.clone())
    }
}

impl From<Regex> for SearchTerm {
    fn from(regex: Regex) -> Self {
        SearchTerm::Pattern(regex)
    }
}
