//! Built-in sanitizers
//!
//! Every built-in keeps the byte length of its input, so spans found in the
//! sanitized text line up with the original.

use crate::error::FindError;
use crate::options::Sanitizer;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Named, length-preserving sanitizers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinSanitizer {
    /// Lowercase ASCII letters, leave everything else alone
    AsciiLowercase,
    /// Replace ASCII punctuation with spaces
    PunctuationToSpace,
    /// Replace each whitespace char with as many spaces as its UTF-8 width
    WhitespaceToSpace,
}

impl BuiltinSanitizer {
    /// All built-in sanitizers
    pub const ALL: [BuiltinSanitizer; 3] = [
        BuiltinSanitizer::AsciiLowercase,
        BuiltinSanitizer::PunctuationToSpace,
        BuiltinSanitizer::WhitespaceToSpace,
    ];

    /// The name used on the command line and in config files
    pub fn name(&self) -> &'static str {
        match self {
            BuiltinSanitizer::AsciiLowercase => "ascii-lowercase",
            BuiltinSanitizer::PunctuationToSpace => "punctuation-to-space",
            BuiltinSanitizer::WhitespaceToSpace => "whitespace-to-space",
        }
    }

    /// One-line description
    pub fn description(&self) -> &'static str {
        match self {
            BuiltinSanitizer::AsciiLowercase => "lowercase ASCII letters",
            BuiltinSanitizer::PunctuationToSpace => "treat ASCII punctuation as spaces",
            BuiltinSanitizer::WhitespaceToSpace => "treat tabs, newlines and other whitespace as spaces",
        }
    }

    /// Apply the sanitizer
    pub fn apply(&self, text: &str) -> String {
        match self {
            BuiltinSanitizer::AsciiLowercase => text.to_ascii_lowercase(),
            BuiltinSanitizer::PunctuationToSpace => text
                .chars()
                .map(|c| if c.is_ascii_punctuation() { ' ' } else { c })
                .collect(),
            BuiltinSanitizer::WhitespaceToSpace => {
                let mut out = String::with_capacity(text.len());
                for c in text.chars() {
                    if c.is_whitespace() {
                        out.extend(std::iter::repeat(' ').take(c.len_utf8()));
                    } else {
                        out.push(c);
                    }
                }
                out
            }
        }
    }

    /// Wrap into a [`Sanitizer`]
    pub fn into_sanitizer(self) -> Sanitizer {
        Arc::new(move |text: &str| self.apply(text))
    }
}

impl fmt::Display for BuiltinSanitizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BuiltinSanitizer {
    type Err = FindError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let normalized = name.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|s| s.name() == normalized)
            .ok_or_else(|| FindError::UnknownSanitizer {
                name: name.to_string(),
            })
    }
}
