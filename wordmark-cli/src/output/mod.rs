//! Output formatting module

use crate::render::Segment;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text with highlights wrapped in markers
    Text,
    /// JSON array of documents with their chunks
    Json,
    /// Markdown with bold highlights
    Markdown,
}

impl OutputFormat {
    /// All formats
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Text, OutputFormat::Json, OutputFormat::Markdown];

    /// Name as accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// One-line description
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "original text with highlights wrapped in markers",
            OutputFormat::Json => "chunk records with offsets, classes and links",
            OutputFormat::Markdown => "bold highlights, one section per input",
        }
    }
}

/// One highlighted input
#[derive(Debug, Clone)]
pub struct Document<'a> {
    /// Where the text came from (file path or "<stdin>")
    pub source: String,
    /// Rendered segments covering the whole text
    pub segments: Vec<Segment<'a>>,
}

impl Document<'_> {
    /// Number of highlighted segments
    pub fn match_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|segment| segment.chunk.highlight)
            .count()
    }
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output one document
    fn format_document(&mut self, document: &Document<'_>) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::{Markers, TextFormatter};
