//! Plain text output formatter

use super::{Document, OutputFormatter};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Strings placed around highlighted text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Markers {
    /// Before a highlight
    pub open: String,
    /// After a highlight
    pub close: String,
    /// Before the active highlight
    pub active_open: String,
    /// After the active highlight
    pub active_close: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            open: "[".to_string(),
            close: "]".to_string(),
            active_open: "[*".to_string(),
            active_close: "*]".to_string(),
        }
    }
}

impl Markers {
    /// ANSI escapes: bold yellow highlights, black on yellow for the active one
    pub fn ansi() -> Self {
        Self {
            open: "\x1b[1;33m".to_string(),
            close: "\x1b[0m".to_string(),
            active_open: "\x1b[1;30;43m".to_string(),
            active_close: "\x1b[0m".to_string(),
        }
    }
}

/// Plain text formatter - writes the text back with highlights marked
pub struct TextFormatter<W: Write> {
    writer: W,
    markers: Markers,
    show_source: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, markers: Markers) -> Self {
        Self {
            writer,
            markers,
            show_source: false,
        }
    }

    /// Print a `==> source <==` header before each document
    pub fn with_source_headers(mut self, show: bool) -> Self {
        self.show_source = show;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_document(&mut self, document: &Document<'_>) -> Result<()> {
        if self.show_source {
            writeln!(self.writer, "==> {} <==", document.source)?;
        }

        let mut ends_with_newline = true;
        for segment in &document.segments {
            let (open, close) = match (segment.chunk.highlight, segment.active) {
                (false, _) => ("", ""),
                (true, false) => (self.markers.open.as_str(), self.markers.close.as_str()),
                (true, true) => (
                    self.markers.active_open.as_str(),
                    self.markers.active_close.as_str(),
                ),
            };
            write!(self.writer, "{open}{}{close}", segment.text)?;
            ends_with_newline = segment.text.ends_with('\n') && close.is_empty();
        }

        if !ends_with_newline {
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
