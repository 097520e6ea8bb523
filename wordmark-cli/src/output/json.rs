//! JSON output formatter

use super::{Document, OutputFormatter};
use crate::render::Part;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs documents as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    documents: Vec<DocumentData>,
}

/// Data structure for one document in JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentData {
    /// Where the text came from
    pub source: String,
    /// Number of highlighted chunks
    pub match_count: usize,
    /// All chunks, in order
    pub chunks: Vec<ChunkData>,
}

/// Data structure for one chunk in JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct ChunkData {
    /// The chunk text
    pub text: String,
    /// Byte offset where the chunk starts
    pub start: usize,
    /// Byte offset where the chunk ends
    pub end: usize,
    /// Whether the chunk matched
    pub highlight: bool,
    /// Ordinal among highlighted chunks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight_index: Option<usize>,
    /// Whether this is the active highlight
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub active: bool,
    /// Class names
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub class_name: String,
    /// URLs found in the chunk
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub links: Vec<String>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            documents: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_document(&mut self, document: &Document<'_>) -> Result<()> {
        let chunks = document
            .segments
            .iter()
            .map(|segment| ChunkData {
                text: segment.text.to_string(),
                start: segment.chunk.start,
                end: segment.chunk.end,
                highlight: segment.chunk.highlight,
                highlight_index: segment.highlight_index,
                active: segment.active,
                class_name: segment.class_name.clone(),
                links: segment
                    .parts
                    .iter()
                    .filter_map(|part| match part {
                        Part::Link(link) => Some(link.to_string()),
                        Part::Text(_) => None,
                    })
                    .collect(),
            })
            .collect();

        self.documents.push(DocumentData {
            source: document.source.clone(),
            match_count: document.match_count(),
            chunks,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.documents)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
