//! Markdown output formatter

use super::{Document, OutputFormatter};
use crate::render::Part;
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - bold highlights, a section per document
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    match_count: usize,
    document_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            match_count: 0,
            document_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_document(&mut self, document: &Document<'_>) -> Result<()> {
        if self.document_count > 0 {
            writeln!(self.writer)?;
        }
        self.document_count += 1;
        self.match_count += document.match_count();

        writeln!(self.writer, "## {}", document.source)?;
        writeln!(self.writer)?;

        for segment in &document.segments {
            let emphasis = match (segment.chunk.highlight, segment.active) {
                (false, _) => "",
                (true, false) => "**",
                (true, true) => "***",
            };
            let body = render_parts(&segment.parts);

            // Delimiters must touch non-whitespace to open and close emphasis
            let inner = body.trim();
            if emphasis.is_empty() || inner.is_empty() {
                write!(self.writer, "{body}")?;
            } else {
                let lead = &body[..body.len() - body.trim_start().len()];
                let trail = &body[body.trim_end().len()..];
                write!(self.writer, "{lead}{emphasis}{inner}{emphasis}{trail}")?;
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total matches: {}*", self.match_count)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Render a segment's parts with Markdown metacharacters escaped
fn render_parts(parts: &[Part<'_>]) -> String {
    let mut out = String::new();
    for part in parts {
        match part {
            Part::Text(text) => escape_into(&mut out, text),
            Part::Link(link) => {
                out.push('[');
                escape_into(&mut out, link);
                out.push_str("](");
                out.push_str(link);
                out.push(')');
            }
        }
    }
    out
}

fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        if matches!(c, '\\' | '`' | '*' | '_' | '[' | ']' | '<' | '>' | '#' | '~' | '|') {
            out.push('\\');
        }
        out.push(c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{RenderOptions, Renderer};
    use wordmark_core::{find_chunks, FindOptions, SearchTerm};

    #[test]
    fn test_markdown_output() {
        let text = "the cat sat";
        let chunks = find_chunks(
            &SearchTerm::literals(["at"]),
            text,
            &FindOptions::default(),
        )
        .unwrap();
        let renderer = Renderer::new(RenderOptions {
            active_index: Some(0),
            ..Default::default()
        });
        let document = Document {
            source: "notes.txt".to_string(),
            segments: renderer.render(text, &chunks),
        };

        let mut out = Vec::new();
        let mut formatter = MarkdownFormatter::new(&mut out);
        formatter.format_document(&document).unwrap();
        formatter.finish().unwrap();
        drop(formatter);

        let output = String::from_utf8(out).unwrap();
        assert_eq!(
            output,
            "## notes.txt\n\nthe c***at*** s**at**\n\n---\n*Total matches: 2*\n"
        );
    }

    fn markdown_for(terms: Vec<SearchTerm>, text: &str) -> String {
        let chunks = find_chunks(&terms, text, &FindOptions::default()).unwrap();
        let renderer = Renderer::new(RenderOptions::default());
        let document = Document {
            source: "doc".to_string(),
            segments: renderer.render(text, &chunks),
        };

        let mut out = Vec::new();
        let mut formatter = MarkdownFormatter::new(&mut out);
        formatter.format_document(&document).unwrap();
        drop(formatter);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_surrounding_whitespace_moves_outside_emphasis() {
        let output = markdown_for(vec![SearchTerm::pattern(r"\scat ").unwrap()], "a cat sat");
        assert_eq!(output, "## doc\n\na **cat** sat\n");
    }

    #[test]
    fn test_whitespace_only_highlight_has_no_emphasis() {
        let output = markdown_for(SearchTerm::literals(["  "]), "a  b");
        assert_eq!(output, "## doc\n\na  b\n");
    }

    #[test]
    fn test_metacharacters_are_escaped() {
        let output = markdown_for(SearchTerm::literals(["snake_case"]), "use snake_case, not *stars* [x]");
        assert_eq!(
            output,
            "## doc\n\nuse **snake\\_case**, not \\*stars\\* \\[x\\]\n"
        );
    }
}
