//! Turn chunks into styled segments ready for output
//!
//! This is the presentation side of highlighting: numbering highlighted
//! chunks, marking the active one, picking class names, and pulling URLs out of
//! chunk text so formatters can emit them as links.

use regex::Regex;
use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;
use wordmark_core::Chunk;

const LINK_PATTERN: &str =
    r"(http|ftp|https)://([\w_-]+(?:(?:\.[\w_-]+)+))([\w.,@?^=%&:/~+#-]*[\w@?^=%&/~+#-])";

fn link_regex() -> &'static Regex {
    static LINK: OnceLock<Regex> = OnceLock::new();
    LINK.get_or_init(|| Regex::new(LINK_PATTERN).expect("link pattern is valid"))
}

/// Class assigned to highlighted chunks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HighlightClass {
    /// Same class for every highlighted chunk
    Uniform(String),
    /// Class looked up by the matched text; unknown text gets no class
    ByText(BTreeMap<String, String>),
}

impl Default for HighlightClass {
    fn default() -> Self {
        HighlightClass::Uniform(String::new())
    }
}

/// Presentation options
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Class for highlighted chunks
    pub highlight_class: HighlightClass,
    /// Extra class for the active chunk
    pub active_class: String,
    /// Class for plain chunks
    pub unhighlight_class: String,
    /// Ordinal, among highlighted chunks, of the active one
    pub active_index: Option<usize>,
    /// Whether class lookups by text respect case
    pub case_sensitive: bool,
    /// Split URLs out of chunk text
    pub detect_links: bool,
}

/// A piece of a segment's text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part<'a> {
    /// Plain text
    Text(&'a str),
    /// A URL
    Link(&'a str),
}

impl<'a> Part<'a> {
    /// The underlying text
    pub fn as_str(&self) -> &'a str {
        match self {
            Part::Text(text) | Part::Link(text) => text,
        }
    }
}

/// A chunk with everything needed to display it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    /// The chunk this segment was built from
    pub chunk: Chunk,
    /// The chunk's text
    pub text: &'a str,
    /// Ordinal among highlighted chunks
    pub highlight_index: Option<usize>,
    /// Whether this is the active highlighted chunk
    pub active: bool,
    /// Space-separated class names
    pub class_name: String,
    /// Text split into plain runs and links, in document order
    pub parts: Vec<Part<'a>>,
}

/// Renders chunk lists into segments
#[derive(Debug, Clone)]
pub struct Renderer {
    options: RenderOptions,
    // Class map keyed by lowercased text, built once for case-insensitive lookups
    folded_classes: Option<HashMap<String, String>>,
}

impl Renderer {
    /// Create a renderer
    pub fn new(options: RenderOptions) -> Self {
        let folded_classes = match &options.highlight_class {
            HighlightClass::ByText(map) if !options.case_sensitive => Some(
                map.iter()
                    .map(|(text, class)| (text.to_lowercase(), class.clone()))
                    .collect(),
            ),
            _ => None,
        };

        Self {
            options,
            folded_classes,
        }
    }

    /// The options in use
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render `chunks`, which must have been computed for `text`
    pub fn render<'a>(&self, text: &'a str, chunks: &[Chunk]) -> Vec<Segment<'a>> {
        let mut highlight_index = 0;

        chunks
            .iter()
            .map(|chunk| {
                let chunk_text = chunk.slice(text);
                let parts = self.split_links(chunk_text);

                if !chunk.highlight {
                    return Segment {
                        chunk: *chunk,
                        text: chunk_text,
                        highlight_index: None,
                        active: false,
                        class_name: self.options.unhighlight_class.clone(),
                        parts,
                    };
                }

                let index = highlight_index;
                highlight_index += 1;
                let active = self.options.active_index == Some(index);

                let mut classes = Vec::with_capacity(2);
                if let Some(class) = self.highlight_class_for(chunk_text) {
                    classes.push(class);
                }
                if active && !self.options.active_class.is_empty() {
                    classes.push(self.options.active_class.as_str());
                }

                Segment {
                    chunk: *chunk,
                    text: chunk_text,
                    highlight_index: Some(index),
                    active,
                    class_name: classes.join(" "),
                    parts,
                }
            })
            .collect()
    }

    fn highlight_class_for(&self, text: &str) -> Option<&str> {
        let class = match &self.options.highlight_class {
            HighlightClass::Uniform(class) => Some(class.as_str()),
            HighlightClass::ByText(map) => match &self.folded_classes {
                Some(folded) => folded.get(&text.to_lowercase()).map(String::as_str),
                None => map.get(text).map(String::as_str),
            },
        };
        class.filter(|class| !class.is_empty())
    }

    fn split_links<'a>(&self, text: &'a str) -> Vec<Part<'a>> {
        if !self.options.detect_links {
            return vec![Part::Text(text)];
        }

        let mut parts = Vec::new();
        let mut last = 0;
        for link in link_regex().find_iter(text) {
            if link.start() > last {
                parts.push(Part::Text(&text[last..link.start()]));
            }
            parts.push(Part::Link(link.as_str()));
            last = link.end();
        }
        if last < text.len() || parts.is_empty() {
            parts.push(Part::Text(&text[last..]));
        }
        parts
    }
}
