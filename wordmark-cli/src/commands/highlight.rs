//! Highlight command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_inputs, FileReader, InputSource};
use crate::output::{
    Document, JsonFormatter, Markers, MarkdownFormatter, OutputFormat, OutputFormatter,
    TextFormatter,
};
use crate::progress::ProgressReporter;
use crate::render::Renderer;
use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use wordmark_core::{BuiltinSanitizer, Chunk, ChunkFinder, FindOptions, SearchTerm};

/// Arguments for the highlight command
#[derive(Debug, Args)]
pub struct HighlightArgs {
    /// Search word; read as a regular expression unless --auto-escape is given
    #[arg(short = 'w', long = "word", value_name = "WORD")]
    pub words: Vec<String>,

    /// Regular expression, matched with the same case rules as words
    #[arg(short = 'p', long = "pattern", value_name = "REGEX")]
    pub patterns: Vec<String>,

    /// File with one search word per line
    #[arg(long, value_name = "FILE")]
    pub terms_file: Option<PathBuf>,

    /// Input files or patterns (supports glob); "-" or none reads stdin
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "WORDMARK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Match case exactly
    #[arg(short = 's', long)]
    pub case_sensitive: bool,

    /// Match search words literally instead of as regular expressions
    #[arg(short = 'e', long)]
    pub auto_escape: bool,

    /// Built-in sanitizer applied before matching (see `list sanitizers`)
    #[arg(long, value_name = "NAME")]
    pub sanitize: Option<String>,

    /// Mark the N-th highlight (0-based) of each document as active
    #[arg(short, long, value_name = "N")]
    pub active: Option<usize>,

    /// Use ANSI colors for highlights in text output
    #[arg(long)]
    pub color: bool,

    /// Do not split URLs out of chunk text
    #[arg(long)]
    pub no_links: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl HighlightArgs {
    /// Execute the highlight command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting highlighting");
        log::debug!("Arguments: {:?}", self);

        let config = self.effective_config()?;
        let terms = self.collect_terms()?;
        if terms.is_empty() {
            log::warn!("No search terms given; nothing will be highlighted");
        }

        let finder = ChunkFinder::with_options(Self::find_options(&config)?);
        let renderer = Renderer::new(config.render_options(self.active));

        let sources = resolve_inputs(&self.input)?;
        let documents = sources
            .into_iter()
            .map(|source| {
                let text = FileReader::read_source(&source)?;
                Ok::<_, anyhow::Error>((source, text))
            })
            .collect::<Result<Vec<(InputSource, String)>>>()?;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_documents(documents.len() as u64);

        let chunk_lists = documents
            .par_iter()
            .map(|(source, text)| {
                let chunks = finder.find(&terms, text).map_err(CliError::from)?;
                log::debug!("{}: {} chunks", source, chunks.len());
                progress.document_completed(&source.to_string());
                Ok::<_, anyhow::Error>(chunks)
            })
            .collect::<Result<Vec<Vec<Chunk>>>>()?;
        progress.finish();

        let format = self.format.unwrap_or(config.output.default_format);
        let mut formatter = self.formatter(format, &config, documents.len())?;
        let mut total_matches = 0;
        for ((source, text), chunks) in documents.iter().zip(&chunk_lists) {
            let document = Document {
                source: source.to_string(),
                segments: renderer.render(text, chunks),
            };
            total_matches += document.match_count();
            formatter.format_document(&document)?;
        }
        formatter.finish()?;

        log::info!(
            "Highlighted {} match(es) in {} document(s)",
            total_matches,
            documents.len()
        );
        Ok(())
    }

    /// Load the config file, if any, and apply command-line overrides
    pub fn effective_config(&self) -> Result<CliConfig> {
        let mut config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        if self.case_sensitive {
            config.matching.case_sensitive = true;
        }
        if self.auto_escape {
            config.matching.auto_escape = true;
        }
        if let Some(name) = &self.sanitize {
            config.matching.sanitize = Some(name.clone());
        }
        if self.no_links {
            config.render.detect_links = false;
        }

        config.validate()?;
        Ok(config)
    }

    /// Gather words, terms-file entries and patterns, in that order
    pub fn collect_terms(&self) -> Result<Vec<SearchTerm>> {
        let mut terms: Vec<SearchTerm> = self.words.iter().map(SearchTerm::from).collect();

        if let Some(path) = &self.terms_file {
            let words = FileReader::read_terms(path)?;
            log::debug!("Read {} term(s) from {}", words.len(), path.display());
            terms.extend(words.into_iter().map(SearchTerm::from));
        }

        for pattern in &self.patterns {
            terms.push(SearchTerm::pattern(pattern).map_err(CliError::from)?);
        }

        Ok(terms)
    }

    /// Chunk finder options from a validated config
    pub fn find_options(config: &CliConfig) -> Result<FindOptions> {
        Ok(FindOptions::builder()
            .case_sensitive(config.matching.case_sensitive)
            .auto_escape(config.matching.auto_escape)
            .sanitizer(config.sanitizer()?.map(BuiltinSanitizer::into_sanitizer))
            .build())
    }

    fn formatter(
        &self,
        format: OutputFormat,
        config: &CliConfig,
        document_count: usize,
    ) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };

        let formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => {
                let markers = if self.color {
                    Markers::ansi()
                } else {
                    config.render.markers.clone()
                };
                Box::new(TextFormatter::new(writer, markers).with_source_headers(document_count > 1))
            }
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, config.output.pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        };
        Ok(formatter)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // Another logger may already be installed when embedded
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init();
    }
}
