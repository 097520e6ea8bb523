//! Configuration module

use crate::error::CliError;
use crate::output::{Markers, OutputFormat};
use crate::render::{HighlightClass, RenderOptions};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use wordmark_core::BuiltinSanitizer;

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Matching configuration
    #[serde(default)]
    pub matching: MatchingConfig,

    /// Render configuration
    #[serde(default)]
    pub render: RenderConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Matching-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct MatchingConfig {
    /// Match case exactly
    pub case_sensitive: bool,

    /// Treat search words as plain text rather than regular expressions
    pub auto_escape: bool,

    /// Name of a built-in sanitizer
    pub sanitize: Option<String>,
}

/// Render-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Class for highlighted chunks
    pub highlight_class: String,

    /// Extra class for the active highlighted chunk
    pub active_class: String,

    /// Class for plain chunks
    pub unhighlight_class: String,

    /// Split URLs out of chunk text
    pub detect_links: bool,

    /// Per-text highlight classes; overrides `highlight_class` when non-empty
    pub class_map: BTreeMap<String, String>,

    /// Markers used by the text format
    pub markers: Markers,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            highlight_class: "highlight".to_string(),
            active_class: "active".to_string(),
            unhighlight_class: String::new(),
            detect_links: true,
            class_map: BTreeMap::new(),
            markers: Markers::default(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| CliError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that TOML parsing alone cannot
    pub fn validate(&self) -> Result<()> {
        self.sanitizer()?;
        if self.render.class_map.keys().any(String::is_empty) {
            return Err(CliError::Config("class_map keys must not be empty".to_string()).into());
        }
        Ok(())
    }

    /// The configured sanitizer, if any
    pub fn sanitizer(&self) -> Result<Option<BuiltinSanitizer>> {
        self.matching
            .sanitize
            .as_deref()
            .map(|name| {
                name.parse::<BuiltinSanitizer>()
                    .map_err(|e| anyhow::Error::from(CliError::Config(e.to_string())))
            })
            .transpose()
    }

    /// Render options derived from this configuration
    pub fn render_options(&self, active_index: Option<usize>) -> RenderOptions {
        let highlight_class = if self.render.class_map.is_empty() {
            HighlightClass::Uniform(self.render.highlight_class.clone())
        } else {
            HighlightClass::ByText(self.render.class_map.clone())
        };

        RenderOptions {
            highlight_class,
            active_class: self.render.active_class.clone(),
            unhighlight_class: self.render.unhighlight_class.clone(),
            active_index,
            case_sensitive: self.matching.case_sensitive,
            detect_links: self.render.detect_links,
        }
    }

    /// Serialize to TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}
