//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use std::io::{self, Write};

pub mod generate_config;
pub mod highlight;
pub mod validate;

use crate::output::OutputFormat;
use wordmark_core::BuiltinSanitizer;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Highlight search terms in files or standard input
    Highlight(highlight::HighlightArgs),

    /// Write a configuration file with default values
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a configuration file
    Validate(validate::ValidateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List built-in sanitizers
    Sanitizers,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Highlight(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::List { subcommand } => subcommand.write_to(&mut io::stdout().lock()),
        }
    }
}

impl ListCommands {
    /// Write the listing
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        match self {
            ListCommands::Sanitizers => {
                writeln!(writer, "Available sanitizers:")?;
                for sanitizer in BuiltinSanitizer::ALL {
                    writeln!(
                        writer,
                        "  {:<22} {}",
                        sanitizer.name(),
                        sanitizer.description()
                    )?;
                }
            }
            ListCommands::Formats => {
                writeln!(writer, "Available output formats:")?;
                for format in OutputFormat::ALL {
                    writeln!(writer, "  {:<10} {}", format.as_str(), format.description())?;
                }
            }
        }
        Ok(())
    }
}
