//! wordmark: highlight search terms in text

use anyhow::Result;
use clap::Parser;
use wordmark_cli::commands::Commands;

/// Highlight search terms in text files or standard input
#[derive(Debug, Parser)]
#[command(name = "wordmark", version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
