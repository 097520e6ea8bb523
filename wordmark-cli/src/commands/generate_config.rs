//! Generate config command implementation

use crate::config::CliConfig;
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        let template = Self::generate_template()?;
        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration written to {}", self.output.display());
        println!();
        println!("Next steps:");
        println!("1. Edit the file to set matching, render and output defaults");
        println!("2. Validate it:");
        println!("   wordmark validate -c {}", self.output.display());
        println!("3. Use it:");
        println!(
            "   wordmark highlight -c {} -w TERM -i input.txt",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    pub fn generate_template() -> Result<String> {
        let body = CliConfig::default().to_toml()?;
        Ok(format!(
            "# wordmark configuration\n\
             #\n\
             # [matching] sanitize accepts: ascii-lowercase, punctuation-to-space,\n\
             # whitespace-to-space. Add [render.class_map] entries to pick a class\n\
             # per matched text.\n\n{body}"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_template_parses_back() {
        let template = GenerateConfigArgs::generate_template().unwrap();
        assert!(template.starts_with("# wordmark configuration"));
        assert_eq!(CliConfig::parse(&template).unwrap(), CliConfig::default());
    }

    #[test]
    fn test_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("wordmark.toml");
        fs::write(&output, "keep me").unwrap();

        let args = GenerateConfigArgs {
            output: output.clone(),
            force: false,
        };
        assert!(args.execute().is_err());
        assert_eq!(fs::read_to_string(&output).unwrap(), "keep me");

        let args = GenerateConfigArgs {
            output: output.clone(),
            force: true,
        };
        args.execute().unwrap();
        assert!(fs::read_to_string(&output).unwrap().contains("[matching]"));
    }
}
