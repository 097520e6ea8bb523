//! Input pattern resolution using glob

use super::InputSource;
use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;

/// Resolve input patterns to sources
///
/// No patterns, or a lone `-`, means standard input. Files are deduplicated
/// and sorted; stdin keeps its place at the front.
pub fn resolve_inputs(patterns: &[String]) -> Result<Vec<InputSource>> {
    if patterns.is_empty() {
        return Ok(vec![InputSource::Stdin]);
    }

    let mut read_stdin = false;
    let mut files = Vec::new();

    for pattern in patterns {
        if pattern == "-" {
            read_stdin = true;
            continue;
        }

        let paths = glob(pattern).map_err(|e| CliError::BadInputGlob {
            pattern: pattern.clone(),
            reason: e.to_string(),
        })?;
        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() && !read_stdin {
        anyhow::bail!(
            "No files found matching the provided patterns: {}",
            patterns.join(", ")
        );
    }

    files.sort();
    files.dedup();

    let mut sources = Vec::with_capacity(files.len() + 1);
    if read_stdin {
        sources.push(InputSource::Stdin);
    }
    sources.extend(files.into_iter().map(InputSource::File));
    log::debug!("Resolved {} input(s)", sources.len());

    Ok(sources)
}
