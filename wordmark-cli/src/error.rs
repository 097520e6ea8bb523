//! User-facing failures of the `wordmark` binary

use std::fmt;
use std::path::PathBuf;
use wordmark_core::FindError;

/// Errors the CLI reports before any output is written
#[derive(Debug)]
pub enum CliError {
    /// An input path that does not exist
    MissingInput(PathBuf),
    /// An `--input` glob the glob parser rejected
    BadInputGlob {
        /// The glob as given on the command line
        pattern: String,
        /// Why it was rejected
        reason: String,
    },
    /// A configuration file that does not parse or validate
    Config(String),
    /// A `--word` or `--pattern` the chunk finder could not compile
    Term(FindError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::MissingInput(path) => write!(f, "no such input file: {}", path.display()),
            CliError::BadInputGlob { pattern, reason } => {
                write!(f, "bad input glob '{pattern}': {reason}")
            }
            CliError::Config(msg) => write!(f, "invalid configuration: {msg}"),
            CliError::Term(err) => write!(f, "search term rejected: {err}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<FindError> for CliError {
    fn from(err: FindError) -> Self {
        CliError::Term(err)
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
