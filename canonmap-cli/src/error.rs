use colored::Colorize;
use std::fmt;
use std::process;

pub const EXIT_ERROR: i32 = 1;

/// Unified error type for CLI operations.
pub enum CliError {
    /// Bad file path, unreadable input, parse failure.
    Input(String),
    /// Error from the mapping engine.
    Map(canonmap_mapper::MapError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Input(msg) => write!(f, "{} {msg}", "error:".red().bold()),
            CliError::Map(e) => write!(f, "{} {e}", "error:".red().bold()),
        }
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<canonmap_mapper::MapError> for CliError {
    fn from(e: canonmap_mapper::MapError) -> Self {
        CliError::Map(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Input(format!("JSON parse error: {e}"))
    }
}

/// Print error and exit with a non-zero code.
pub fn exit_with_error(err: CliError) -> ! {
    eprintln!("{err}");
    process::exit(EXIT_ERROR)
}

pub type CliResult<T> = std::result::Result<T, CliError>;
