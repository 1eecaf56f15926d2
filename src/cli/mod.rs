//! CLI command implementations for mktables.

pub(crate) mod check;
pub(crate) mod generate;
pub(crate) mod show;

mod output;

use clap::ValueEnum;
use std::error::Error;
use std::fmt;

use mktables::SquareKind;

/// Output format for the `check` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Premium grid selection for the `show` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum GridKind {
    /// All premium kinds on one board.
    All,
    /// Triple-word squares only.
    TripleWord,
    /// Double-word squares only.
    DoubleWord,
    /// Triple-letter squares only.
    TripleLetter,
    /// Double-letter squares only.
    DoubleLetter,
}

impl GridKind {
    /// The square kind this selection filters to, if any.
    pub(crate) fn square_kind(self) -> Option<SquareKind> {
        match self {
            GridKind::All => None,
            GridKind::TripleWord => Some(SquareKind::TripleWord),
            GridKind::DoubleWord => Some(SquareKind::DoubleWord),
            GridKind::TripleLetter => Some(SquareKind::TripleLetter),
            GridKind::DoubleLetter => Some(SquareKind::DoubleLetter),
        }
    }
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<mktables::GenError> for CliError {
    fn from(e: mktables::GenError) -> Self {
        Self::new(e.to_string())
    }
}
