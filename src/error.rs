use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::section::GLOBAL_SECTION;

/// Failure of a file-level operation on a [`Document`](crate::Document).
#[derive(Debug, Error)]
pub enum Error {
    /// The input file is missing or could not be read.
    #[error("failed to open {} for reading", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input file was read but contains a line that matches no rule.
    #[error("failed to parse {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    /// The output file could not be created or written.
    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failure while classifying the lines of INI text.
///
/// Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unrecognized line format at line {line}: {content:?}")]
    UnrecognizedLine { line: usize, content: String },

    #[error("invalid section header at line {line}")]
    InvalidSectionName {
        line: usize,
        #[source]
        source: InvalidSectionName,
    },
}

impl ParseError {
    /// The line on which parsing stopped.
    #[must_use]
    pub fn line(&self) -> usize {
        match *self {
            Self::UnrecognizedLine { line, .. } | Self::InvalidSectionName { line, .. } => line,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidSectionName {
    #[error("section name cannot be empty")]
    Empty,
    #[error("section name {:?} is reserved for the global section", GLOBAL_SECTION)]
    Reserved,
}
