//! Error types shared by the combine and convert passes.

use std::io;
use std::num::{ParseFloatError, ParseIntError};
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A file or directory could not be opened, read or written.
    #[error("{}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("could not walk directory: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("line {line}: invalid coordinate `{token}`: {source}")]
    ParseFloat {
        line: usize,
        token: String,
        source: ParseFloatError,
    },

    /// JSON has no spelling for NaN or infinity.
    #[error("line {line}: coordinate `{token}` is not finite")]
    NonFinite { line: usize, token: String },

    #[error("line {line}: invalid vertex reference `{token}`: {source}")]
    ParseIndex {
        line: usize,
        token: String,
        source: ParseIntError,
    },

    /// Face references are 1-based and may only point at vertices declared earlier.
    #[error("line {line}: vertex index {index} out of range (1..={count})")]
    IndexOutOfRange { line: usize, index: i64, count: usize },

    #[error("line {line}: `{directive}` needs {expected} operands, found {found}")]
    MissingComponent {
        line: usize,
        directive: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True for errors caused by a missing input file or directory.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Io { source, .. } => source.kind() == io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
