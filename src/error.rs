use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CnfError {
    #[error("file is empty")]
    EmptyInput,

    #[error("invalid header: {0}")]
    HeaderFormat(HeaderIssue),

    #[error("file '{}' not found", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line count mismatch, header specifies {declared} clauses but {actual}")]
    LineCountMismatch { declared: i64, actual: LineCount },

    #[error("line {line} is empty or missing data")]
    EmptyLine { line: usize },

    #[error("line {line} does not end with 0")]
    MissingTerminator { line: usize },

    #[error("line {line} contains non-integer value '{token}'")]
    NonIntegerToken { line: usize, token: String },

    #[error("line {line} contains number {value} out of bounds [-{bound}, {bound}]")]
    OutOfBounds { line: usize, value: i64, bound: i64 },

    #[error("failed to read line {line}")]
    Io {
        line: usize,
        #[source]
        source: io::Error,
    },
}

/// What exactly is wrong with the `p cnf V C` line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HeaderIssue {
    #[error("expected 'p cnf V C'")]
    Malformed,
    #[error("V must be an integer, got '{0}'")]
    NonIntegerVariables(String),
    #[error("C must be an integer, got '{0}'")]
    NonIntegerClauses(String),
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LineCount {
    /// Detected as soon as the first surplus line is read.
    #[error("file has extra lines (at least {0})")]
    Extra(i64),
    #[error("file only has {0} clause lines")]
    TooFew(i64),
}

pub type Result<T> = std::result::Result<T, CnfError>;
