//! Error enum
use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Csv(csv::Error),
    /// Malformed CoNLL token line (missing columns, bad id).
    Conll { line: usize, msg: String },
    /// `feat=value` assignment segment with no `=`.
    Assignment(String),
    Serde(serde_json::Error),
    Custom(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {e}"),
            Error::Csv(e) => write!(f, "csv error: {e}"),
            Error::Conll { line, msg } => write!(f, "conll error at line {line}: {msg}"),
            Error::Assignment(s) => write!(f, "malformed feature assignment: {s:?}"),
            Error::Serde(e) => write!(f, "serialization error: {e}"),
            Error::Custom(s) => write!(f, "error: {s}"),
        }
    }
}

impl std::error::Error for Error {}
