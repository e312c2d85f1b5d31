//! Error types for Kidari
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Kidari operations
pub type KidariResult<T> = Result<T, KidariError>;

/// Main error type for Kidari operations
#[derive(Error, Debug)]
pub enum KidariError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input file is not valid JSON, or a record has the wrong shape
    #[error("invalid JSON in {file}: {message}")]
    Json { file: PathBuf, message: String },

    /// Extraction reply did not contain a `lessons` object
    #[error("no lesson records found in {file} - expected a \"lessons\" array")]
    NoLessons { file: PathBuf },

    /// Lesson time is not `H:MM` / `HH:MM`
    #[error("invalid time of day '{value}' - expected HH:MM (24-hour)")]
    InvalidTimeOfDay { value: String },

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Workbook export could not be opened or has no worksheet
    #[error("cannot read spreadsheet {file}: {message}")]
    Spreadsheet { file: PathBuf, message: String },

    /// Normalized schedule ends before it starts
    #[error("schedule period '{period}' in {file} ends before it starts")]
    InvalidSchedulePeriod { file: PathBuf, period: String },
}

impl KidariError {
    /// File the error points at, if any
    pub fn file(&self) -> Option<&std::path::Path> {
        match self {
            KidariError::Json { file, .. }
            | KidariError::NoLessons { file }
            | KidariError::InvalidConfig { file, .. }
            | KidariError::Spreadsheet { file, .. }
            | KidariError::InvalidSchedulePeriod { file, .. } => Some(file.as_path()),
            _ => None,
        }
    }
}
