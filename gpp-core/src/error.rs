/// Error types for loading the power plant dataset
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading the dataset. All of them are fatal at startup.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The dataset file could not be read
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV could not be parsed
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row
    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),

    /// A capacity cell is not a number
    #[error("Invalid capacity {value:?} on line {line}")]
    InvalidCapacity { line: u64, value: String },
}

/// Type alias for Results using LoadError
pub type Result<T> = std::result::Result<T, LoadError>;
