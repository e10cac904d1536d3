//! Error types for the expected-results table.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors raised while reading or writing the expected-results CSV.
#[derive(Error, Debug)]
pub enum ResultsError {
    #[error("could not access '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("row {line} in '{path}' has {found} fields, expected 6")]
    MalformedRow {
        path: PathBuf,
        line: u64,
        found: usize,
    },

    #[error("invalid counter value '{value}' in '{path}'")]
    BadCounter { value: String, path: PathBuf },
}
