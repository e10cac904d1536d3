//! Error types for output loading and comparison.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors raised while loading or comparing output files.
///
/// Every variant aborts the comparison; no partial report is produced.
#[derive(Error, Debug)]
pub enum CompareError {
    #[error("could not read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid numeric literal '{token}' in '{path}'")]
    Parse { token: String, path: PathBuf },

    #[error("length mismatch: actual has {actual} elements, expected has {expected}")]
    LengthMismatch { actual: usize, expected: usize },
}
