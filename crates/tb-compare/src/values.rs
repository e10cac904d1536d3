//! Loading numeric sequences from whitespace-delimited text files.
//!
//! An output file is a flat list of numeric literals separated by arbitrary
//! whitespace. Order is significant: comparison is positional.

use std::fs;
use std::path::Path;

use crate::error::CompareError;

/// Read a file of whitespace-separated numeric literals into a sequence.
///
/// Tokens may be separated by any mixture of spaces, tabs and newlines.
/// Each token must be a valid `f64` literal (integer, decimal, or
/// scientific notation). Anything else is a fatal parse error naming the
/// offending token; malformed tokens are never skipped or substituted.
pub fn read_values(path: &Path) -> Result<Vec<f64>, CompareError> {
    let contents = fs::read_to_string(path).map_err(|source| CompareError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_values(&contents, path)
}

fn parse_values(contents: &str, path: &Path) -> Result<Vec<f64>, CompareError> {
    contents
        .split_whitespace()
        .map(|token| {
            token.parse::<f64>().map_err(|_| CompareError::Parse {
                token: token.to_string(),
                path: path.to_path_buf(),
            })
        })
        .collect()
}
