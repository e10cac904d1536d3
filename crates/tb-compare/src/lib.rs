//! Output comparison framework for accelerator kernel results.
//!
//! Provides numeric sequence loading from whitespace-delimited text files,
//! tolerance-based elementwise diffing, and mismatch reporting.

pub mod diff;
pub mod error;
pub mod report;
pub mod values;

pub use diff::{Tolerance, compare_values};
pub use error::CompareError;
pub use report::MismatchReport;
pub use values::read_values;

use std::path::Path;

/// Compare two output files elementwise and produce a mismatch report.
///
/// Reads both files fully, parses every whitespace-separated token as an
/// `f64`, checks the length precondition, then compares pairwise under
/// `tolerance`. The report's label is derived from `actual_path`.
pub fn compare_files(
    actual_path: &Path,
    expected_path: &Path,
    tolerance: Tolerance,
) -> Result<MismatchReport, CompareError> {
    let actual = values::read_values(actual_path)?;
    let expected = values::read_values(expected_path)?;
    let mut report = diff::compare_values(&actual, &expected, tolerance)?;
    report.label = report::run_label(actual_path);
    Ok(report)
}
