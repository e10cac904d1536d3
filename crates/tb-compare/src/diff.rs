//! Elementwise diffing of actual vs expected output sequences.
//!
//! Compares two equal-length sequences position by position under an
//! absolute/relative tolerance, accumulating mismatch statistics.

use serde::{Deserialize, Serialize};

use crate::error::CompareError;
use crate::report::MismatchReport;

/// Absolute and relative tolerance bounds for the closeness predicate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerance {
    /// Fixed allowed deviation.
    pub atol: f64,
    /// Allowed deviation proportional to the expected value's magnitude.
    pub rtol: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            atol: 0.0,
            rtol: 1e-7,
        }
    }
}

impl Tolerance {
    pub fn new(atol: f64, rtol: f64) -> Self {
        Self { atol, rtol }
    }

    /// True if `actual` is close enough to `expected`:
    /// `|actual - expected| <= atol + rtol * |expected|`.
    ///
    /// Comparisons involving NaN are never close.
    pub fn allows(&self, actual: f64, expected: f64) -> bool {
        (actual - expected).abs() <= self.atol + self.rtol * expected.abs()
    }
}

/// Compare two sequences pairwise and accumulate mismatch statistics.
///
/// The sequences must have equal length; a length mismatch is a fatal
/// precondition error raised before any per-element work. The maximum
/// absolute difference is tracked across ALL positions, not just the
/// mismatched ones, so it reflects the worst-case deviation even when the
/// mismatch ratio is small.
pub fn compare_values(
    actual: &[f64],
    expected: &[f64],
    tolerance: Tolerance,
) -> Result<MismatchReport, CompareError> {
    if actual.len() != expected.len() {
        return Err(CompareError::LengthMismatch {
            actual: actual.len(),
            expected: expected.len(),
        });
    }

    let n_elems = actual.len();
    let mut mismatched_elements = 0usize;
    let mut max_abs_diff = 0.0f64;

    for (&a, &e) in actual.iter().zip(expected) {
        if !tolerance.allows(a, e) {
            mismatched_elements += 1;
        }
        let diff = (a - e).abs();
        if diff > max_abs_diff {
            max_abs_diff = diff;
        }
    }

    // 0/0 on empty input is defined as a clean 0.0 ratio.
    let mismatch_ratio = if n_elems == 0 {
        0.0
    } else {
        mismatched_elements as f64 / n_elems as f64
    };

    Ok(MismatchReport {
        label: String::new(),
        mismatched_elements,
        n_elems,
        mismatch_ratio,
        max_abs_diff,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_sequences_match_exactly() {
        let values = [1.0, -2.5, 3.0e4, 0.0];
        let report = compare_values(&values, &values, Tolerance::default()).unwrap();
        assert_eq!(report.mismatched_elements, 0);
        assert_eq!(report.n_elems, 4);
        assert_eq!(report.mismatch_ratio, 0.0);
        assert_eq!(report.max_abs_diff, 0.0);
    }

    #[test]
    fn test_relative_tolerance_boundary() {
        let tol = Tolerance::new(0.0, 0.1);
        // 9% off: within a 10% relative tolerance.
        let report = compare_values(&[100.0], &[109.0], tol).unwrap();
        assert_eq!(report.mismatched_elements, 0);
        // 11% off: outside it.
        let report = compare_values(&[100.0], &[111.0], tol).unwrap();
        assert_eq!(report.mismatched_elements, 1);
    }

    #[test]
    fn test_absolute_tolerance() {
        let tol = Tolerance::new(0.5, 0.0);
        let report = compare_values(&[1.0, 2.0], &[1.4, 2.6], tol).unwrap();
        assert_eq!(report.mismatched_elements, 1);
    }

    #[test]
    fn test_length_mismatch_is_fatal() {
        let err = compare_values(&[1.0, 2.0, 3.0], &[1.0, 2.0], Tolerance::default()).unwrap_err();
        match err {
            CompareError::LengthMismatch { actual, expected } => {
                assert_eq!(actual, 3);
                assert_eq!(expected, 2);
            }
            other => panic!("expected length mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_mismatch_ratio_and_max_diff() {
        let report = compare_values(
            &[1.0, 2.0, 3.0, 4.0],
            &[1.0, 2.0, 3.0, 40.0],
            Tolerance::default(),
        )
        .unwrap();
        assert_eq!(report.mismatched_elements, 1);
        assert_eq!(report.n_elems, 4);
        assert_eq!(report.mismatch_ratio, 0.25);
        assert_eq!(report.max_abs_diff, 36.0);
    }

    #[test]
    fn test_max_diff_tracks_elements_within_tolerance() {
        // Every element passes a 10% relative tolerance, but the worst
        // deviation is still reported.
        let report = compare_values(&[100.0, 209.0], &[100.0, 200.0], Tolerance::new(0.0, 0.1))
            .unwrap();
        assert_eq!(report.mismatched_elements, 0);
        assert_eq!(report.max_abs_diff, 9.0);
    }

    #[test]
    fn test_empty_sequences() {
        let report = compare_values(&[], &[], Tolerance::default()).unwrap();
        assert_eq!(report.n_elems, 0);
        assert_eq!(report.mismatch_ratio, 0.0);
        assert_eq!(report.max_abs_diff, 0.0);
    }

    #[test]
    fn test_nan_is_never_close() {
        let report = compare_values(&[f64::NAN], &[1.0], Tolerance::new(1e9, 1e9)).unwrap();
        assert_eq!(report.mismatched_elements, 1);
        // NaN differences do not poison the max over well-ordered diffs.
        assert_eq!(report.max_abs_diff, 0.0);
    }
}
