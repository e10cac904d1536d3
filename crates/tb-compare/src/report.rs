//! Mismatch reporting — the single-line human summary and JSON export.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Summary of one actual-vs-expected comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MismatchReport {
    /// Short label derived from the actual file's parent directories.
    pub label: String,
    /// Positions failing the closeness predicate.
    pub mismatched_elements: usize,
    /// Total positions compared.
    pub n_elems: usize,
    /// `mismatched_elements / n_elems`; 0.0 for empty input.
    pub mismatch_ratio: f64,
    /// Largest absolute elementwise difference over all positions.
    pub max_abs_diff: f64,
}

impl MismatchReport {
    /// The one-line human-readable summary.
    pub fn summary_line(&self) -> String {
        format!(
            "{}: ({} / {}) {:.1}% mismatched elements, max abs diff = {}",
            self.label,
            self.mismatched_elements,
            self.n_elems,
            self.mismatch_ratio * 100.0,
            self.max_abs_diff
        )
    }

    /// Print the summary line to stdout.
    pub fn print_summary(&self) {
        println!("\n{}\n", self.summary_line());
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }
}

/// Derive a short run label from an output path.
///
/// Benchmark runs lay outputs out as `<suite>/<case>/<run-dir>/out.txt`;
/// the label is the suite and case components, i.e. the path components
/// just above the file's immediate directory.
pub fn run_label(path: &Path) -> String {
    let components: Vec<&str> = path
        .iter()
        .filter_map(|c| c.to_str())
        .filter(|c| *c != "/")
        .collect();

    let end = components.len().saturating_sub(2);
    let start = end.saturating_sub(2);
    components[start..end].join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_label_takes_suite_and_case() {
        let label = run_label(Path::new("conv/resnet50_fwd/outputs/actual.txt"));
        assert_eq!(label, "conv/resnet50_fwd");
    }

    #[test]
    fn test_run_label_short_paths() {
        assert_eq!(run_label(Path::new("a/outputs/actual.txt")), "a");
        assert_eq!(run_label(Path::new("actual.txt")), "");
    }

    #[test]
    fn test_summary_line_format() {
        let report = MismatchReport {
            label: "conv/case1".into(),
            mismatched_elements: 1,
            n_elems: 3,
            mismatch_ratio: 1.0 / 3.0,
            max_abs_diff: 36.0,
        };
        let line = report.summary_line();
        assert!(line.contains("conv/case1"));
        assert!(line.contains("(1 / 3)"));
        assert!(line.contains("33.3%"));
        assert!(line.contains("max abs diff = 36"));
    }

    #[test]
    fn test_json_round_trip() {
        let report = MismatchReport {
            label: "suite/case".into(),
            mismatched_elements: 2,
            n_elems: 8,
            mismatch_ratio: 0.25,
            max_abs_diff: 1.5,
        };
        let parsed: MismatchReport = serde_json::from_str(&report.to_json()).unwrap();
        assert_eq!(parsed.mismatched_elements, 2);
        assert_eq!(parsed.mismatch_ratio, 0.25);
    }
}
