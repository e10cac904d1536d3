//! Elementwise comparison of an actual output file against an expected one.
//!
//! Prints a one-line mismatch summary and exits non-zero only on fatal
//! errors, never on mismatches.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use tb_compare::{Tolerance, compare_files};

/// Report elementwise mismatches between two output files
#[derive(Parser, Debug)]
#[command(name = "compare-outputs")]
#[command(author, version, about = "Compare accelerator outputs against expected values", long_about = None)]
struct Args {
    /// Output file produced by the run under test
    #[arg(long = "actual")]
    actual: PathBuf,

    /// Output file holding the expected values
    #[arg(long = "expected")]
    expected: PathBuf,

    /// Absolute tolerance
    #[arg(long = "atol", default_value_t = 0.0)]
    atol: f64,

    /// Relative tolerance
    #[arg(long = "rtol", default_value_t = 1e-7)]
    rtol: f64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let tolerance = Tolerance::new(args.atol, args.rtol);
    let report = compare_files(&args.actual, &args.expected, tolerance)?;
    report.print_summary();

    Ok(())
}
