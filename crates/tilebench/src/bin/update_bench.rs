//! Runs a benchmark command and folds updated results into the expected
//! results CSV.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use tb_results::{ResultsTable, run_and_collect};

/// Benchmark results updater
#[derive(Parser, Debug)]
#[command(name = "update-bench")]
#[command(author, version, about = "Run benchmarks and update the expected results CSV", long_about = None)]
struct Args {
    /// Path to the CSV file of expected benchmark results
    #[arg(long = "expected-csv")]
    expected_csv: PathBuf,

    /// Benchmark command to run, with its arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
    command: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut table = ResultsTable::read(&args.expected_csv)
        .with_context(|| format!("failed to read '{}'", args.expected_csv.display()))?;

    let num_updates = run_and_collect(&args.command, &mut table, &args.expected_csv)?;

    println!("Done. Updated {} benchmark results", num_updates);
    Ok(())
}
