//! Running benchmark commands and folding their output into the table.
//!
//! Benchmark harnesses print one line per result that differs from the
//! expected table; the runner scans the subprocess's stdout for those
//! lines and rewrites the CSV after every one, so an interrupted run
//! leaves every update seen so far on disk.

use std::io::{BufRead, BufReader};
use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::LazyLock;

use anyhow::{Context, Result, anyhow};
use regex::Regex;

use crate::table::{BenchResult, ResultsTable, TestKey};

/// Line pattern benchmark harnesses emit for an updated result.
static UPDATED_RESULT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^Updating expected result: target=(?P<target>\S+) config=(?P<config>\S+) name=(?P<name>\S+) cycles=(?P<cycles>\d+) total_memory=(?P<total_memory>\d+) max_tile_memory=(?P<max_tile_memory>\d+)\s*$",
    )
    .expect("hard-coded pattern compiles")
});

/// Parse one line of benchmark output into a table update.
///
/// Returns `None` for lines that do not match the pattern, or whose
/// counters do not fit in a `u64`.
pub fn parse_update_line(line: &str) -> Option<(TestKey, BenchResult)> {
    let caps = UPDATED_RESULT_PATTERN.captures(line)?;

    let key = TestKey {
        target: caps["target"].to_string(),
        config: caps["config"].to_string(),
        name: caps["name"].to_string(),
    };
    let result = BenchResult {
        cycles: caps["cycles"].parse().ok()?,
        total_memory: caps["total_memory"].parse().ok()?,
        max_tile_memory: caps["max_tile_memory"].parse().ok()?,
    };

    Some((key, result))
}

/// Run `command`, scan its stdout for updated results, and apply each one
/// to `table`, rewriting the CSV at `csv_path` after every update.
///
/// Lines that do not match the pattern pass through to our stdout. The
/// benchmark's exit status is checked after its output is drained; a
/// non-zero exit is an error, but updates applied before the failure stay
/// on disk. Returns the number of updates applied.
pub fn run_and_collect(
    command: &[String],
    table: &mut ResultsTable,
    csv_path: &Path,
) -> Result<usize> {
    let (program, args) = command
        .split_first()
        .ok_or_else(|| anyhow!("empty benchmark command"))?;

    println!("Collecting updates with command: {}", command.join(" "));

    let mut child = Command::new(program)
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .spawn()
        .with_context(|| format!("failed to spawn benchmark command '{}'", program))?;

    let stdout = child
        .stdout
        .take()
        .context("failed to open benchmark stdout")?;

    let mut num_updates = 0usize;
    for line in BufReader::new(stdout).lines() {
        let line = line.context("failed to read benchmark output")?;
        match parse_update_line(&line) {
            Some((key, result)) => {
                println!("Updating {} with results {}", key, result);
                table.upsert(key, result);
                table
                    .write(csv_path)
                    .with_context(|| format!("failed to rewrite '{}'", csv_path.display()))?;
                num_updates += 1;
            }
            None => println!("{}", line),
        }
    }

    let status = child.wait().context("failed to wait for benchmark command")?;
    if !status.success() {
        return Err(anyhow!("benchmark command exited with {}", status));
    }

    Ok(num_updates)
}
