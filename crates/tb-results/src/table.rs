//! The expected-results CSV table.
//!
//! A checked-in regression baseline mapping (target, config, name) to the
//! measured cycle and memory numbers. The file is always rewritten whole,
//! in key order, so updates produce reproducible diffs.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ResultsError;

/// Notice written at the top of every generated results file.
pub const RESULTS_NOTICE: &str = "\
# This file is automatically generated and updated by update-bench.
# Do not modify this by hand.
";

/// Identity of one benchmark measurement.
///
/// The derived ordering (target, then config, then name) is the CSV row
/// order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TestKey {
    pub target: String,
    pub config: String,
    pub name: String,
}

impl fmt::Display for TestKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.target, self.config, self.name)
    }
}

/// Expected numbers for one benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchResult {
    pub cycles: u64,
    pub total_memory: u64,
    pub max_tile_memory: u64,
}

impl fmt::Display for BenchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cycles={} total_memory={} max_tile_memory={}",
            self.cycles, self.total_memory, self.max_tile_memory
        )
    }
}

/// Ordered mapping from test key to expected result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultsTable {
    entries: BTreeMap<TestKey, BenchResult>,
}

impl ResultsTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a results file, skipping `#` comment lines.
    ///
    /// Every data row must have exactly six fields with numeric counters;
    /// a malformed row is fatal.
    pub fn read(path: &Path) -> Result<Self, ResultsError> {
        let file = File::open(path).map_err(|source| ResultsError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .comment(Some(b'#'))
            .from_reader(file);

        let mut entries = BTreeMap::new();
        for record in reader.records() {
            let record = record.map_err(|source| ResultsError::Csv {
                path: path.to_path_buf(),
                source,
            })?;

            if record.len() != 6 {
                return Err(ResultsError::MalformedRow {
                    path: path.to_path_buf(),
                    line: record.position().map_or(0, |p| p.line()),
                    found: record.len(),
                });
            }

            let key = TestKey {
                target: record[0].to_string(),
                config: record[1].to_string(),
                name: record[2].to_string(),
            };
            let result = BenchResult {
                cycles: parse_counter(&record[3], path)?,
                total_memory: parse_counter(&record[4], path)?,
                max_tile_memory: parse_counter(&record[5], path)?,
            };
            entries.insert(key, result);
        }

        Ok(Self { entries })
    }

    /// Rewrite the whole results file: notice header, then one row per
    /// entry in key order.
    pub fn write(&self, path: &Path) -> Result<(), ResultsError> {
        let mut out = Vec::from(RESULTS_NOTICE.as_bytes());

        {
            let mut writer = csv::Writer::from_writer(&mut out);
            for (key, result) in &self.entries {
                let cycles = result.cycles.to_string();
                let total_memory = result.total_memory.to_string();
                let max_tile_memory = result.max_tile_memory.to_string();
                writer
                    .write_record([
                        key.target.as_str(),
                        key.config.as_str(),
                        key.name.as_str(),
                        cycles.as_str(),
                        total_memory.as_str(),
                        max_tile_memory.as_str(),
                    ])
                    .map_err(|source| ResultsError::Csv {
                        path: path.to_path_buf(),
                        source,
                    })?;
            }
            writer.flush().map_err(|source| ResultsError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        }

        fs::write(path, out).map_err(|source| ResultsError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Insert or replace an entry. Returns true if the stored value
    /// actually changed, so repeated identical updates report as no-ops.
    pub fn upsert(&mut self, key: TestKey, result: BenchResult) -> bool {
        match self.entries.insert(key, result) {
            Some(previous) => previous != result,
            None => true,
        }
    }

    pub fn get(&self, key: &TestKey) -> Option<&BenchResult> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&TestKey, &BenchResult)> {
        self.entries.iter()
    }
}

fn parse_counter(field: &str, path: &Path) -> Result<u64, ResultsError> {
    field.parse().map_err(|_| ResultsError::BadCounter {
        value: field.to_string(),
        path: path.to_path_buf(),
    })
}
