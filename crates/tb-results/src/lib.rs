//! Expected benchmark results maintenance.
//!
//! Provides the on-disk CSV table of expected results keyed by
//! (target, config, name), the output-line pattern benchmark harnesses
//! emit updated numbers with, and the subprocess fold that applies those
//! updates back to the table.

pub mod error;
pub mod runner;
pub mod table;

pub use error::ResultsError;
pub use runner::{parse_update_line, run_and_collect};
pub use table::{BenchResult, ResultsTable, TestKey};
