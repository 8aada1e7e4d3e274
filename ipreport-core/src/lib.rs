#![forbid(unsafe_code)]

pub mod error;
pub mod logging;
pub mod options;

pub mod domain;

pub mod parse {
    pub mod line;
}

pub mod aggregate;
pub mod report;

pub mod codec;
pub mod sink;

pub mod process;

// Re-exports: stable API surface
pub use aggregate::AggregateState;
pub use codec::ReportFormat;
pub use domain::{ClientStats, IngestSummary, LogEntry, ReportRecord};
pub use options::ReportOptions;
pub use process::{RunOutcome, process};
pub use report::build_report;
pub use sink::save_report;
