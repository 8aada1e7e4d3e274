// ipreport_core/src/domain.rs
use serde::{Deserialize, Serialize};

/// One accepted log line: who asked, and how many bytes went out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEntry {
    pub client_id: String,
    pub bytes_sent: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClientStats {
    pub requests: u64,
    pub bytes: u64,
}

/// A single row of the final report. Field order is the column order of
/// both output formats.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportRecord {
    pub ip_address: String,
    pub requests: u64,
    pub requests_percentage: f64,
    pub bytes_sent: u64,
    pub bytes_percentage: f64,
}

/// Per-run line accounting. `lines == accepted + blank + filtered + malformed`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IngestSummary {
    pub lines: u64,
    pub accepted: u64,
    pub blank: u64,
    /// Well-formed lines whose status is not the success marker.
    pub filtered: u64,
    pub malformed: u64,
}
