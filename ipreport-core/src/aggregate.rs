use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use tracing::{debug, warn};

use crate::domain::{ClientStats, IngestSummary};
use crate::error::{ReportError, Result};
use crate::parse::line::{LineOutcome, parse_line};

/// Per-run traffic totals keyed by client identifier.
///
/// `total_requests` and `total_bytes` always equal the sums over `clients`.
#[derive(Clone, Debug, Default)]
pub struct AggregateState {
    clients: HashMap<String, ClientStats>,
    total_requests: u64,
    total_bytes: u64,
}

impl AggregateState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `path` and aggregate every line in it.
    pub fn from_path(path: &Path) -> Result<(Self, IngestSummary)> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ReportError::InputNotFound {
                path: path.to_path_buf(),
            },
            _ => ReportError::InputUnreadable {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        let mut state = Self::new();
        let summary = state
            .ingest(BufReader::new(file))
            .map_err(|e| match e {
                ReportError::Io(source) => ReportError::InputUnreadable {
                    path: path.to_path_buf(),
                    source,
                },
                other => other,
            })?;
        debug!(path = %path.display(), lines = summary.lines, "log file ingested");
        Ok((state, summary))
    }

    /// Feed every line of `reader` through the parser. Malformed lines are
    /// logged and skipped; only read failures are returned as errors. A line
    /// that is not valid UTF-8 is a read failure and ends the run.
    pub fn ingest<R: BufRead>(&mut self, reader: R) -> Result<IngestSummary> {
        let mut summary = IngestSummary::default();
        for line in reader.lines() {
            let line = line?;
            summary.lines += 1;
            match parse_line(&line) {
                LineOutcome::Valid(entry) => {
                    self.accumulate(&entry.client_id, entry.bytes_sent);
                    summary.accepted += 1;
                }
                LineOutcome::Blank => summary.blank += 1,
                LineOutcome::Filtered => summary.filtered += 1,
                LineOutcome::Malformed { line, reason } => {
                    warn!(%reason, "wrong formatted line skipped: {line}");
                    summary.malformed += 1;
                }
            }
        }
        Ok(summary)
    }

    /// Count one qualifying request for `client_id`.
    pub fn accumulate(&mut self, client_id: &str, bytes: u64) {
        let stats = self.clients.entry(client_id.to_string()).or_default();
        stats.requests = stats.requests.saturating_add(1);
        stats.bytes = stats.bytes.saturating_add(bytes);
        self.total_requests = self.total_requests.saturating_add(1);
        self.total_bytes = self.total_bytes.saturating_add(bytes);
    }

    pub fn get(&self, client_id: &str) -> Option<&ClientStats> {
        self.clients.get(client_id)
    }

    pub fn clients(&self) -> impl Iterator<Item = (&str, &ClientStats)> {
        self.clients.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn client_count(&self) -> usize {
        self.clients.len()
    }

    pub fn total_requests(&self) -> u64 {
        self.total_requests
    }

    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }
}
