use std::fmt;

use crate::domain::LogEntry;

pub const DELIMITER: char = ';';
/// Status token that qualifies a line for the statistics.
pub const SUCCESS_MARKER: &str = "OK";
const FIELD_COUNT: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineOutcome {
    Valid(LogEntry),
    /// Empty or whitespace-only line.
    Blank,
    /// Well-formed line with a non-success status.
    Filtered,
    Malformed {
        line: String,
        reason: MalformedReason,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MalformedReason {
    FieldCount(usize),
    BadBytes,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedReason::FieldCount(n) => {
                write!(f, "expected {FIELD_COUNT} fields, got {n}")
            }
            MalformedReason::BadBytes => f.write_str("bytes field is not a non-negative integer"),
        }
    }
}

/// Parse one raw line of `timestamp;bytes_sent;status;client_id`.
///
/// The status filter runs before the byte count is parsed, so a line with a
/// non-success status is filtered even if its byte field is garbage.
pub fn parse_line(raw: &str) -> LineOutcome {
    let line = raw.trim();
    if line.is_empty() {
        return LineOutcome::Blank;
    }

    let fields: Vec<&str> = line.split(DELIMITER).collect();
    let [_timestamp, bytes, status, client_id] = fields.as_slice() else {
        return malformed(line, MalformedReason::FieldCount(fields.len()));
    };

    if !status.eq_ignore_ascii_case(SUCCESS_MARKER) {
        return LineOutcome::Filtered;
    }

    // Counters are unsigned, so a negative byte count is malformed.
    match bytes.trim().parse::<u64>() {
        Ok(bytes_sent) => LineOutcome::Valid(LogEntry {
            client_id: (*client_id).to_string(),
            bytes_sent,
        }),
        Err(_) => malformed(line, MalformedReason::BadBytes),
    }
}

fn malformed(line: &str, reason: MalformedReason) -> LineOutcome {
    LineOutcome::Malformed {
        line: line.to_string(),
        reason,
    }
}
