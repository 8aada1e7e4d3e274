use std::cmp::Ordering;

use crate::aggregate::AggregateState;
use crate::domain::ReportRecord;

/// `part / total * 100`, rounded half away from zero to two decimals.
/// Zero when `total` is zero.
pub fn percentage(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let pct = part as f64 / total as f64 * 100.0;
    (pct * 100.0).round() / 100.0
}

/// Build the ranked report: most requests first, ties ordered by ascending
/// client identifier.
pub fn build_report(state: &AggregateState) -> Vec<ReportRecord> {
    let total_requests = state.total_requests();
    let total_bytes = state.total_bytes();

    let mut records: Vec<ReportRecord> = state
        .clients()
        .map(|(ip, stats)| ReportRecord {
            ip_address: ip.to_string(),
            requests: stats.requests,
            requests_percentage: percentage(stats.requests, total_requests),
            bytes_sent: stats.bytes,
            bytes_percentage: percentage(stats.bytes, total_bytes),
        })
        .collect();
    records.sort_by(rank);
    records
}

fn rank(a: &ReportRecord, b: &ReportRecord) -> Ordering {
    b.requests
        .cmp(&a.requests)
        .then_with(|| a.ip_address.cmp(&b.ip_address))
}
