use std::path::PathBuf;

use tracing::info;

use crate::aggregate::AggregateState;
use crate::domain::IngestSummary;
use crate::error::Result;
use crate::options::ReportOptions;
use crate::report::build_report;
use crate::sink::save_report;

#[derive(Clone, Debug)]
pub struct RunOutcome {
    pub output: PathBuf,
    pub summary: IngestSummary,
    pub clients: usize,
    pub total_requests: u64,
    pub total_bytes: u64,
}

/// Read the log, aggregate it, and write the ranked report.
///
/// Nothing is written unless the whole input was read successfully.
pub fn process(opts: &ReportOptions) -> Result<RunOutcome> {
    let (state, summary) = AggregateState::from_path(&opts.input)?;
    let report = build_report(&state);
    let output = save_report(&report, &opts.output, opts.format)?;

    info!(
        input = %opts.input.display(),
        output = %output.display(),
        lines = summary.lines,
        accepted = summary.accepted,
        filtered = summary.filtered,
        malformed = summary.malformed,
        clients = report.len(),
        "log processed"
    );

    Ok(RunOutcome {
        output,
        summary,
        clients: report.len(),
        total_requests: state.total_requests(),
        total_bytes: state.total_bytes(),
    })
}
