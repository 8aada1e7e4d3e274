use std::path::PathBuf;

use crate::codec::ReportFormat;

pub const DEFAULT_INPUT: &str = "logfiles/requests.log";
pub const DEFAULT_OUTPUT: &str = "reports/ipaddr";

#[derive(Clone, Debug)]
pub struct ReportOptions {
    /// Access log to read.
    pub input: PathBuf,
    /// Report path without extension; the format's extension is appended.
    pub output: PathBuf,
    pub format: ReportFormat,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            format: ReportFormat::default(),
        }
    }
}
