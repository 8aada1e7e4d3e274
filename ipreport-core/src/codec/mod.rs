use crate::domain::ReportRecord;
use crate::error::{ReportError, Result};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Column order shared by every output format.
pub const COLUMNS: [&str; 5] = [
    "ip_address",
    "requests",
    "requests_percentage",
    "bytes_sent",
    "bytes_percentage",
];

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ReportFormat {
    #[default]
    Csv,
    Json,
}

impl ReportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ReportFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ReportFormat::Csv),
            "json" => Ok(ReportFormat::Json),
            _ => Err(ReportError::UnknownFormat(s.to_string())),
        }
    }
}

pub trait ReportEncoder: Send + Sync {
    fn format(&self) -> ReportFormat;
    fn encode(&self, records: &[ReportRecord], dst: &mut dyn Write) -> Result<()>;
}

pub fn encoder_for(format: ReportFormat) -> Box<dyn ReportEncoder> {
    match format {
        ReportFormat::Csv => Box::new(csvc::CsvEncoder),
        ReportFormat::Json => Box::new(jsonc::JsonEncoder),
    }
}

pub mod csvc;
pub mod jsonc;
