use super::{ReportEncoder, ReportFormat};
use crate::domain::ReportRecord;
use crate::error::Result;
use std::io::Write;

/// Pretty-printed JSON array, two-space indentation.
pub struct JsonEncoder;

impl ReportEncoder for JsonEncoder {
    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }

    fn encode(&self, records: &[ReportRecord], dst: &mut dyn Write) -> Result<()> {
        serde_json::to_writer_pretty(&mut *dst, records)?;
        dst.write_all(b"\n")?;
        Ok(())
    }
}
