use super::{COLUMNS, ReportEncoder, ReportFormat};
use crate::domain::ReportRecord;
use crate::error::Result;
use std::io::Write;

pub struct CsvEncoder;

impl ReportEncoder for CsvEncoder {
    fn format(&self) -> ReportFormat {
        ReportFormat::Csv
    }

    fn encode(&self, records: &[ReportRecord], dst: &mut dyn Write) -> Result<()> {
        // Header is written by hand so an empty report still carries it.
        let mut w = csv::WriterBuilder::new().has_headers(false).from_writer(dst);
        w.write_record(COLUMNS)?;
        for r in records {
            w.serialize(r)?;
        }
        w.flush()?;
        Ok(())
    }
}
