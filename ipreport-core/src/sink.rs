use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::codec::{ReportFormat, encoder_for};
use crate::domain::ReportRecord;
use crate::error::Result;

/// `<base>.<ext>`. The extension is appended, so `reports/v1.2` becomes
/// `reports/v1.2.csv` rather than replacing `.2`.
pub fn output_path(base: &Path, format: ReportFormat) -> PathBuf {
    let mut s = base.as_os_str().to_owned();
    s.push(".");
    s.push(format.extension());
    PathBuf::from(s)
}

/// Write `records` to `<base>.<ext>`, creating parent directories as needed.
/// Returns the path written.
pub fn save_report(records: &[ReportRecord], base: &Path, format: ReportFormat) -> Result<PathBuf> {
    let encoder = encoder_for(format);
    let path = output_path(base, encoder.format());
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut out = BufWriter::new(File::create(&path)?);
    encoder.encode(records, &mut out)?;
    out.flush()?;

    debug!(path = %path.display(), records = records.len(), %format, "report written");
    Ok(path)
}
