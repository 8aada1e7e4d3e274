use std::path::PathBuf;

use ipreport_core::error::Result;
use ipreport_core::{ReportFormat, ReportOptions, process};

pub fn handle_report(input: PathBuf, output: PathBuf, format: ReportFormat) -> Result<()> {
    let opts = ReportOptions {
        input,
        output,
        format,
    };
    let outcome = process(&opts)?;
    println!("Report successfully generated: {}", outcome.output.display());
    Ok(())
}
