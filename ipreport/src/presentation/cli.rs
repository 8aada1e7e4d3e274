use clap::Parser;
use ipreport_core::ReportFormat;
use ipreport_core::options::{DEFAULT_INPUT, DEFAULT_OUTPUT};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Process log files and generate IP address traffic report",
    long_about = None
)]
pub struct Cli {
    /// Input log file path
    #[arg(long, env = "IPREPORT_INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Output report file path (extension is added from --format)
    #[arg(long, env = "IPREPORT_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Output format (csv or json)
    #[arg(long, env = "IPREPORT_FORMAT", default_value = "csv")]
    pub format: ReportFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["ipreport"]).unwrap();
        assert_eq!(cli.input, PathBuf::from(DEFAULT_INPUT));
        assert_eq!(cli.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(cli.format, ReportFormat::Csv);
    }

    #[test]
    fn format_parses_into_core_type() {
        let cli = Cli::try_parse_from(["ipreport", "--format", "JSON"]).unwrap();
        assert_eq!(cli.format, ReportFormat::Json);
    }

    #[test]
    fn unknown_format_reports_core_error() {
        let err = Cli::try_parse_from(["ipreport", "--format", "xml"]).unwrap_err();
        assert!(err.to_string().contains("unknown report format: xml"), "{err}");
    }
}
