use ipreport_core::error::ReportError;
use ipreport_core::{ReportFormat, ReportOptions, ReportRecord, process};
use std::fs;
use std::path::Path;

const SAMPLE: &str = "2024-03-14T12:00:01;1024;OK;192.168.1.1
2024-03-14T12:00:02;2048;OK;192.168.1.1
2024-03-14T12:00:03;1024;OK;192.168.1.2
2024-03-14T12:00:04;512;ERROR;192.168.1.3
2024-03-14T12:00:05;1024;OK;192.168.1.2
";

fn options(dir: &Path, log: &str, format: ReportFormat) -> ReportOptions {
    let input = dir.join("test.log");
    fs::write(&input, log).unwrap();
    ReportOptions {
        input,
        output: dir.join("reports").join("ipaddr"),
        format,
    }
}

#[test]
fn sample_log_to_json() {
    let dir = tempfile::tempdir().unwrap();
    let opts = options(dir.path(), SAMPLE, ReportFormat::Json);

    let outcome = process(&opts).unwrap();

    assert_eq!(outcome.output, dir.path().join("reports/ipaddr.json"));
    assert_eq!(outcome.total_requests, 4);
    assert_eq!(outcome.total_bytes, 5120);
    assert_eq!(outcome.clients, 2);
    assert_eq!(outcome.summary.filtered, 1);

    let records: Vec<ReportRecord> =
        serde_json::from_str(&fs::read_to_string(&outcome.output).unwrap()).unwrap();
    assert_eq!(
        records,
        vec![
            ReportRecord {
                ip_address: "192.168.1.1".into(),
                requests: 2,
                requests_percentage: 50.0,
                bytes_sent: 3072,
                bytes_percentage: 60.0,
            },
            ReportRecord {
                ip_address: "192.168.1.2".into(),
                requests: 2,
                requests_percentage: 50.0,
                bytes_sent: 2048,
                bytes_percentage: 40.0,
            },
        ]
    );
}

#[test]
fn sample_log_to_csv() {
    let dir = tempfile::tempdir().unwrap();
    let opts = options(dir.path(), SAMPLE, ReportFormat::Csv);

    let outcome = process(&opts).unwrap();

    assert_eq!(outcome.output, dir.path().join("reports/ipaddr.csv"));
    assert_eq!(
        fs::read_to_string(&outcome.output).unwrap(),
        "ip_address,requests,requests_percentage,bytes_sent,bytes_percentage\n\
         192.168.1.1,2,50.0,3072,60.0\n\
         192.168.1.2,2,50.0,2048,40.0\n"
    );
}

#[test]
fn only_bad_lines_gives_empty_report() {
    let dir = tempfile::tempdir().unwrap();
    let log = "\n  \nnot a log line\n2024-03-14T12:00:01;lots;OK;10.0.0.1\n";
    let opts = options(dir.path(), log, ReportFormat::Json);

    let outcome = process(&opts).unwrap();

    assert_eq!(outcome.total_requests, 0);
    assert_eq!(outcome.total_bytes, 0);
    assert_eq!(outcome.summary.malformed, 2);
    assert_eq!(outcome.summary.blank, 2);
    assert_eq!(fs::read_to_string(&outcome.output).unwrap(), "[]\n");
}

#[test]
fn missing_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let opts = ReportOptions {
        input: dir.path().join("missing.log"),
        output: dir.path().join("reports").join("ipaddr"),
        format: ReportFormat::Csv,
    };

    let err = process(&opts).unwrap_err();

    assert!(matches!(err, ReportError::InputNotFound { .. }));
    assert!(err.to_string().contains("missing.log"));
    assert!(!dir.path().join("reports").exists());
}
