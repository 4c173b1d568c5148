use std::fs;

use neta_test_toolbox::app::{run_report, AppError, ReportRequest};
use neta_test_toolbox::config::Config;
use neta_test_toolbox::reports::{ReportKind, ReportStatus};
use serde_json::{json, Value};

fn config_in(dir: &std::path::Path) -> Config {
    Config {
        records_dir: dir.join("records"),
        ..Config::default()
    }
}

#[tokio::test]
async fn report_kind_is_read_from_record_and_saved_under_records_dir() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.json");
    let job = dir.path().join("job.json");
    fs::write(
        &input,
        json!({
            "reportType": "medium-voltage-circuit-breaker",
            "identifier": "CB 12",
            "temperature": { "fahrenheit": 77 }
        })
        .to_string(),
    )
    .unwrap();
    fs::write(&job, json!({ "customer_name": "Plant 4", "job_number": "J-1" }).to_string()).unwrap();

    let req = ReportRequest {
        input: Some(input),
        job: Some(job),
        status: Some(ReportStatus::Fail),
        ..ReportRequest::default()
    };
    let summary = run_report(&req, &config_in(dir.path())).await.expect("report");

    assert_eq!(summary.kind, ReportKind::MediumVoltageCircuitBreaker);
    assert_eq!(summary.celsius, Some(25.0));
    assert_eq!(summary.tcf, 1.25);
    assert_eq!(
        summary.path,
        dir.path().join("records").join("medium-voltage-circuit-breaker-CB_12.json")
    );

    let saved: Value = serde_json::from_str(&fs::read_to_string(&summary.path).unwrap()).unwrap();
    assert_eq!(saved["customer"], "Plant 4");
    assert_eq!(saved["jobNumber"], "J-1");
    assert_eq!(saved["status"], "FAIL");
}

#[tokio::test]
async fn explicit_celsius_overrides_stored_temperature() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("cable.json");
    let req = ReportRequest {
        kind: Some(ReportKind::MediumVoltageCableVlf),
        output: Some(output.clone()),
        celsius: Some(22.5),
        ..ReportRequest::default()
    };
    let summary = run_report(&req, &config_in(dir.path())).await.expect("report");
    assert_eq!(summary.path, output);
    assert_eq!(summary.fahrenheit, Some(73.0));
    assert!((summary.tcf - 1.125).abs() < 1e-12);
    assert!(output.exists());
}

#[tokio::test]
async fn record_without_kind_needs_flag() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.json");
    fs::write(&input, json!({ "customer": "ACME" }).to_string()).unwrap();
    let req = ReportRequest {
        input: Some(input),
        ..ReportRequest::default()
    };
    let err = run_report(&req, &config_in(dir.path())).await.unwrap_err();
    assert!(matches!(err, AppError::KindRequired));
}
