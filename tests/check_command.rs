//! Tests for the `check` batch mode (file in, CSV out).

#[path = "helpers.rs"]
mod helpers;

use helpers::{fast_config, mock_site_input, start_mock_site};
use link_audit::{run_check, BatchError};
use tempfile::TempDir;

#[tokio::test]
async fn test_check_writes_report_file() {
    let server = start_mock_site().await;
    let dir = TempDir::new().expect("temp dir");
    let input = dir.path().join("urls.txt");
    let output = dir.path().join("report.csv");
    std::fs::write(&input, mock_site_input(&server)).expect("input written");

    let report = run_check(&fast_config(), &input, Some(output.as_path()))
        .await
        .expect("check succeeds");
    assert_eq!(report.results.len(), 3);

    let csv = std::fs::read_to_string(&output).expect("report readable");
    assert!(csv.starts_with("Metric,Value\n"));
    assert!(csv.contains(&format!("{}/missing,404,No\n", server.uri())));
}

#[tokio::test]
async fn test_check_empty_file_fails() {
    let dir = TempDir::new().expect("temp dir");
    let input = dir.path().join("empty.txt");
    std::fs::write(&input, "\n\n").expect("input written");

    let err = run_check(&fast_config(), &input, Some(dir.path().join("out.csv").as_path()))
        .await
        .unwrap_err();
    assert_eq!(err.downcast_ref::<BatchError>(), Some(&BatchError::NoUrls));
    assert!(!dir.path().join("out.csv").exists());
}

#[tokio::test]
async fn test_check_missing_file_fails() {
    let dir = TempDir::new().expect("temp dir");
    let err = run_check(&fast_config(), &dir.path().join("absent.txt"), None)
        .await
        .unwrap_err();
    assert!(format!("{err:#}").contains("Failed to read URL file"));
}
