//! Tests for dataset export (CSV / JSON / text report).

use std::time::Duration;

use serde_json::Value;

use terralens::{DataKind, ExportFormat, SustainabilityClient, Terralens};

fn offline_client() -> SustainabilityClient {
    Terralens::builder()
        .air_quality_base("http://127.0.0.1:9")
        .timeout(Duration::from_millis(500))
        .build()
        .expect("client should build")
}

#[tokio::test]
async fn carbon_history_exports_as_csv() {
    let dir = tempfile::tempdir().expect("tempdir");
    let client = offline_client();

    let path = client
        .export(DataKind::CarbonFootprint, ExportFormat::Csv, dir.path())
        .await
        .expect("export should succeed");

    let name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("carbon-footprint-"));
    assert!(name.ends_with(".csv"));

    let content = std::fs::read_to_string(&path).expect("file written");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 6, "header plus five years");
    assert!(lines[0].contains("year"));
    assert!(lines[0].contains("value"));
    assert!(content.contains("45048"));
}

#[tokio::test]
async fn energy_history_exports_as_valid_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    let client = offline_client();

    let path = client
        .export(DataKind::EnergyData, ExportFormat::Json, dir.path())
        .await
        .expect("export should succeed");

    let content = std::fs::read_to_string(&path).expect("file written");
    let parsed: Value = serde_json::from_str(&content).expect("valid JSON");
    let rows = parsed.as_array().expect("array of records");
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0]["year"], "2023");
}

#[tokio::test]
async fn air_quality_exports_as_single_object() {
    let dir = tempfile::tempdir().expect("tempdir");
    let client = offline_client();

    // The unroutable feed forces the synthetic fallback; export still
    // succeeds with whatever the wrapper served.
    let path = client
        .export(DataKind::AirQuality, ExportFormat::Json, dir.path())
        .await
        .expect("export should succeed");

    let content = std::fs::read_to_string(&path).expect("file written");
    let parsed: Value = serde_json::from_str(&content).expect("valid JSON");
    assert!(parsed.get("aqi").is_some());
    assert!(parsed.get("location").is_some());
}

#[tokio::test]
async fn text_report_carries_the_header() {
    let dir = tempfile::tempdir().expect("tempdir");
    let client = offline_client();

    let path = client
        .export(DataKind::CarbonFootprint, ExportFormat::Text, dir.path())
        .await
        .expect("export should succeed");

    assert!(path.to_string_lossy().ends_with(".txt"));
    let content = std::fs::read_to_string(&path).expect("file written");
    assert!(content.starts_with("Sustainability Report - carbon-footprint"));
    assert!(content.contains("Generated on:"));
}

#[tokio::test]
async fn export_to_missing_directory_fails() {
    let client = offline_client();
    let result = client
        .export(
            DataKind::CarbonFootprint,
            ExportFormat::Csv,
            std::path::Path::new("/nonexistent/terralens-export"),
        )
        .await;
    assert!(result.is_err());
}
