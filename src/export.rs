//! Dataset export.
//!
//! Renders a fetched dataset as CSV, pretty-printed JSON, or a plain
//! text report, and writes it to `{kind}-{YYYY-MM-DD}.{ext}` in a
//! caller-supplied directory. Export failures surface as errors to the
//! caller; there is no retry.

use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::client::SustainabilityClient;
use crate::location::DEFAULT_POSITION;
use crate::{Result, TerralensError};

/// Output format for an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    /// Plain-text report with a header and the JSON-rendered data.
    Text,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Text => "txt",
        }
    }
}

/// Dataset selected for export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataKind {
    CarbonFootprint,
    EnergyData,
    AirQuality,
}

impl DataKind {
    pub fn slug(&self) -> &'static str {
        match self {
            DataKind::CarbonFootprint => "carbon-footprint",
            DataKind::EnergyData => "energy-data",
            DataKind::AirQuality => "air-quality",
        }
    }
}

impl SustainabilityClient {
    /// Export `kind` as `format` into `dir`, returning the written path.
    ///
    /// Air quality exports use the default position; history exports
    /// use whatever the cache currently serves.
    pub async fn export(
        &self,
        kind: DataKind,
        format: ExportFormat,
        dir: &Path,
    ) -> Result<PathBuf> {
        let data = match kind {
            DataKind::CarbonFootprint => to_value(&self.carbon_footprint_history().await)?,
            DataKind::EnergyData => to_value(&self.energy_history().await)?,
            DataKind::AirQuality => to_value(&self.air_quality(DEFAULT_POSITION).await)?,
        };

        let stamp = Utc::now().format("%Y-%m-%d");
        let filename = format!("{}-{}.{}", kind.slug(), stamp, format.extension());
        let content = match format {
            ExportFormat::Csv => render_csv(&data)?,
            ExportFormat::Json => serde_json::to_string_pretty(&data)?,
            ExportFormat::Text => render_report(kind.slug(), &data)?,
        };

        let path = dir.join(filename);
        std::fs::write(&path, content)?;
        debug!(path = %path.display(), "exported dataset");
        Ok(path)
    }
}

fn to_value<T: Serialize>(data: &T) -> Result<Value> {
    Ok(serde_json::to_value(data)?)
}

/// Render a dataset as CSV.
///
/// A JSON array becomes one row per element; a single object becomes a
/// one-row CSV. Column order follows the serialized key order; string
/// fields containing commas are double-quoted.
pub fn render_csv(data: &Value) -> Result<String> {
    let rows: Vec<&Value> = match data {
        Value::Array(items) => items.iter().collect(),
        Value::Object(_) => vec![data],
        _ => {
            return Err(TerralensError::Export(
                "dataset is not exportable as CSV".to_owned(),
            ))
        }
    };
    let Some(first) = rows.first() else {
        return Err(TerralensError::Export("dataset is empty".to_owned()));
    };
    let Some(header) = first.as_object() else {
        return Err(TerralensError::Export(
            "dataset rows are not objects".to_owned(),
        ))
    };

    let columns: Vec<&String> = header.keys().collect();
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(
        columns
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(","),
    );
    for row in &rows {
        let cells: Vec<String> = columns
            .iter()
            .map(|column| csv_cell(row.get(column.as_str()).unwrap_or(&Value::Null)))
            .collect();
        lines.push(cells.join(","));
    }
    Ok(lines.join("\n"))
}

fn csv_cell(value: &Value) -> String {
    match value {
        Value::String(s) if s.contains(',') => format!("\"{}\"", s),
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Render a plain-text report around the JSON-rendered dataset.
pub fn render_report(title: &str, data: &Value) -> Result<String> {
    Ok(format!(
        "Sustainability Report - {}\n\nGenerated on: {}\n\nData:\n{}",
        title,
        Utc::now().to_rfc2822(),
        serde_json::to_string_pretty(data)?
    ))
}
