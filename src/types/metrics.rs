//! Real-time metric sample types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Direction a metric moved in since the previous sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

/// One metric reading.
///
/// Samples are generated independently; no relationship between the
/// three dashboard metrics is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricSample {
    pub current: i64,
    /// Percentage-point movement since the previous sample.
    pub change: i64,
    pub trend: Trend,
    pub last_updated: DateTime<Utc>,
}

/// Snapshot of the three dashboard metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub carbon_footprint: MetricSample,
    pub energy_intensity: MetricSample,
    pub energy_consumption: MetricSample,
}
