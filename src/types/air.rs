//! Air quality sample type

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Air quality reading for a coordinate.
///
/// `aqi` follows the 1-5 index scale; the remaining fields are raw
/// pollutant sub-indices as reported by the feed (or synthesized when
/// the feed omits them).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirQualitySample {
    pub aqi: u32,
    pub co: f64,
    pub no2: f64,
    pub o3: f64,
    pub pm2_5: f64,
    pub pm10: f64,
    pub location: String,
    pub timestamp: DateTime<Utc>,
}
