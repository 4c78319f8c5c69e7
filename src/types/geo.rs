//! Coordinate and nearby-location types

use serde::{Deserialize, Serialize};

/// Geographic coordinate (decimal degrees).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A synthesized location near a query center, with its sustainability
/// indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyLocation {
    pub name: String,
    /// Distance from the query center in kilometres, rounded to 0.1.
    pub distance: f64,
    /// 1-5 air quality index.
    pub air_quality: u32,
    pub carbon_footprint: i64,
    /// 60-99 efficiency score.
    pub energy_efficiency: i64,
    pub coordinates: Coordinates,
}
