//! Historical series record types

use serde::{Deserialize, Serialize};

/// One year of carbon footprint data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarbonRecord {
    pub year: String,
    pub value: i64,
    pub region: String,
    pub source: String,
}

/// One year of energy data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyRecord {
    pub year: String,
    pub intensity: i64,
    pub consumption: i64,
    pub renewable_percentage: u8,
    pub region: String,
}
