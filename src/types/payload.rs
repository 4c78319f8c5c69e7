//! Cacheable payload union

use serde::{Deserialize, Serialize};

use super::{AirQualitySample, CarbonRecord, EnergyRecord, MetricsSnapshot, NearbyLocation};

/// Value stored in the fetch cache — one variant per producer family.
///
/// The cache is keyed by an opaque string (producer name plus
/// parameters), so the variant for a given key never changes within a
/// process lifetime. The typed accessors below let callers recover the
/// concrete payload without matching on every variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Payload {
    Metrics(MetricsSnapshot),
    AirQuality(AirQualitySample),
    CarbonHistory(Vec<CarbonRecord>),
    EnergyHistory(Vec<EnergyRecord>),
    NearbyLocations(Vec<NearbyLocation>),
}

impl Payload {
    pub fn into_metrics(self) -> Option<MetricsSnapshot> {
        match self {
            Payload::Metrics(m) => Some(m),
            _ => None,
        }
    }

    pub fn into_air_quality(self) -> Option<AirQualitySample> {
        match self {
            Payload::AirQuality(a) => Some(a),
            _ => None,
        }
    }

    pub fn into_carbon_history(self) -> Option<Vec<CarbonRecord>> {
        match self {
            Payload::CarbonHistory(c) => Some(c),
            _ => None,
        }
    }

    pub fn into_energy_history(self) -> Option<Vec<EnergyRecord>> {
        match self {
            Payload::EnergyHistory(e) => Some(e),
            _ => None,
        }
    }

    pub fn into_nearby_locations(self) -> Option<Vec<NearbyLocation>> {
        match self {
            Payload::NearbyLocations(n) => Some(n),
            _ => None,
        }
    }
}
