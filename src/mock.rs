//! Static fallback datasets.
//!
//! Served by [`FetchCache`](crate::FetchCache) as the last resort when a
//! producer fails and no cached entry exists. The historical series are
//! fixed fixtures; the air quality fallback is synthesized on each call
//! (the original feed has no meaningful static stand-in).

use crate::producers;
use crate::types::{AirQualitySample, CarbonRecord, EnergyRecord};

/// Five-year global carbon footprint series.
pub fn carbon_history() -> Vec<CarbonRecord> {
    let series = [
        ("2023", 45_048),
        ("2022", 44_200),
        ("2021", 43_100),
        ("2020", 41_800),
        ("2019", 42_500),
    ];
    series
        .into_iter()
        .map(|(year, value)| CarbonRecord {
            year: year.to_owned(),
            value,
            region: "Global".to_owned(),
            source: "Mock Data".to_owned(),
        })
        .collect()
}

/// Five-year global energy series.
pub fn energy_history() -> Vec<EnergyRecord> {
    let series = [
        ("2023", 123, 47_790_662, 32),
        ("2022", 128, 49_324_077, 30),
        ("2021", 135, 48_784_205, 28),
        ("2020", 142, 50_198_706, 25),
        ("2019", 157, 52_198_706, 22),
    ];
    series
        .into_iter()
        .map(
            |(year, intensity, consumption, renewable_percentage)| EnergyRecord {
                year: year.to_owned(),
                intensity,
                consumption,
                renewable_percentage,
                region: "Global".to_owned(),
            },
        )
        .collect()
}

/// Synthetic air quality sample labelled "Current Location".
pub fn air_quality() -> AirQualitySample {
    producers::synth_air_quality(&mut rand::thread_rng(), "Current Location", chrono::Utc::now())
}
