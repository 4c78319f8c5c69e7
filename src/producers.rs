//! Synthetic data producers.
//!
//! Each function synthesizes a quasi-random payload jittered around
//! fixed baselines. Values are cosmetic; the only numerically
//! meaningful step is the nearby-location scatter, which places points
//! with a polar offset and sorts them by ascending distance.
//!
//! All functions take the RNG by argument so tests can seed a
//! [`rand::rngs::StdRng`] and get reproducible output.

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::geo;
use crate::types::{
    AirQualitySample, Coordinates, MetricSample, MetricsSnapshot, NearbyLocation, Trend,
};

/// Global carbon footprint baseline (kt CO2e).
pub const CARBON_FOOTPRINT_BASELINE: i64 = 45_048;

/// Energy intensity baseline (MJ per unit GDP).
pub const ENERGY_INTENSITY_BASELINE: i64 = 123;

/// Energy consumption baseline (TJ).
pub const ENERGY_CONSUMPTION_BASELINE: i64 = 47_790_662;

/// Number of locations the nearby scatter produces.
pub const NEARBY_LOCATION_COUNT: usize = 8;

/// Names assigned to scattered locations, in generation order.
pub const NEIGHBORHOOD_NAMES: [&str; 12] = [
    "Downtown",
    "Midtown",
    "Uptown",
    "Riverside",
    "Hillside",
    "Central District",
    "Business District",
    "Residential Area",
    "Industrial Zone",
    "Green Valley",
    "Tech Hub",
    "Historic District",
];

/// Synthesize a metrics snapshot.
///
/// The three samples are jittered independently around their baselines;
/// nothing ties them together.
pub fn synth_metrics<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> MetricsSnapshot {
    MetricsSnapshot {
        carbon_footprint: MetricSample {
            current: CARBON_FOOTPRINT_BASELINE + rng.gen_range(-500..500),
            change: rng.gen_range(-10..10),
            trend: if rng.gen::<f64>() > 0.5 {
                Trend::Up
            } else {
                Trend::Down
            },
            last_updated: now,
        },
        energy_intensity: MetricSample {
            current: ENERGY_INTENSITY_BASELINE + rng.gen_range(-5..5),
            change: rng.gen_range(-7..8),
            trend: if rng.gen::<f64>() > 0.6 {
                Trend::Down
            } else {
                Trend::Up
            },
            last_updated: now,
        },
        energy_consumption: MetricSample {
            current: ENERGY_CONSUMPTION_BASELINE + rng.gen_range(-50_000..50_000),
            change: rng.gen_range(-15..15),
            trend: if rng.gen::<f64>() > 0.4 {
                Trend::Down
            } else {
                Trend::Up
            },
            last_updated: now,
        },
    }
}

/// Synthesize an air quality sample for `location`.
pub fn synth_air_quality<R: Rng + ?Sized>(
    rng: &mut R,
    location: &str,
    now: DateTime<Utc>,
) -> AirQualitySample {
    AirQualitySample {
        aqi: rng.gen_range(1..=5),
        co: rng.gen::<f64>() * 1000.0,
        no2: rng.gen::<f64>() * 100.0,
        o3: rng.gen::<f64>() * 200.0,
        pm2_5: rng.gen::<f64>() * 50.0,
        pm10: rng.gen::<f64>() * 100.0,
        location: location.to_owned(),
        timestamp: now,
    }
}

/// Scatter [`NEARBY_LOCATION_COUNT`] locations around `center`.
///
/// Each point gets a random distance in `[0, radius_km)` and a random
/// bearing, offset with [`geo::offset`]. The returned list is sorted by
/// ascending distance (rounded to 0.1 km, as displayed).
pub fn synth_nearby<R: Rng + ?Sized>(
    rng: &mut R,
    center: Coordinates,
    radius_km: f64,
) -> Vec<NearbyLocation> {
    let mut locations: Vec<NearbyLocation> = (0..NEARBY_LOCATION_COUNT)
        .map(|i| {
            let distance = rng.gen::<f64>() * radius_km;
            let bearing = rng.gen::<f64>() * std::f64::consts::TAU;
            let name = NEIGHBORHOOD_NAMES
                .get(i)
                .map(|n| (*n).to_owned())
                .unwrap_or_else(|| format!("Area {}", i + 1));
            NearbyLocation {
                name,
                distance: (distance * 10.0).round() / 10.0,
                air_quality: rng.gen_range(1..=5),
                carbon_footprint: rng.gen_range(20..120),
                energy_efficiency: rng.gen_range(60..100),
                coordinates: geo::offset(center, distance, bearing),
            }
        })
        .collect();
    locations.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    locations
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn metrics_stay_inside_jitter_bands() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let snapshot = synth_metrics(&mut rng, Utc::now());
            let carbon = snapshot.carbon_footprint.current - CARBON_FOOTPRINT_BASELINE;
            assert!((-500..500).contains(&carbon));
            let intensity = snapshot.energy_intensity.current - ENERGY_INTENSITY_BASELINE;
            assert!((-5..5).contains(&intensity));
            let consumption = snapshot.energy_consumption.current - ENERGY_CONSUMPTION_BASELINE;
            assert!((-50_000..50_000).contains(&consumption));
        }
    }

    #[test]
    fn seeded_metrics_are_reproducible() {
        let now = Utc::now();
        let a = synth_metrics(&mut StdRng::seed_from_u64(42), now);
        let b = synth_metrics(&mut StdRng::seed_from_u64(42), now);
        assert_eq!(a, b);
    }

    #[test]
    fn air_quality_fields_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let sample = synth_air_quality(&mut rng, "Test", Utc::now());
            assert!((1..=5).contains(&sample.aqi));
            assert!(sample.co < 1000.0);
            assert!(sample.pm2_5 < 50.0);
        }
    }

    #[test]
    fn nearby_names_come_from_fixed_list() {
        let mut rng = StdRng::seed_from_u64(11);
        let center = Coordinates::new(40.7128, -74.006);
        let locations = synth_nearby(&mut rng, center, 50.0);
        assert_eq!(locations.len(), NEARBY_LOCATION_COUNT);
        for location in &locations {
            assert!(NEIGHBORHOOD_NAMES.contains(&location.name.as_str()));
        }
    }
}
