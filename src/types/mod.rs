//! Public payload types for the Terralens API.

mod air;
mod geo;
mod history;
mod metrics;
mod payload;

pub use air::AirQualitySample;
pub use geo::{Coordinates, NearbyLocation};
pub use history::{CarbonRecord, EnergyRecord};
pub use metrics::{MetricSample, MetricsSnapshot, Trend};
pub use payload::Payload;
