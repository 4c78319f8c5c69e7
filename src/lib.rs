//! Terralens - cached data client for sustainability dashboards
//!
//! This crate provides the data layer behind a sustainability-analytics
//! dashboard: typed producers for real-time metrics, air quality,
//! historical series and nearby locations, all wrapped by a
//! cache-and-fallback layer ([`FetchCache`]) that trades staleness for
//! availability. A producer failure is absorbed by serving a stale
//! entry or a static mock dataset, never surfaced to the caller.
//!
//! # Example
//!
//! ```rust,no_run
//! use terralens::Terralens;
//!
//! #[tokio::main]
//! async fn main() -> terralens::Result<()> {
//!     let client = Terralens::builder().build()?;
//!
//!     let metrics = client.real_time_metrics().await;
//!     println!(
//!         "carbon footprint: {} ({:?})",
//!         metrics.carbon_footprint.current, metrics.carbon_footprint.trend,
//!     );
//!     Ok(())
//! }
//! ```
//!
//! # Polling
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use terralens::Terralens;
//!
//! #[tokio::main]
//! async fn main() -> terralens::Result<()> {
//!     let client = Arc::new(Terralens::builder().build()?);
//!     let poller = Arc::clone(&client).spawn_metrics_poller();
//!
//!     let snapshot = poller.snapshot();
//!     if let Some(metrics) = snapshot.data {
//!         println!("{}", metrics.energy_intensity.current);
//!     }
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod client;
pub mod error;
pub mod export;
pub mod geo;
pub mod location;
pub mod mock;
pub mod poll;
pub mod producers;
pub mod telemetry;
pub mod types;

// Re-export main types at crate root
pub use cache::{CacheConfig, FetchCache};
pub use client::{SustainabilityClient, Terralens, TerralensBuilder};
pub use error::{Result, TerralensError};
pub use export::{DataKind, ExportFormat};
pub use location::{
    FixedPosition, GeoSource, LocationResolver, PlaceLabels, ResolvedLocation, ReverseGeocoder,
    DEFAULT_POSITION,
};
pub use poll::{PollSnapshot, Poller};

// Re-export all payload types
pub use types::{
    AirQualitySample, CarbonRecord, Coordinates, EnergyRecord, MetricSample, MetricsSnapshot,
    NearbyLocation, Payload, Trend,
};
