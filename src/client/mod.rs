//! Sustainability data client.
//!
//! [`SustainabilityClient`] owns the HTTP client and the fetch cache and
//! exposes one typed method per producer. Every method is total: the
//! cache wrapper absorbs producer failures, so callers always get a
//! payload (possibly stale or mock).

mod builder;

pub use builder::{Terralens, TerralensBuilder};

use std::sync::Arc;

use chrono::Utc;
use rand::Rng;
use serde_json::Value;
use tracing::debug;

use crate::cache::FetchCache;
use crate::location::{LocationResolver, ReverseGeocoder};
use crate::poll::{Poller, AIR_QUALITY_POLL_INTERVAL, METRICS_POLL_INTERVAL};
use crate::types::{
    AirQualitySample, CarbonRecord, Coordinates, EnergyRecord, MetricsSnapshot, NearbyLocation,
    Payload,
};
use crate::{mock, producers, GeoSource, Result, TerralensError};

/// Cache key for the real-time metrics snapshot.
pub const KEY_REAL_TIME_METRICS: &str = "real-time-metrics";

/// Cache key for the historical carbon series.
pub const KEY_CARBON_FOOTPRINT: &str = "carbon-footprint";

/// Cache key for the historical energy series.
pub const KEY_ENERGY_DATA: &str = "energy-data";

/// Default radius for nearby-location queries, in kilometres.
pub const DEFAULT_NEARBY_RADIUS_KM: f64 = 50.0;

/// Client for sustainability data, wrapped by a [`FetchCache`].
pub struct SustainabilityClient {
    http: reqwest::Client,
    cache: Arc<FetchCache>,
    air_quality_base: String,
    air_quality_token: String,
    geocoding_base: String,
}

impl SustainabilityClient {
    pub(crate) fn new(
        http: reqwest::Client,
        cache: Arc<FetchCache>,
        air_quality_base: String,
        air_quality_token: String,
        geocoding_base: String,
    ) -> Self {
        Self {
            http,
            cache,
            air_quality_base,
            air_quality_token,
            geocoding_base,
        }
    }

    /// Handle to the underlying fetch cache.
    pub fn cache(&self) -> Arc<FetchCache> {
        Arc::clone(&self.cache)
    }

    /// Current metrics snapshot, re-jittered at most once per freshness
    /// window. Two calls inside the window return identical payloads.
    pub async fn real_time_metrics(&self) -> MetricsSnapshot {
        let payload = self
            .cache
            .fetch_with_cache(KEY_REAL_TIME_METRICS, || async {
                Ok(Payload::Metrics(producers::synth_metrics(
                    &mut rand::thread_rng(),
                    Utc::now(),
                )))
            })
            .await;
        match payload.and_then(Payload::into_metrics) {
            Some(snapshot) => snapshot,
            None => producers::synth_metrics(&mut rand::thread_rng(), Utc::now()),
        }
    }

    /// Historical carbon footprint series.
    pub async fn carbon_footprint_history(&self) -> Vec<CarbonRecord> {
        let payload = self
            .cache
            .fetch_with_cache(KEY_CARBON_FOOTPRINT, || async {
                Ok(Payload::CarbonHistory(mock::carbon_history()))
            })
            .await;
        payload
            .and_then(Payload::into_carbon_history)
            .unwrap_or_else(mock::carbon_history)
    }

    /// Historical energy series.
    pub async fn energy_history(&self) -> Vec<EnergyRecord> {
        let payload = self
            .cache
            .fetch_with_cache(KEY_ENERGY_DATA, || async {
                Ok(Payload::EnergyHistory(mock::energy_history()))
            })
            .await;
        payload
            .and_then(Payload::into_energy_history)
            .unwrap_or_else(mock::energy_history)
    }

    /// Locations scattered within `radius_km` of `center`, sorted by
    /// ascending distance.
    pub async fn nearby_locations(
        &self,
        center: Coordinates,
        radius_km: f64,
    ) -> Vec<NearbyLocation> {
        let key = format!("nearby-{}-{}-{}", center.lat, center.lng, radius_km);
        let payload = self
            .cache
            .fetch_with_cache(&key, || async {
                Ok(Payload::NearbyLocations(producers::synth_nearby(
                    &mut rand::thread_rng(),
                    center,
                    radius_km,
                )))
            })
            .await;
        match payload.and_then(Payload::into_nearby_locations) {
            Some(locations) => locations,
            None => producers::synth_nearby(&mut rand::thread_rng(), center, radius_km),
        }
    }

    /// Air quality at `position`.
    ///
    /// Attempts the live feed; on failure the cache wrapper serves a
    /// stale sample if one exists, else a synthetic one.
    pub async fn air_quality(&self, position: Coordinates) -> AirQualitySample {
        let key = format!("air-quality-{}-{}", position.lat, position.lng);
        let payload = self
            .cache
            .fetch_with_cache(&key, || async {
                let sample = self.fetch_live_air_quality(position).await?;
                Ok(Payload::AirQuality(sample))
            })
            .await;
        payload
            .and_then(Payload::into_air_quality)
            .unwrap_or_else(mock::air_quality)
    }

    /// Fetch and parse one reading from the air quality feed.
    async fn fetch_live_air_quality(&self, position: Coordinates) -> Result<AirQualitySample> {
        let url = format!(
            "{}/geo:{};{}/?token={}",
            self.air_quality_base, position.lat, position.lng, self.air_quality_token
        );
        debug!(%url, "fetching air quality");
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TerralensError::Api {
                status: status.as_u16(),
                message: "air quality feed request failed".to_owned(),
            });
        }

        let body: Value = response.json().await?;
        if body.get("status").and_then(Value::as_str) != Some("ok") {
            return Err(TerralensError::Http(format!(
                "air quality feed returned status {}",
                body.get("status").and_then(Value::as_str).unwrap_or("?")
            )));
        }
        let data = body.get("data").ok_or(TerralensError::EmptyResponse)?;

        // Sub-indices the feed omits are filled with synthetic values,
        // matching the feed's own demo behaviour.
        let mut rng = rand::thread_rng();
        Ok(AirQualitySample {
            aqi: data
                .get("aqi")
                .and_then(Value::as_u64)
                .map(|v| v as u32)
                .unwrap_or_else(|| rng.gen_range(1..=5)),
            co: sub_index(data, "co").unwrap_or_else(|| rng.gen::<f64>() * 1000.0),
            no2: sub_index(data, "no2").unwrap_or_else(|| rng.gen::<f64>() * 100.0),
            o3: sub_index(data, "o3").unwrap_or_else(|| rng.gen::<f64>() * 200.0),
            pm2_5: sub_index(data, "pm25").unwrap_or_else(|| rng.gen::<f64>() * 50.0),
            pm10: sub_index(data, "pm10").unwrap_or_else(|| rng.gen::<f64>() * 100.0),
            location: data
                .get("city")
                .and_then(|c| c.get("name"))
                .and_then(Value::as_str)
                .unwrap_or("Current Location")
                .to_owned(),
            timestamp: Utc::now(),
        })
    }

    /// Location resolver wired to this client's geocoding endpoint.
    pub fn location_resolver(&self, source: Arc<dyn GeoSource>) -> LocationResolver {
        LocationResolver::new(
            source,
            ReverseGeocoder::new(self.http.clone(), self.geocoding_base.clone()),
        )
    }

    /// Spawn a consumer polling the metrics snapshot every 30 seconds.
    pub fn spawn_metrics_poller(self: Arc<Self>) -> Poller<MetricsSnapshot> {
        Poller::spawn("real-time-metrics", METRICS_POLL_INTERVAL, move || {
            let client = Arc::clone(&self);
            async move { Ok(client.real_time_metrics().await) }
        })
    }

    /// Spawn a consumer polling air quality at `position` every five
    /// minutes.
    pub fn spawn_air_quality_poller(
        self: Arc<Self>,
        position: Coordinates,
    ) -> Poller<AirQualitySample> {
        Poller::spawn("air-quality", AIR_QUALITY_POLL_INTERVAL, move || {
            let client = Arc::clone(&self);
            async move { Ok(client.air_quality(position).await) }
        })
    }
}

/// Pull `iaqi.<name>.v` out of a feed payload.
fn sub_index(data: &Value, name: &str) -> Option<f64> {
    data.get("iaqi")?.get(name)?.get("v")?.as_f64()
}
