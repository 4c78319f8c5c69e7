//! Builder for configuring client instances

use std::sync::Arc;
use std::time::Duration;

use super::SustainabilityClient;
use crate::cache::{CacheConfig, FetchCache};
use crate::{Result, TerralensError};

/// Default air quality feed (World Air Quality Index).
const DEFAULT_AIR_QUALITY_BASE: &str = "https://api.waqi.info/feed";

/// The public demo token; real deployments supply their own.
const DEFAULT_AIR_QUALITY_TOKEN: &str = "demo";

/// Default reverse geocoding service.
const DEFAULT_GEOCODING_BASE: &str = "https://api.bigdatacloud.net/data";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Main entry point for creating client instances.
pub struct Terralens;

impl Terralens {
    /// Create a new builder for configuring the client.
    pub fn builder() -> TerralensBuilder {
        TerralensBuilder::new()
    }
}

/// Builder for configuring client instances.
pub struct TerralensBuilder {
    air_quality_base: String,
    air_quality_token: String,
    geocoding_base: String,
    timeout: Duration,
    cache: CacheConfig,
}

impl TerralensBuilder {
    pub fn new() -> Self {
        Self {
            air_quality_base: DEFAULT_AIR_QUALITY_BASE.to_owned(),
            air_quality_token: DEFAULT_AIR_QUALITY_TOKEN.to_owned(),
            geocoding_base: DEFAULT_GEOCODING_BASE.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            cache: CacheConfig::default(),
        }
    }

    /// Override the air quality feed base URL (tests point this at a
    /// local mock server).
    pub fn air_quality_base(mut self, base: impl Into<String>) -> Self {
        self.air_quality_base = base.into();
        self
    }

    /// Set the air quality feed API token.
    pub fn air_quality_token(mut self, token: impl Into<String>) -> Self {
        self.air_quality_token = token.into();
        self
    }

    /// Override the reverse geocoding base URL.
    pub fn geocoding_base(mut self, base: impl Into<String>) -> Self {
        self.geocoding_base = base.into();
        self
    }

    /// Set the HTTP request timeout. Default: 10 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Configure the fetch cache (capacity, freshness window).
    pub fn cache(mut self, config: CacheConfig) -> Self {
        self.cache = config;
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<SustainabilityClient> {
        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| TerralensError::Configuration(e.to_string()))?;
        Ok(SustainabilityClient::new(
            http,
            Arc::new(FetchCache::new(&self.cache)),
            self.air_quality_base,
            self.air_quality_token,
            self.geocoding_base,
        ))
    }
}

impl Default for TerralensBuilder {
    fn default() -> Self {
        Self::new()
    }
}
