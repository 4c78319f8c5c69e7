//! Cache-and-fallback wrapper.
//!
//! [`FetchCache`] sits between consumers and producers and decides, per
//! request key, whether to serve a cached value, run the producer, or
//! fall back to a static mock dataset. The guarantee is availability:
//! a producer failure never reaches the caller — the wrapper resolves
//! to a cached, fresh, or mock value, trading staleness for uptime.
//!
//! # Freshness vs. eviction
//!
//! The store is a bounded moka cache, but freshness is checked manually
//! against each entry's `stored_at` instead of using moka's TTL. A
//! TTL-evicted entry would be gone by the time the producer fails,
//! which would break the serve-stale-on-error policy; here stale
//! entries stay resident (until LRU pressure) and are only ignored for
//! fresh-hit purposes.
//!
//! # No in-flight de-duplication
//!
//! Two concurrent calls with the same key before the first resolves
//! both invoke the producer, and whichever resolves last overwrites the
//! entry. Callers must not assume an at-most-once-in-flight guarantee.

use std::future::Future;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::mock;
use crate::telemetry;
use crate::types::Payload;
use crate::Result;

/// Default maximum number of entries in the fetch cache.
const DEFAULT_MAX_ENTRIES: u64 = 1_000;

/// Default freshness window — five minutes, matching the dashboard's
/// refresh cadence.
const DEFAULT_FRESHNESS: Duration = Duration::from_secs(5 * 60);

/// Configuration for the fetch cache.
///
/// ```rust
/// # use terralens::CacheConfig;
/// # use std::time::Duration;
/// let config = CacheConfig::new()
///     .max_entries(500)
///     .freshness(Duration::from_secs(60));
/// ```
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of resident entries. Default: 1,000.
    pub max_entries: u64,
    /// How long an entry counts as fresh. Default: 5 minutes.
    pub freshness: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_ENTRIES,
            freshness: DEFAULT_FRESHNESS,
        }
    }
}

impl CacheConfig {
    /// Create a new config with the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of resident entries.
    pub fn max_entries(mut self, n: u64) -> Self {
        self.max_entries = n;
        self
    }

    /// Set the freshness window.
    pub fn freshness(mut self, window: Duration) -> Self {
        self.freshness = window;
        self
    }
}

/// One stored payload with its insertion time.
#[derive(Clone)]
struct CacheEntry {
    payload: Payload,
    stored_at: Instant,
}

/// Keyed cache-and-fallback store.
///
/// Constructed explicitly and shared by reference between consumers —
/// there is no process-wide singleton.
pub struct FetchCache {
    entries: moka::sync::Cache<String, CacheEntry>,
    freshness: Duration,
}

impl FetchCache {
    /// Create a cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            entries: moka::sync::Cache::new(config.max_entries),
            freshness: config.freshness,
        }
    }

    /// Serve `key` from cache, the producer, or a mock fallback.
    ///
    /// - Fresh entry (inside the freshness window): returned without
    ///   invoking `producer`.
    /// - Otherwise the producer runs. On success the result is stored
    ///   and returned.
    /// - On producer failure, a stale entry is served if one exists;
    ///   failing that, the mock dataset for the key's category. Keys
    ///   outside every known category resolve to `None` — the only case
    ///   a caller has to handle.
    pub async fn fetch_with_cache<F, Fut>(&self, key: &str, producer: F) -> Option<Payload>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Payload>>,
    {
        let cached = self.entries.get(key);
        if let Some(entry) = &cached {
            if entry.stored_at.elapsed() < self.freshness {
                metrics::counter!(telemetry::CACHE_HITS_TOTAL, "key" => key.to_owned())
                    .increment(1);
                return Some(entry.payload.clone());
            }
        }
        metrics::counter!(telemetry::CACHE_MISSES_TOTAL, "key" => key.to_owned()).increment(1);

        let start = Instant::now();
        match producer().await {
            Ok(payload) => {
                metrics::counter!(telemetry::PRODUCER_REQUESTS_TOTAL,
                    "key" => key.to_owned(), "status" => "ok")
                .increment(1);
                metrics::histogram!(telemetry::PRODUCER_DURATION_SECONDS, "key" => key.to_owned())
                    .record(start.elapsed().as_secs_f64());
                self.entries.insert(
                    key.to_owned(),
                    CacheEntry {
                        payload: payload.clone(),
                        stored_at: Instant::now(),
                    },
                );
                Some(payload)
            }
            Err(err) => {
                metrics::counter!(telemetry::PRODUCER_REQUESTS_TOTAL,
                    "key" => key.to_owned(), "status" => "error")
                .increment(1);
                warn!(key, error = %err, "producer failed");
                if let Some(entry) = cached {
                    metrics::counter!(telemetry::STALE_SERVES_TOTAL, "key" => key.to_owned())
                        .increment(1);
                    debug!(key, "serving stale entry");
                    Some(entry.payload.clone())
                } else {
                    metrics::counter!(telemetry::MOCK_FALLBACKS_TOTAL, "key" => key.to_owned())
                        .increment(1);
                    debug!(key, "serving mock fallback");
                    mock_for_key(key)
                }
            }
        }
    }

    /// Number of resident entries (fresh and stale).
    pub fn len(&self) -> u64 {
        self.entries.run_pending_tasks();
        self.entries.entry_count()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Evict all entries.
    pub fn clear(&self) {
        self.entries.invalidate_all();
    }
}

impl Default for FetchCache {
    fn default() -> Self {
        Self::new(&CacheConfig::default())
    }
}

/// Mock dataset for a key's category, or `None` for unknown categories.
fn mock_for_key(key: &str) -> Option<Payload> {
    if key.starts_with("carbon-footprint") {
        Some(Payload::CarbonHistory(mock::carbon_history()))
    } else if key.starts_with("energy-data") {
        Some(Payload::EnergyHistory(mock::energy_history()))
    } else if key.starts_with("air-quality") {
        Some(Payload::AirQuality(mock::air_quality()))
    } else {
        None
    }
}
