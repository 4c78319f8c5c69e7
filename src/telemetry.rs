//! Telemetry metric name constants.
//!
//! Centralised metric names for terralens operations. Consumers install
//! their own `metrics` recorder (e.g. prometheus, statsd); without a
//! recorder installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `terralens_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).
//!
//! # Common labels
//!
//! - `key` — cache key of the request (e.g. "real-time-metrics")
//! - `status` — outcome: "ok" or "error"
//! - `consumer` — name of the polling consumer

/// Total producer invocations made through the cache wrapper.
///
/// Labels: `key`, `status` ("ok" | "error").
pub const PRODUCER_REQUESTS_TOTAL: &str = "terralens_producer_requests_total";

/// Producer invocation duration in seconds.
///
/// Labels: `key`.
pub const PRODUCER_DURATION_SECONDS: &str = "terralens_producer_duration_seconds";

/// Total fresh cache hits (entry present and inside the freshness window).
///
/// Labels: `key`.
pub const CACHE_HITS_TOTAL: &str = "terralens_cache_hits_total";

/// Total cache misses (no entry, or entry past the freshness window).
///
/// Labels: `key`.
pub const CACHE_MISSES_TOTAL: &str = "terralens_cache_misses_total";

/// Total stale entries served after a producer failure.
///
/// Labels: `key`.
pub const STALE_SERVES_TOTAL: &str = "terralens_stale_serves_total";

/// Total mock datasets served when both the producer and the cache
/// came up empty.
///
/// Labels: `key`.
pub const MOCK_FALLBACKS_TOTAL: &str = "terralens_mock_fallbacks_total";

/// Total fetches executed by polling consumers (timer ticks plus
/// manual refreshes).
///
/// Labels: `consumer`, `status` ("ok" | "error").
pub const POLL_FETCHES_TOTAL: &str = "terralens_poll_fetches_total";
