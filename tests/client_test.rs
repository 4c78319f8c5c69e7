//! Tests for [`SustainabilityClient`] — cached producers and the live
//! air quality feed.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use terralens::types::Coordinates;
use terralens::{CacheConfig, SustainabilityClient, Terralens};

const QUEENS: Coordinates = Coordinates {
    lat: 40.73,
    lng: -73.79,
};

fn client_for(server_uri: &str) -> SustainabilityClient {
    Terralens::builder()
        .air_quality_base(server_uri)
        .air_quality_token("test-token")
        .build()
        .expect("client should build")
}

fn offline_client() -> SustainabilityClient {
    // Unroutable feed: every live fetch fails fast.
    Terralens::builder()
        .air_quality_base("http://127.0.0.1:9")
        .timeout(Duration::from_millis(500))
        .build()
        .expect("client should build")
}

// =========================================================================
// Real-time metrics
// =========================================================================

#[tokio::test]
async fn metrics_are_identical_within_the_freshness_window() {
    let client = offline_client();

    let first = client.real_time_metrics().await;
    let second = client.real_time_metrics().await;

    assert_eq!(first, second, "no fresh jitter inside the window");
}

#[tokio::test]
async fn metrics_stay_near_their_baselines() {
    let client = offline_client();
    let metrics = client.real_time_metrics().await;

    assert!((metrics.carbon_footprint.current - 45_048).abs() <= 500);
    assert!((metrics.energy_intensity.current - 123).abs() <= 5);
    assert!((metrics.energy_consumption.current - 47_790_662).abs() <= 50_000);
}

// =========================================================================
// Historical series
// =========================================================================

#[tokio::test]
async fn histories_cover_the_same_five_years() {
    let client = offline_client();

    let carbon = client.carbon_footprint_history().await;
    let energy = client.energy_history().await;

    assert_eq!(carbon.len(), 5);
    assert_eq!(energy.len(), 5);
    assert_eq!(carbon[0].year, "2023");
}

// =========================================================================
// Nearby locations
// =========================================================================

#[tokio::test]
async fn nearby_locations_are_cached_per_query() {
    let client = offline_client();

    let first = client.nearby_locations(QUEENS, 50.0).await;
    let second = client.nearby_locations(QUEENS, 50.0).await;
    let other_radius = client.nearby_locations(QUEENS, 25.0).await;

    assert_eq!(first, second, "same key, same scatter");
    assert_ne!(first, other_radius, "radius is part of the key");
}

// =========================================================================
// Air quality feed
// =========================================================================

#[tokio::test]
async fn live_feed_reading_is_parsed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/geo:40\.73;-73\.79/$"))
        .and(query_param("token", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "data": {
                "aqi": 3,
                "iaqi": {
                    "co": { "v": 250.5 },
                    "pm25": { "v": 12.0 },
                },
                "city": { "name": "Queens" },
            },
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let sample = client.air_quality(QUEENS).await;

    assert_eq!(sample.aqi, 3);
    assert_eq!(sample.co, 250.5);
    assert_eq!(sample.pm2_5, 12.0);
    assert_eq!(sample.location, "Queens");
    // Sub-indices the feed omitted are synthesized in range.
    assert!(sample.no2 < 100.0);
    assert!(sample.o3 < 200.0);
}

#[tokio::test]
async fn second_call_inside_window_skips_the_feed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "data": { "aqi": 2, "city": { "name": "Queens" } },
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let first = client.air_quality(QUEENS).await;
    let second = client.air_quality(QUEENS).await;

    assert_eq!(first, second);
    server.verify().await;
}

#[tokio::test]
async fn failing_feed_degrades_to_synthetic_sample() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let sample = client.air_quality(QUEENS).await;

    assert_eq!(sample.location, "Current Location");
    assert!((1..=5).contains(&sample.aqi));
}

#[tokio::test]
async fn feed_error_status_degrades_to_synthetic_sample() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "error",
            "data": "Invalid key",
        })))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let sample = client.air_quality(QUEENS).await;

    assert_eq!(sample.location, "Current Location");
}

#[tokio::test]
async fn failing_feed_after_success_serves_the_stale_reading() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "data": { "aqi": 4, "city": { "name": "Queens" } },
        })))
        .mount(&server)
        .await;

    let client = Terralens::builder()
        .air_quality_base(server.uri())
        .cache(CacheConfig::new().freshness(Duration::from_millis(50)))
        .build()
        .expect("client should build");

    let first = client.air_quality(QUEENS).await;
    assert_eq!(first.location, "Queens");

    // Entry goes stale, then the feed starts failing.
    server.reset().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    tokio::time::sleep(Duration::from_millis(100)).await;

    let second = client.air_quality(QUEENS).await;
    assert_eq!(second, first, "stale reading served on feed failure");
}
