//! Location resolution.
//!
//! A [`GeoSource`] yields the device position; the [`ReverseGeocoder`]
//! turns coordinates into human-readable labels. [`LocationResolver`]
//! combines both and degrades in two steps: geocoding failure keeps the
//! real coordinates with placeholder labels, while a failed or denied
//! position fix substitutes the default coordinate entirely.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use crate::types::Coordinates;
use crate::Result;

/// Fallback position used when no fix is available: New York.
pub const DEFAULT_POSITION: Coordinates = Coordinates {
    lat: 40.7128,
    lng: -74.006,
};

/// Source of the current device position.
///
/// Implementations wrap whatever positioning capability the host
/// platform offers. Denial and timeout surface as errors.
#[async_trait]
pub trait GeoSource: Send + Sync {
    async fn current_position(&self) -> Result<Coordinates>;
}

/// A [`GeoSource`] pinned to a fixed coordinate.
pub struct FixedPosition(pub Coordinates);

#[async_trait]
impl GeoSource for FixedPosition {
    async fn current_position(&self) -> Result<Coordinates> {
        Ok(self.0)
    }
}

/// Human-readable labels for a coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceLabels {
    pub city: String,
    pub country: String,
    pub region: String,
}

/// A resolved location: coordinates plus labels.
///
/// `note` carries a user-facing message when the resolver fell back to
/// the default position.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub country: String,
    pub region: String,
    pub note: Option<String>,
}

/// Reverse geocoding lookup by coordinate.
pub struct ReverseGeocoder {
    http: reqwest::Client,
    base: String,
}

#[derive(Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    locality: Option<String>,
    #[serde(rename = "countryName", default)]
    country_name: Option<String>,
    #[serde(rename = "principalSubdivision", default)]
    principal_subdivision: Option<String>,
}

impl ReverseGeocoder {
    pub fn new(http: reqwest::Client, base: impl Into<String>) -> Self {
        Self {
            http,
            base: base.into(),
        }
    }

    /// Look up labels for `position`.
    pub async fn lookup(&self, position: Coordinates) -> Result<PlaceLabels> {
        let url = format!(
            "{}/reverse-geocode-client?latitude={}&longitude={}&localityLanguage=en",
            self.base, position.lat, position.lng
        );
        let response = self.http.get(&url).send().await?.error_for_status()?;
        let body: GeocodeResponse = response.json().await?;
        Ok(PlaceLabels {
            city: first_non_empty(body.city, body.locality, "Unknown City"),
            country: first_non_empty(body.country_name, None, "Unknown Country"),
            region: first_non_empty(body.principal_subdivision, None, "Unknown Region"),
        })
    }
}

fn first_non_empty(primary: Option<String>, secondary: Option<String>, default: &str) -> String {
    primary
        .filter(|s| !s.is_empty())
        .or_else(|| secondary.filter(|s| !s.is_empty()))
        .unwrap_or_else(|| default.to_owned())
}

/// Resolves the current location, never failing.
pub struct LocationResolver {
    source: Arc<dyn GeoSource>,
    geocoder: ReverseGeocoder,
}

impl LocationResolver {
    pub fn new(source: Arc<dyn GeoSource>, geocoder: ReverseGeocoder) -> Self {
        Self { source, geocoder }
    }

    /// Resolve the current location.
    ///
    /// A denied or failed position fix settles on [`DEFAULT_POSITION`]
    /// with the New York labels and a note; a failed geocode keeps the
    /// real coordinates with placeholder labels.
    pub async fn resolve(&self) -> ResolvedLocation {
        match self.source.current_position().await {
            Ok(position) => match self.geocoder.lookup(position).await {
                Ok(labels) => ResolvedLocation {
                    latitude: position.lat,
                    longitude: position.lng,
                    city: labels.city,
                    country: labels.country,
                    region: labels.region,
                    note: None,
                },
                Err(err) => {
                    warn!(error = %err, "reverse geocoding failed, keeping coordinates");
                    ResolvedLocation {
                        latitude: position.lat,
                        longitude: position.lng,
                        city: "Current Location".to_owned(),
                        country: "Unknown".to_owned(),
                        region: "Unknown".to_owned(),
                        note: None,
                    }
                }
            },
            Err(err) => {
                warn!(error = %err, "geolocation unavailable, using default position");
                ResolvedLocation {
                    latitude: DEFAULT_POSITION.lat,
                    longitude: DEFAULT_POSITION.lng,
                    city: "New York".to_owned(),
                    country: "United States".to_owned(),
                    region: "New York".to_owned(),
                    note: Some("Location access denied. Using default location.".to_owned()),
                }
            }
        }
    }
}
