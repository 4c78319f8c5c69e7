//! Coordinate geometry helpers.
//!
//! The nearby-location producer scatters points around a center using a
//! flat-earth polar offset: a degree of latitude is treated as a fixed
//! 111 km, and the longitude step is stretched by `1 / cos(lat)`. Good
//! to well under 1% at dashboard radii (tens of kilometres); not valid
//! near the poles.

use crate::types::Coordinates;

/// Kilometres per degree of latitude.
const KM_PER_DEGREE: f64 = 111.0;

/// Mean Earth radius in kilometres (for [`haversine_km`]).
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Offset `center` by `distance_km` along `bearing_rad` (radians,
/// 0 = north, clockwise).
pub fn offset(center: Coordinates, distance_km: f64, bearing_rad: f64) -> Coordinates {
    let delta_lat = (distance_km / KM_PER_DEGREE) * bearing_rad.cos();
    let delta_lng =
        (distance_km / (KM_PER_DEGREE * center.lat.to_radians().cos())) * bearing_rad.sin();
    Coordinates {
        lat: center.lat + delta_lat,
        lng: center.lng + delta_lng,
    }
}

/// Great-circle distance between two coordinates in kilometres.
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const NYC: Coordinates = Coordinates {
        lat: 40.7128,
        lng: -74.006,
    };

    #[test]
    fn zero_distance_is_identity() {
        let p = offset(NYC, 0.0, 1.234);
        assert_relative_eq!(p.lat, NYC.lat);
        assert_relative_eq!(p.lng, NYC.lng);
    }

    #[test]
    fn due_north_moves_latitude_only() {
        let p = offset(NYC, 11.1, 0.0);
        assert_relative_eq!(p.lat, NYC.lat + 0.1, epsilon = 1e-9);
        assert_relative_eq!(p.lng, NYC.lng, epsilon = 1e-9);
    }

    #[test]
    fn due_east_moves_longitude_only() {
        let p = offset(NYC, 10.0, std::f64::consts::FRAC_PI_2);
        assert_relative_eq!(p.lat, NYC.lat, epsilon = 1e-9);
        assert!(p.lng > NYC.lng);
    }

    #[test]
    fn offset_round_trips_through_haversine() {
        // The flat-earth offset should agree with the great-circle
        // distance to within 1% at dashboard radii.
        for (distance, bearing) in [(5.0, 0.7), (20.0, 2.1), (50.0, 4.4)] {
            let p = offset(NYC, distance, bearing);
            let measured = haversine_km(NYC, p);
            assert_relative_eq!(measured, distance, max_relative = 0.01);
        }
    }

    #[test]
    fn haversine_is_symmetric() {
        let p = Coordinates::new(41.0, -73.5);
        assert_relative_eq!(haversine_km(NYC, p), haversine_km(p, NYC));
    }
}
