//! Haversine great-circle distance.
//!
//! Treats the Earth as a sphere of fixed radius. Ignores roads entirely,
//! which is fine for ordering a few dozen collection stops.

use crate::geo::GeoPoint;
use crate::traits::DistanceMetric;

/// Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance metric in kilometers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Haversine;

impl DistanceMetric for Haversine {
    fn distance(&self, a: GeoPoint, b: GeoPoint) -> f64 {
        haversine_km(a, b)
    }
}

/// Calculate haversine distance between two points in kilometers.
///
/// Inputs are not range-checked: out-of-range coordinates give a defined
/// but meaningless number, and NaN propagates.
pub fn haversine_km(from: GeoPoint, to: GeoPoint) -> f64 {
    let lat1_rad = from.lat.to_radians();
    let lat2_rad = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lng = (to.lng - from.lng).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);

    // Rounding can push h marginally past 1 for antipodal points. Written as
    // a comparison rather than f64::min so NaN still propagates.
    let h = if h > 1.0 { 1.0 } else { h };

    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}
