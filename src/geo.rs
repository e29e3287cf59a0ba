//! Geographic value types consumed by the planner.

use serde::{Deserialize, Serialize};

use crate::error::GeoError;

/// A (latitude, longitude) pair in decimal degrees.
///
/// Construction does not validate ranges; the planner treats whatever it is
/// given as numbers. Callers wanting range checks use [`GeoPoint::validated`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Builds a point, rejecting non-finite or out-of-range coordinates.
    pub fn validated(lat: f64, lng: f64) -> Result<Self, GeoError> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(GeoError::NonFinite);
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(GeoError::LatitudeOutOfRange(lat));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(GeoError::LongitudeOutOfRange(lng));
        }
        Ok(Self { lat, lng })
    }

    /// True when both coordinates are finite and within range.
    pub fn is_valid(&self) -> bool {
        Self::validated(self.lat, self.lng).is_ok()
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

/// A location to visit during a collection route.
///
/// Identifiers are not required to be unique; duplicates are routed as
/// independent stops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub id: String,
    pub label: String,
    pub position: GeoPoint,
}

impl Stop {
    pub fn new(id: impl Into<String>, label: impl Into<String>, position: GeoPoint) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            position,
        }
    }
}
