//! Planar (Euclidean) metric for synthetic demo grids.
//!
//! The dashboard's fixed demo bins sit on an abstract x/y grid rather than
//! real coordinates. They are carried as `GeoPoint`s with `lng = x` and
//! `lat = y`, and measured with straight-line distance in grid units.

use crate::geo::GeoPoint;
use crate::traits::DistanceMetric;

/// Straight-line distance in grid units.
#[derive(Debug, Clone, Copy, Default)]
pub struct Planar;

impl DistanceMetric for Planar {
    fn distance(&self, a: GeoPoint, b: GeoPoint) -> f64 {
        (a.lng - b.lng).hypot(a.lat - b.lat)
    }
}
