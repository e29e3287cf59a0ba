//! Polyline representation for route paths.
//!
//! A route path is the origin followed by each visited stop's position.
//! Encoding for map display happens at the UI boundary, not here.

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;
use crate::traits::DistanceMetric;

/// An ordered sequence of points. Serializes as a plain JSON array.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polyline {
    points: Vec<GeoPoint>,
}

impl Polyline {
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<GeoPoint> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sum of consecutive segment lengths under `metric`, unrounded.
    pub fn length_with<M: DistanceMetric>(&self, metric: &M) -> f64 {
        self.points
            .windows(2)
            .map(|pair| metric.distance(pair[0], pair[1]))
            .sum()
    }
}

impl From<Vec<GeoPoint>> for Polyline {
    fn from(points: Vec<GeoPoint>) -> Self {
        Self::new(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planar::Planar;

    #[test]
    fn test_new_and_points() {
        let points = vec![GeoPoint::new(38.5, -120.2), GeoPoint::new(40.7, -120.95)];
        let polyline = Polyline::new(points.clone());
        assert_eq!(polyline.points(), &points[..]);
        assert_eq!(polyline.len(), 2);
    }

    #[test]
    fn test_into_points() {
        let points = vec![GeoPoint::new(1.0, 2.0)];
        let owned = Polyline::new(points.clone()).into_points();
        assert_eq!(owned, points);
    }

    #[test]
    fn test_empty_and_single_point_have_zero_length() {
        assert_eq!(Polyline::default().length_with(&Planar), 0.0);
        assert!(Polyline::default().is_empty());
        let single = Polyline::new(vec![GeoPoint::new(3.0, 3.0)]);
        assert_eq!(single.length_with(&Planar), 0.0);
    }

    #[test]
    fn test_length_sums_segments() {
        let polyline = Polyline::new(vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(3.0, 4.0),
            GeoPoint::new(3.0, 10.0),
        ]);
        assert_eq!(polyline.length_with(&Planar), 11.0);
    }

    #[test]
    fn test_serializes_as_array() {
        let polyline = Polyline::new(vec![GeoPoint::new(1.5, 2.5)]);
        let json = serde_json::to_string(&polyline).unwrap();
        assert_eq!(json, r#"[{"lat":1.5,"lng":2.5}]"#);
    }
}
