//! Core seams for routing and classification.
//!
//! Concrete metrics and classifiers live in their own modules; the planner
//! and the bin-assignment code only see these traits.

use crate::error::ClassifierError;
use crate::geo::GeoPoint;
use crate::waste::Prediction;

/// Distance between two points, in the metric's own unit.
///
/// Implementations must be pure: no state is carried between calls, so a
/// metric can be shared across planning threads.
pub trait DistanceMetric {
    fn distance(&self, a: GeoPoint, b: GeoPoint) -> f64;
}

impl<M: DistanceMetric + ?Sized> DistanceMetric for &M {
    fn distance(&self, a: GeoPoint, b: GeoPoint) -> f64 {
        (**self).distance(a, b)
    }
}

/// Maps an image to a waste category prediction.
pub trait Classifier {
    fn classify(&self, image: &[u8], filename: Option<&str>) -> Result<Prediction, ClassifierError>;
}
