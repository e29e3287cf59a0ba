//! Fill-threshold bin collection.
//!
//! Only bins at or above the fill threshold are worth a visit; the rest are
//! skipped and the selected ones are toured with the route planner.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::geo::{GeoPoint, Stop};
use crate::haversine::Haversine;
use crate::polyline::Polyline;
use crate::solver::plan_route_with;
use crate::traits::DistanceMetric;

/// Fill percentage at which a bin is scheduled for pickup.
pub const DEFAULT_FILL_THRESHOLD: i32 = 80;

/// Depot of the demo grid.
pub const DEMO_DEPOT: GeoPoint = GeoPoint::new(0.0, 0.0);

/// A dustbin with its current fill level (percent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bin {
    pub id: String,
    #[serde(default)]
    pub label: String,
    pub position: GeoPoint,
    /// Not clamped; values outside 0..=100 are compared as given.
    pub fill: i32,
}

impl Bin {
    pub fn new(id: impl Into<String>, position: GeoPoint, fill: i32) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
            position,
            fill,
        }
    }

    /// True when the bin is at or above `threshold`.
    pub fn needs_pickup(&self, threshold: i32) -> bool {
        self.fill >= threshold
    }

    /// Unlabelled bins are shown by id.
    fn to_stop(&self) -> Stop {
        let label = if self.label.is_empty() { &self.id } else { &self.label };
        Stop::new(self.id.clone(), label.clone(), self.position)
    }
}

/// Bins to consider and the fill level that triggers a pickup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionRequest {
    pub bins: Vec<Bin>,
    #[serde(default = "default_threshold")]
    pub threshold: i32,
}

fn default_threshold() -> i32 {
    DEFAULT_FILL_THRESHOLD
}

impl CollectionRequest {
    pub fn new(bins: Vec<Bin>) -> Self {
        Self {
            bins,
            threshold: DEFAULT_FILL_THRESHOLD,
        }
    }

    pub fn with_threshold(mut self, threshold: i32) -> Self {
        self.threshold = threshold;
        self
    }
}

/// Pickup plan for one collection request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionRoute {
    /// Ids of bins over the threshold, in input order.
    pub selected_bins: Vec<String>,
    /// Ids of selected bins in visiting order.
    pub route: Vec<String>,
    pub total_distance: f64,
    pub threshold: i32,
    pub path: Polyline,
}

/// Plan a pickup route from `depot` using great-circle distance (km).
pub fn plan_collection(depot: GeoPoint, request: &CollectionRequest) -> CollectionRoute {
    plan_collection_with(depot, request, &Haversine)
}

pub fn plan_collection_with<M: DistanceMetric>(
    depot: GeoPoint,
    request: &CollectionRequest,
    metric: &M,
) -> CollectionRoute {
    let stops: Vec<Stop> = request
        .bins
        .iter()
        .filter(|bin| bin.needs_pickup(request.threshold))
        .map(Bin::to_stop)
        .collect();

    debug!(
        selected = stops.len(),
        total = request.bins.len(),
        threshold = request.threshold,
        "selected bins for collection"
    );

    let result = plan_route_with(depot, &stops, metric);

    CollectionRoute {
        selected_bins: stops.into_iter().map(|stop| stop.id).collect(),
        route: result.ordered_stops.into_iter().map(|stop| stop.id).collect(),
        total_distance: result.total_distance,
        threshold: request.threshold,
        path: result.path,
    }
}

/// The four fixed dashboard bins, on the planar demo grid (`lng = x`, `lat = y`).
pub fn demo_bins() -> Vec<Bin> {
    vec![
        Bin::new("A", GeoPoint::new(2.0, 1.0), 90),
        Bin::new("B", GeoPoint::new(1.0, 4.0), 65),
        Bin::new("C", GeoPoint::new(4.0, 6.0), 85),
        Bin::new("D", GeoPoint::new(6.0, 2.0), 75),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planar::Planar;

    #[test]
    fn test_threshold_is_inclusive() {
        let bin = Bin::new("x", DEMO_DEPOT, 80);
        assert!(bin.needs_pickup(80));
        assert!(!bin.needs_pickup(81));
    }

    #[test]
    fn test_demo_bins_default_threshold() {
        let request = CollectionRequest::new(demo_bins());
        let route = plan_collection_with(DEMO_DEPOT, &request, &Planar);

        assert_eq!(route.selected_bins, ["A", "C"]);
        assert_eq!(route.route, ["A", "C"]);
        // sqrt(5) + sqrt(29)
        assert_eq!(route.total_distance, 7.62);
        assert_eq!(route.threshold, 80);
        assert_eq!(route.path.len(), 3);
    }

    #[test]
    fn test_nothing_over_threshold() {
        let request = CollectionRequest::new(demo_bins()).with_threshold(95);
        let route = plan_collection_with(DEMO_DEPOT, &request, &Planar);

        assert!(route.selected_bins.is_empty());
        assert!(route.route.is_empty());
        assert_eq!(route.total_distance, 0.0);
        assert_eq!(route.path.points(), &[DEMO_DEPOT]);
    }

    #[test]
    fn test_low_threshold_visits_all_nearest_first() {
        let request = CollectionRequest::new(demo_bins()).with_threshold(0);
        let route = plan_collection_with(DEMO_DEPOT, &request, &Planar);

        assert_eq!(route.selected_bins, ["A", "B", "C", "D"]);
        // from B(4,1), C(6,4) is sqrt(13) away and D(2,6) is sqrt(29)
        assert_eq!(route.route, ["A", "B", "C", "D"]);
    }

    #[test]
    fn test_request_threshold_defaults_when_missing() {
        let body = r#"{"bins":[{"id":"A","position":{"lat":2.0,"lng":1.0},"fill":90}]}"#;
        let request: CollectionRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.threshold, DEFAULT_FILL_THRESHOLD);
        assert_eq!(request.bins[0].label, "");
        assert_eq!(request.bins[0].to_stop().label, "A");
    }

    #[test]
    fn test_out_of_range_fill_and_threshold_deserialize() {
        let body = r#"{"bins":[
            {"id":"A","position":{"lat":2.0,"lng":1.0},"fill":300},
            {"id":"B","position":{"lat":1.0,"lng":4.0},"fill":-5}
        ],"threshold":-1}"#;
        let request: CollectionRequest = serde_json::from_str(body).unwrap();
        let route = plan_collection_with(DEMO_DEPOT, &request, &Planar);
        assert_eq!(route.selected_bins, ["A"]);
        assert_eq!(route.threshold, -1);

        let request = request.with_threshold(301);
        let route = plan_collection_with(DEMO_DEPOT, &request, &Planar);
        assert!(route.selected_bins.is_empty());
    }

    #[test]
    fn test_response_json_shape() {
        let route = plan_collection_with(DEMO_DEPOT, &CollectionRequest::new(demo_bins()), &Planar);
        let json = serde_json::to_value(&route).unwrap();
        assert_eq!(json["selectedBins"], serde_json::json!(["A", "C"]));
        assert_eq!(json["totalDistance"], 7.62);
        assert_eq!(json["threshold"], 80);
    }
}
