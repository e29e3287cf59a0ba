//! Collection route planner (greedy nearest-neighbor).
//!
//! Builds a single tour from an origin by always travelling to the closest
//! unvisited stop. Not optimal; intended for a handful to a few dozen stops,
//! where the O(n²) scan is cheap and no spatial index is needed.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::geo::{GeoPoint, Stop};
use crate::haversine::Haversine;
use crate::polyline::Polyline;
use crate::traits::DistanceMetric;

/// Output of one planning call. Recomputed fresh every time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResult {
    /// Input stops in visiting order.
    pub ordered_stops: Vec<Stop>,
    /// Sum of leg distances including origin to first stop, rounded to 2 dp.
    pub total_distance: f64,
    /// Origin followed by each visited stop's position.
    pub path: Polyline,
}

impl RouteResult {
    fn empty(origin: GeoPoint) -> Self {
        Self {
            ordered_stops: Vec::new(),
            total_distance: 0.0,
            path: Polyline::new(vec![origin]),
        }
    }

    /// Identifiers of the visited stops, in order.
    pub fn stop_ids(&self) -> Vec<&str> {
        self.ordered_stops.iter().map(|stop| stop.id.as_str()).collect()
    }
}

/// One independent planning input, for batch planning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub origin: GeoPoint,
    pub stops: Vec<Stop>,
}

/// Plan a route over `stops` from `origin` using great-circle distance (km).
pub fn plan_route(origin: GeoPoint, stops: &[Stop]) -> RouteResult {
    plan_route_with(origin, stops, &Haversine)
}

/// Plan a route with an arbitrary distance metric.
///
/// Ties go to the stop that comes first in the caller's order. NaN distances
/// never compare less than anything, so a NaN candidate is only picked when
/// it is the first one scanned.
pub fn plan_route_with<M: DistanceMetric>(origin: GeoPoint, stops: &[Stop], metric: &M) -> RouteResult {
    if stops.is_empty() {
        debug!("no stops to plan, returning empty route");
        return RouteResult::empty(origin);
    }

    let mut remaining: Vec<&Stop> = stops.iter().collect();
    let mut ordered: Vec<Stop> = Vec::with_capacity(stops.len());
    let mut current = origin;
    let mut total = 0.0;

    while !remaining.is_empty() {
        let (next_idx, leg) = nearest(current, &remaining, metric);

        // Vec::remove keeps the relative order of the rest, which the
        // tie-break depends on.
        let stop = remaining.remove(next_idx);
        trace!(stop_id = %stop.id, leg, "selected next stop");

        total += leg;
        current = stop.position;
        ordered.push(stop.clone());
    }

    let mut path = Vec::with_capacity(ordered.len() + 1);
    path.push(origin);
    path.extend(ordered.iter().map(|stop| stop.position));

    let total_distance = round_to_cents(total);
    debug!(stops = ordered.len(), total_distance, "planned route");

    RouteResult {
        ordered_stops: ordered,
        total_distance,
        path: Polyline::new(path),
    }
}

/// Plan many independent requests in parallel. Output order matches input.
pub fn plan_routes(requests: &[PlanRequest]) -> Vec<RouteResult> {
    requests
        .par_iter()
        .map(|request| plan_route(request.origin, &request.stops))
        .collect()
}

/// Index and distance of the closest stop; leftmost wins on exact ties.
///
/// `remaining` must be non-empty.
fn nearest<M: DistanceMetric>(from: GeoPoint, remaining: &[&Stop], metric: &M) -> (usize, f64) {
    let mut best_idx = 0;
    let mut best_dist = metric.distance(from, remaining[0].position);

    for (idx, stop) in remaining.iter().enumerate().skip(1) {
        let dist = metric.distance(from, stop.position);
        if dist < best_dist {
            best_idx = idx;
            best_dist = dist;
        }
    }

    (best_idx, best_dist)
}

/// Only the final total is rounded; legs stay exact while accumulating.
fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
