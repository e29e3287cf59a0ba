//! waste-router core
//!
//! Greedy collection routing over geographic stops, plus the classifier
//! collaborator that decides which bin an item belongs to.

pub mod error;
pub mod geo;
pub mod traits;
pub mod haversine;
pub mod planar;
pub mod polyline;
pub mod solver;
pub mod collection;
pub mod waste;
pub mod classifier;
