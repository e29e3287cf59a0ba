//! Test fixtures for waste-router.
//!
//! Provides real Chennai area coordinates and a stop builder.

pub mod chennai_locations;

pub use chennai_locations::*;
