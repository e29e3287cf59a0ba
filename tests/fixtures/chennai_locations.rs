//! Chennai collection areas for realistic test fixtures.
//!
//! Approximate neighbourhood centres, good to a few hundred meters.

#![allow(dead_code)]

use waste_router::geo::{GeoPoint, Stop};

/// A named area with coordinates.
#[derive(Debug, Clone)]
pub struct Area {
    pub id: &'static str,
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Area {
    pub const fn new(id: &'static str, name: &'static str, lat: f64, lng: f64) -> Self {
        Self { id, name, lat, lng }
    }

    pub fn point(&self) -> GeoPoint {
        (self.lat, self.lng).into()
    }

    pub fn stop(&self) -> Stop {
        Stop::new(self.id, self.name, self.point())
    }
}

/// City centre used as the depot / route origin.
pub const CITY_CENTRE: GeoPoint = GeoPoint::new(13.08, 80.27);

pub const AREAS: &[Area] = &[
    Area::new("t-nagar", "T. Nagar", 13.0418, 80.2341),
    Area::new("adyar", "Adyar", 13.0012, 80.2565),
    Area::new("anna-nagar", "Anna Nagar", 13.0850, 80.2101),
    Area::new("velachery", "Velachery", 12.9815, 80.2180),
    Area::new("mylapore", "Mylapore", 13.0339, 80.2619),
    Area::new("guindy", "Guindy", 13.0067, 80.2206),
    Area::new("egmore", "Egmore", 13.0732, 80.2609),
    Area::new("tambaram", "Tambaram", 12.9249, 80.1000),
    Area::new("porur", "Porur", 13.0382, 80.1565),
    Area::new("perambur", "Perambur", 13.1210, 80.2330),
];

pub fn area(id: &str) -> &'static Area {
    AREAS
        .iter()
        .find(|area| area.id == id)
        .unwrap_or_else(|| panic!("no fixture area {id}"))
}

pub fn all_stops() -> Vec<Stop> {
    AREAS.iter().map(Area::stop).collect()
}
