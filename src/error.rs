//! Error types.
//!
//! Routing itself never fails; these cover caller-side coordinate
//! validation and the classifier collaborator.

use thiserror::Error;

/// Rejected coordinates from [`GeoPoint::validated`](crate::geo::GeoPoint::validated).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
    #[error("coordinates must be finite")]
    NonFinite,
}

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("classifier request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("failed to read image: {0}")]
    Io(#[from] std::io::Error),
    #[error("classifier returned status {0}")]
    Status(u16),
    #[error("classifier reported unhealthy status {0:?}")]
    Unhealthy(String),
}
