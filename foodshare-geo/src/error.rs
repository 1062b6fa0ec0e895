//! Error types for the geospatial core.

use thiserror::Error;

/// Errors raised at the coordinate-acceptance boundary.
///
/// The distance, filter, and sort operations themselves never fail; malformed
/// coordinates degrade to `NaN` distances, which callers treat as
/// unknown/excluded. Validation only happens when a [`crate::GeoPoint`] is
/// constructed or a radius selector is parsed.
#[derive(Debug, Error, PartialEq)]
pub enum GeoError {
    #[error("latitude must be between -90 and 90 degrees, got: {0}")]
    InvalidLatitude(f64),

    #[error("longitude must be between -180 and 180 degrees, got: {0}")]
    InvalidLongitude(f64),

    #[error("invalid radius selector: {0:?}")]
    InvalidRadius(String),
}

/// Result type for geospatial operations.
pub type GeoResult<T> = Result<T, GeoError>;
