//! Geographic point type.
//!
//! A [`GeoPoint`] is a validated longitude/latitude pair. The serialized form
//! is the GeoJSON-style `[longitude, latitude]` array, matching the persisted
//! representation; callers must never transpose the pair at a boundary.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

use crate::error::{GeoError, GeoResult};

/// A geographic point with validated longitude and latitude.
///
/// ## Coordinate Order
///
/// The constructor and all pair conversions are longitude-first, the same
/// convention as the stored `[longitude, latitude]` coordinate arrays.
///
/// ## Example
///
/// ```rust
/// use foodshare_geo::GeoPoint;
///
/// let philly = GeoPoint::new(-75.0, 40.0).unwrap();
/// assert_eq!(philly.longitude(), -75.0);
/// assert_eq!(philly.latitude(), 40.0);
/// assert_eq!(philly.to_lon_lat(), [-75.0, 40.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    longitude: f64,
    latitude: f64,
}

impl GeoPoint {
    /// Creates a new point with validated geographic coordinates.
    ///
    /// # Arguments
    /// * `longitude` - Longitude in degrees (-180 to 180)
    /// * `latitude` - Latitude in degrees (-90 to 90)
    ///
    /// # Errors
    /// Returns an error if either coordinate is out of its valid range.
    pub fn new(longitude: f64, latitude: f64) -> GeoResult<Self> {
        validate_coordinates(longitude, latitude)?;
        Ok(Self {
            longitude,
            latitude,
        })
    }

    /// Creates a point from a `[longitude, latitude]` pair.
    pub fn from_lon_lat(pair: [f64; 2]) -> GeoResult<Self> {
        Self::new(pair[0], pair[1])
    }

    /// Gets the longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Gets the latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Converts to a `[longitude, latitude]` pair.
    pub fn to_lon_lat(&self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }
}

fn validate_coordinates(longitude: f64, latitude: f64) -> GeoResult<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(GeoError::InvalidLatitude(latitude));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(GeoError::InvalidLongitude(longitude));
    }
    Ok(())
}

impl Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GeoPoint(lon={:.6}, lat={:.6})",
            self.longitude, self.latitude
        )
    }
}

impl Serialize for GeoPoint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_lon_lat().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GeoPoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let pair = <[f64; 2]>::deserialize(deserializer)?;
        GeoPoint::from_lon_lat(pair).map_err(serde::de::Error::custom)
    }
}
