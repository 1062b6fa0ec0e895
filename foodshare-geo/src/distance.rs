//! Great-circle distance calculation.

use crate::point::GeoPoint;

/// Earth's mean radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculates the great-circle distance between two points in kilometers
/// using the Haversine formula.
///
/// The result is non-negative, symmetric, and zero (within floating-point
/// epsilon) for identical points. Non-finite coordinate components produce
/// `NaN`; callers treat a `NaN` distance as unknown and exclude the entity
/// rather than failing.
///
/// ## Example
///
/// ```rust
/// use foodshare_geo::{distance_km, GeoPoint};
///
/// let a = GeoPoint::new(0.0, 0.0).unwrap();
/// let b = GeoPoint::new(1.0, 0.0).unwrap();
/// let d = distance_km(a, b);
/// assert!((d - 111.19).abs() < 0.5);
/// ```
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.latitude() - a.latitude()).to_radians();
    let d_lon = (b.longitude() - a.longitude()).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude().to_radians().cos()
            * b.latitude().to_radians().cos()
            * (d_lon / 2.0).sin().powi(2);

    // h can drift just above 1.0 for antipodal points; sqrt(1 - h) would then
    // be NaN. The comparison leaves an actual NaN untouched so non-finite
    // inputs still propagate.
    let h = if h > 1.0 { 1.0 } else { h };

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Calculates the pickup-to-drop-off span of a delivery in kilometers.
///
/// Purely informational (rendered as "X km delivery distance"); never used
/// for filtering or admission decisions.
pub fn delivery_span_km(pickup: GeoPoint, dropoff: GeoPoint) -> f64 {
    distance_km(pickup, dropoff)
}
