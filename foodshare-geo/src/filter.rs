//! Proximity filtering of located entities.

use crate::distance::distance_km;
use crate::point::GeoPoint;
use crate::radius::SearchRadius;

/// A domain record carrying an optional geographic point.
///
/// Food items and delivery requests expose their pickup point through this
/// trait; the filter and sort operations match on the optional point
/// explicitly instead of scattering null guards across call sites. The
/// geospatial core only ever reads the point, it never mutates the entity.
pub trait Located {
    /// The entity's geographic point, if it has a usable one.
    fn location(&self) -> Option<GeoPoint>;
}

impl Located for GeoPoint {
    fn location(&self) -> Option<GeoPoint> {
        Some(*self)
    }
}

impl<T: Located> Located for &T {
    fn location(&self) -> Option<GeoPoint> {
        (*self).location()
    }
}

/// Returns the entities within `radius` of `origin`, in input order.
///
/// Policy:
/// - [`SearchRadius::Unbounded`] is a distinct code path: every entity is
///   returned unchanged, no distance is computed, and no origin is required.
/// - With a bounded radius, an entity passes iff it has a point and its
///   distance from the origin is at most the radius (inclusive boundary).
///   Entities without a point are excluded, not errored; a `NaN` distance
///   counts as unknown and excludes the entity.
/// - When no origin is available the caller has nothing to measure from, so
///   the entities are returned unchanged (mirroring the "location denied"
///   behavior of the radius selector).
///
/// The input is never mutated; a radius of exactly `0` keeps only entities
/// co-located with the origin.
pub fn within_radius<E>(origin: Option<GeoPoint>, entities: &[E], radius: SearchRadius) -> Vec<E>
where
    E: Located + Clone,
{
    let (origin, radius_km) = match (origin, radius) {
        (_, SearchRadius::Unbounded) => return entities.to_vec(),
        (None, SearchRadius::Bounded(_)) => return entities.to_vec(),
        (Some(origin), SearchRadius::Bounded(km)) => (origin, km),
    };

    entities
        .iter()
        .filter(|entity| match entity.location() {
            Some(point) => distance_km(origin, point) <= radius_km,
            None => false,
        })
        .cloned()
        .collect()
}
