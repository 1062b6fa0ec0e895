//! In-memory spatial index for point-located records.
//!
//! [`GeoIndex`] backs the store's near-query: given a point and a maximum
//! distance it returns matching keys already ordered nearest-first, the same
//! semantics (ascending distance, inclusive boundary) as [`within_radius`]
//! and [`sort_by_proximity`], so client-side re-filtering after a radius
//! change agrees with what the store returns for the same radius.
//!
//! Queries run in two phases: a coarse degree-space bounding-box scan over
//! the R-tree, then precise Haversine refinement to drop false positives.
//!
//! [`within_radius`]: crate::within_radius
//! [`sort_by_proximity`]: crate::sort_by_proximity

use std::cmp::Ordering;
use std::fmt;

use rstar::{RTree, RTreeObject, AABB};

use crate::distance::distance_km;
use crate::point::GeoPoint;
use crate::radius::SearchRadius;

/// Kilometers per degree of latitude (also per degree of longitude at the
/// equator).
const KM_PER_DEGREE: f64 = 111.32;

/// Padding applied to the coarse search box; the Haversine refinement phase
/// discards false positives, so the box only has to avoid false negatives.
const ENVELOPE_PADDING: f64 = 1.05;

#[derive(Debug, Clone, PartialEq)]
struct GeoEntry<K> {
    key: K,
    point: GeoPoint,
}

impl<K: Clone + PartialEq> RTreeObject for GeoEntry<K> {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point.to_lon_lat())
    }
}

/// A spatial index mapping keys to geographic points.
///
/// # Example
///
/// ```rust
/// use foodshare_geo::{GeoIndex, GeoPoint, SearchRadius};
///
/// # fn main() -> Result<(), foodshare_geo::GeoError> {
/// let mut index = GeoIndex::new();
/// index.insert("cafe", GeoPoint::new(-75.0, 40.009)?);
/// index.insert("market", GeoPoint::new(-75.0, 40.45)?);
///
/// let origin = GeoPoint::new(-75.0, 40.0)?;
/// let hits = index.near(origin, SearchRadius::km(10.0), None);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].0, "cafe");
/// # Ok(())
/// # }
/// ```
pub struct GeoIndex<K: Clone + PartialEq> {
    tree: RTree<GeoEntry<K>>,
}

impl<K: Clone + PartialEq> fmt::Debug for GeoIndex<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeoIndex")
            .field("len", &self.tree.size())
            .finish()
    }
}

impl<K: Clone + PartialEq> Default for GeoIndex<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone + PartialEq> GeoIndex<K> {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self { tree: RTree::new() }
    }

    /// Number of indexed entries.
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    /// Returns true if the index holds no entries.
    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Indexes `key` at `point`, replacing any previous entry for the key.
    pub fn insert(&mut self, key: K, point: GeoPoint) {
        self.remove(&key);
        self.tree.insert(GeoEntry { key, point });
    }

    /// Removes the entry for `key`. Returns true if one existed.
    pub fn remove(&mut self, key: &K) -> bool {
        let existing = self.tree.iter().find(|entry| &entry.key == key).cloned();
        match existing {
            Some(entry) => self.tree.remove(&entry).is_some(),
            None => false,
        }
    }

    /// Finds keys near `origin`, paired with their distance in kilometers,
    /// ordered ascending by distance. A bounded radius is inclusive; an
    /// unbounded one returns every entry. `limit` caps the result length.
    pub fn near(
        &self,
        origin: GeoPoint,
        radius: SearchRadius,
        limit: Option<usize>,
    ) -> Vec<(K, f64)> {
        let mut hits: Vec<(K, f64)> = match radius {
            SearchRadius::Unbounded => self
                .tree
                .iter()
                .map(|entry| (entry.key.clone(), distance_km(origin, entry.point)))
                .collect(),
            SearchRadius::Bounded(radius_km) => {
                let envelope = search_envelope(origin, radius_km);
                self.tree
                    .locate_in_envelope(&envelope)
                    .filter_map(|entry| {
                        let dist = distance_km(origin, entry.point);
                        if dist <= radius_km {
                            Some((entry.key.clone(), dist))
                        } else {
                            None
                        }
                    })
                    .collect()
            }
        };

        hits.sort_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        if let Some(limit) = limit {
            hits.truncate(limit);
        }
        log::debug!(
            "near query at {} ({}): {} of {} entries matched",
            origin,
            radius,
            hits.len(),
            self.tree.size()
        );
        hits
    }
}

/// Coarse degree-space search box around `origin`.
///
/// Longitude degrees shrink toward the poles; near them the box is widened to
/// the full longitude range. The box does not wrap at the antimeridian.
fn search_envelope(origin: GeoPoint, radius_km: f64) -> AABB<[f64; 2]> {
    let lat_delta = radius_km / KM_PER_DEGREE * ENVELOPE_PADDING;
    let cos_lat = origin.latitude().to_radians().cos();
    let lon_delta = if cos_lat > 1e-6 {
        radius_km / (KM_PER_DEGREE * cos_lat) * ENVELOPE_PADDING
    } else {
        360.0
    };

    AABB::from_corners(
        [origin.longitude() - lon_delta, origin.latitude() - lat_delta],
        [origin.longitude() + lon_delta, origin.latitude() + lat_delta],
    )
}
