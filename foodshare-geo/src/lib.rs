//! # FoodShare Geo - Geospatial Core
//!
//! Pure geospatial primitives for the FoodShare application: great-circle
//! distance, proximity filtering, nearest-first ordering, and an in-memory
//! spatial index for the store's near-queries.
//!
//! ## Features
//!
//! - **Validated points**: [`GeoPoint`] enforces coordinate ranges at the
//!   input-acceptance boundary; longitude-first `[lon, lat]` convention
//!   everywhere, matching the persisted representation
//! - **Haversine distance**: [`distance_km`] with the 6371 km mean Earth
//!   radius, plus the [`delivery_span_km`] pickup/drop-off convenience
//! - **Proximity filter**: [`within_radius`] with a typed
//!   [`SearchRadius`] selector ("show all" is a distinct mode, not an
//!   infinite radius)
//! - **Proximity sort**: [`sort_by_proximity`], a stable nearest-first
//!   ordering that degrades to input order without a reference location
//! - **Spatial index**: [`GeoIndex`], an rstar-backed point index with
//!   two-phase near-queries
//!
//! All filter/sort operations are pure, synchronous, and side-effect free:
//! they read their inputs, never mutate them, and are safe to call
//! concurrently.
//!
//! ## Quick Start
//!
//! ```rust
//! use foodshare_geo::{distance_km, sort_by_proximity, within_radius, GeoPoint, SearchRadius};
//!
//! # fn main() -> Result<(), foodshare_geo::GeoError> {
//! let origin = GeoPoint::new(-75.0, 40.0)?;
//! let spots = vec![
//!     GeoPoint::new(-75.0, 40.45)?,
//!     GeoPoint::new(-75.0, 40.009)?,
//! ];
//!
//! let nearby = within_radius(Some(origin), &spots, SearchRadius::km(10.0));
//! assert_eq!(nearby.len(), 1);
//!
//! let ordered = sort_by_proximity(Some(origin), &spots);
//! assert!(distance_km(origin, ordered[0]) <= distance_km(origin, ordered[1]));
//! # Ok(())
//! # }
//! ```

pub mod distance;
pub mod error;
pub mod filter;
pub mod index;
pub mod point;
pub mod radius;
pub mod sort;

pub use distance::{delivery_span_km, distance_km, EARTH_RADIUS_KM};
pub use error::{GeoError, GeoResult};
pub use filter::{within_radius, Located};
pub use index::GeoIndex;
pub use point::GeoPoint;
pub use radius::SearchRadius;
pub use sort::sort_by_proximity;
