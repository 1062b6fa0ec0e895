//! Thread-safe in-memory stores.
//!
//! These stand in for the document database behind the same query contract:
//! recency-ordered listing with a result cap, and a geospatial near-query
//! (point + max distance) returning matches nearest-first with an inclusive
//! boundary, agreeing with the pure filter/sort core.

pub mod delivery_requests;
pub mod food_items;

pub use delivery_requests::{DeliveryQuery, DeliveryRequestStore};
pub use food_items::FoodItemStore;
