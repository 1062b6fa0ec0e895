//! # FoodShare - Community Food Sharing Core
//!
//! FoodShare is the application core of a community food-sharing and
//! volunteer-delivery coordination service: users post available food items
//! with a location, others browse them by distance, and volunteers accept
//! delivery requests between a pickup and a drop-off address.
//!
//! ## Key Features
//!
//! - **Food items**: create, fetch, partially update, and delete posted
//!   items, including inline base64 photos with format and size validation
//! - **Proximity browsing**: recency-ordered listings plus a geospatial
//!   near-query (point + max distance) returning nearest-first results
//! - **Delivery workflow**: pending requests that volunteers accept, drive
//!   through `in_progress`, and complete or cancel
//! - **Typed inputs**: draft and patch types validate required fields,
//!   length limits, coordinate ranges, and photos before anything is stored
//!
//! The geospatial primitives (Haversine distance, radius filter, proximity
//! sort, spatial index) live in the [`foodshare_geo`] crate, re-exported
//! here as [`geo`].
//!
//! ## Quick Start
//!
//! ```rust
//! use foodshare::geo::{GeoPoint, SearchRadius};
//! use foodshare::model::FoodItemDraft;
//! use foodshare::store::FoodItemStore;
//!
//! # fn main() -> Result<(), foodshare::FoodShareError> {
//! let store = FoodItemStore::new();
//! store.insert(FoodItemDraft {
//!     name: "Fresh bread".to_string(),
//!     longitude: -75.0,
//!     latitude: 40.009,
//!     address: "12 Baker St".to_string(),
//!     contact: "ann@example.com".to_string(),
//!     description: String::new(),
//!     photo: None,
//! })?;
//!
//! let here = GeoPoint::new(-75.0, 40.0)?;
//! let nearby = store.list_near(here, SearchRadius::km(5.0));
//! assert_eq!(nearby.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod model;
pub mod store;

pub use errors::{FoodShareError, FoodShareResult};
pub use model::{
    DeliveryRequest, DeliveryRequestDraft, DeliveryStatus, FoodItem, FoodItemDraft,
    FoodItemPatch, HelperInfo, LocationUpdate, Photo, PhotoMetadata,
};
pub use store::{DeliveryQuery, DeliveryRequestStore, FoodItemStore};

pub use foodshare_geo as geo;
