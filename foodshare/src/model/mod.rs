//! Domain models: food items, delivery requests, and inline photos.

pub mod delivery_request;
pub mod food_item;
pub mod photo;

pub use delivery_request::{
    DeliveryRequest, DeliveryRequestDraft, DeliveryStatus, HelperInfo,
};
pub use food_item::{FoodItem, FoodItemDraft, FoodItemPatch, LocationUpdate};
pub use photo::{Photo, PhotoMetadata, MAX_PHOTO_BYTES};

use crate::errors::{FoodShareError, FoodShareResult};

/// Trims a required text field and enforces its length limit.
pub(crate) fn required_field(name: &str, value: &str, max_len: usize) -> FoodShareResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FoodShareError::Validation(format!(
            "missing required field: {}",
            name
        )));
    }
    bounded_len(name, trimmed, max_len)?;
    Ok(trimmed.to_string())
}

/// Trims an optional text field (empty is fine) and enforces its length limit.
pub(crate) fn optional_field(name: &str, value: &str, max_len: usize) -> FoodShareResult<String> {
    let trimmed = value.trim();
    bounded_len(name, trimmed, max_len)?;
    Ok(trimmed.to_string())
}

fn bounded_len(name: &str, value: &str, max_len: usize) -> FoodShareResult<()> {
    if value.chars().count() > max_len {
        return Err(FoodShareError::Validation(format!(
            "{} must be at most {} characters",
            name, max_len
        )));
    }
    Ok(())
}
