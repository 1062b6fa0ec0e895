//! Error types for the FoodShare application core.

use thiserror::Error;
use uuid::Uuid;

use crate::model::DeliveryStatus;

/// Errors that can occur in FoodShare store and model operations.
#[derive(Debug, Error)]
pub enum FoodShareError {
    /// A required field is missing, empty, or over its length limit.
    #[error("validation error: {0}")]
    Validation(String),

    /// The referenced record does not exist.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: Uuid },

    /// The requested status change is not a legal transition.
    #[error("invalid status transition from {from} to {to}")]
    InvalidTransition {
        from: DeliveryStatus,
        to: DeliveryStatus,
    },

    /// Someone else already took the delivery request.
    #[error("this delivery request is no longer available")]
    RequestUnavailable,

    /// The photo is not an inline base64 image of a supported type.
    #[error("invalid photo format: {0}")]
    InvalidPhoto(String),

    /// The photo exceeds the inline size cap.
    #[error("photo size too large: {size} bytes (maximum is 1MB)")]
    PhotoTooLarge { size: usize },

    /// A coordinate failed range validation.
    #[error(transparent)]
    Geo(#[from] foodshare_geo::GeoError),
}

/// Result type for FoodShare operations.
pub type FoodShareResult<T> = Result<T, FoodShareError>;
