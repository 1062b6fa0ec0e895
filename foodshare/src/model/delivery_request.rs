//! Delivery request model, status workflow, and input shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use uuid::Uuid;

use foodshare_geo::{delivery_span_km, GeoPoint, Located};

use crate::errors::FoodShareResult;
use crate::model::food_item::{ADDRESS_MAX, CONTACT_MAX, DESCRIPTION_MAX, NAME_MAX};
use crate::model::{optional_field, required_field};

const TIME_MAX: usize = 100;

/// Workflow status of a delivery request.
///
/// Legal transitions: `Pending -> Accepted -> InProgress -> Completed`, and
/// any non-terminal status may move to `Cancelled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    Pending,
    Accepted,
    InProgress,
    Completed,
    Cancelled,
}

impl DeliveryStatus {
    /// The wire/storage name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::Pending => "pending",
            DeliveryStatus::Accepted => "accepted",
            DeliveryStatus::InProgress => "in_progress",
            DeliveryStatus::Completed => "completed",
            DeliveryStatus::Cancelled => "cancelled",
        }
    }

    /// Human-readable label (underscores become spaces).
    pub fn label(&self) -> &'static str {
        match self {
            DeliveryStatus::InProgress => "in progress",
            other => other.as_str(),
        }
    }

    /// Whether the request still needs a helper or is under way.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            DeliveryStatus::Pending | DeliveryStatus::Accepted | DeliveryStatus::InProgress
        )
    }

    /// Whether moving from `self` to `next` is a legal workflow step.
    pub fn can_transition_to(&self, next: DeliveryStatus) -> bool {
        use DeliveryStatus::*;
        matches!(
            (self, next),
            (Pending, Accepted)
                | (Accepted, InProgress)
                | (InProgress, Completed)
                | (Pending, Cancelled)
                | (Accepted, Cancelled)
                | (InProgress, Cancelled)
        )
    }
}

impl Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The volunteer who accepted a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelperInfo {
    pub name: String,
    pub contact: String,
}

impl HelperInfo {
    /// Validates and trims the helper's name and contact.
    pub fn new(name: impl AsRef<str>, contact: impl AsRef<str>) -> FoodShareResult<Self> {
        Ok(Self {
            name: required_field("helper name", name.as_ref(), NAME_MAX)?,
            contact: required_field("helper contact", contact.as_ref(), CONTACT_MAX)?,
        })
    }
}

/// A request to have a food item delivered from its pickup point to a
/// drop-off address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryRequest {
    pub id: Uuid,
    pub food_item_id: Uuid,
    pub pickup_location: GeoPoint,
    pub pickup_address: String,
    pub delivery_location: GeoPoint,
    pub delivery_address: String,
    pub requester_name: String,
    pub requester_contact: String,
    pub delivery_notes: String,
    pub preferred_delivery_time: String,
    pub status: DeliveryStatus,
    pub helper: Option<HelperInfo>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub accepted_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl DeliveryRequest {
    /// Straight-line pickup-to-drop-off distance in kilometers, for display
    /// ("X km delivery distance").
    pub fn span_km(&self) -> f64 {
        delivery_span_km(self.pickup_location, self.delivery_location)
    }
}

/// Helpers browse requests by distance to the pickup point.
impl Located for DeliveryRequest {
    fn location(&self) -> Option<GeoPoint> {
        Some(self.pickup_location)
    }
}

/// Raw input for creating a delivery request.
#[derive(Debug, Clone, Deserialize)]
pub struct DeliveryRequestDraft {
    pub food_item_id: Uuid,
    pub pickup_longitude: f64,
    pub pickup_latitude: f64,
    pub pickup_address: String,
    pub delivery_longitude: f64,
    pub delivery_latitude: f64,
    pub delivery_address: String,
    pub requester_name: String,
    pub requester_contact: String,
    #[serde(default)]
    pub delivery_notes: String,
    #[serde(default)]
    pub preferred_delivery_time: String,
}

impl DeliveryRequestDraft {
    /// Validates the draft and builds a pending request.
    pub(crate) fn into_request(self) -> FoodShareResult<DeliveryRequest> {
        let pickup_address = required_field("pickup address", &self.pickup_address, ADDRESS_MAX)?;
        let delivery_address =
            required_field("delivery address", &self.delivery_address, ADDRESS_MAX)?;
        let requester_name = required_field("requester name", &self.requester_name, NAME_MAX)?;
        let requester_contact =
            required_field("requester contact", &self.requester_contact, CONTACT_MAX)?;
        let delivery_notes = optional_field("delivery notes", &self.delivery_notes, DESCRIPTION_MAX)?;
        let preferred_delivery_time =
            optional_field("preferred delivery time", &self.preferred_delivery_time, TIME_MAX)?;
        let pickup_location = GeoPoint::new(self.pickup_longitude, self.pickup_latitude)?;
        let delivery_location = GeoPoint::new(self.delivery_longitude, self.delivery_latitude)?;

        let now = Utc::now();
        Ok(DeliveryRequest {
            id: Uuid::new_v4(),
            food_item_id: self.food_item_id,
            pickup_location,
            pickup_address,
            delivery_location,
            delivery_address,
            requester_name,
            requester_contact,
            delivery_notes,
            preferred_delivery_time,
            status: DeliveryStatus::Pending,
            helper: None,
            created_at: now,
            updated_at: now,
            accepted_at: None,
            completed_at: None,
        })
    }
}
