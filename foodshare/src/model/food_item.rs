//! Food item model and its input shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use foodshare_geo::{GeoPoint, Located};

use crate::errors::FoodShareResult;
use crate::model::photo::Photo;
use crate::model::{optional_field, required_field};

pub(crate) const NAME_MAX: usize = 100;
pub(crate) const ADDRESS_MAX: usize = 200;
pub(crate) const CONTACT_MAX: usize = 100;
pub(crate) const DESCRIPTION_MAX: usize = 500;

/// A posted food item available for pickup.
///
/// The location is optional at the type level: records without a usable point
/// are excluded by proximity filtering and sort as neutral, they are never an
/// error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: Uuid,
    pub name: String,
    pub location: Option<GeoPoint>,
    pub address: String,
    pub contact: String,
    pub description: String,
    pub photo: Option<Photo>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Located for FoodItem {
    fn location(&self) -> Option<GeoPoint> {
        self.location
    }
}

/// Raw input for creating a food item.
///
/// Coordinates are required on submission (from device geolocation or manual
/// entry), longitude-first as everywhere else.
#[derive(Debug, Clone, Deserialize)]
pub struct FoodItemDraft {
    pub name: String,
    pub longitude: f64,
    pub latitude: f64,
    #[serde(default)]
    pub address: String,
    pub contact: String,
    #[serde(default)]
    pub description: String,
    /// Inline `data:image/...;base64,` string.
    #[serde(default)]
    pub photo: Option<String>,
}

impl FoodItemDraft {
    /// Validates the draft and builds the stored record.
    pub(crate) fn into_item(self) -> FoodShareResult<FoodItem> {
        let name = required_field("name", &self.name, NAME_MAX)?;
        let contact = required_field("contact", &self.contact, CONTACT_MAX)?;
        let address = optional_field("address", &self.address, ADDRESS_MAX)?;
        let description = optional_field("description", &self.description, DESCRIPTION_MAX)?;
        let location = GeoPoint::new(self.longitude, self.latitude)?;
        let photo = self
            .photo
            .as_deref()
            .filter(|data| !data.trim().is_empty())
            .map(Photo::from_data_url)
            .transpose()?;

        let now = Utc::now();
        Ok(FoodItem {
            id: Uuid::new_v4(),
            name,
            location: Some(location),
            address,
            contact,
            description,
            photo,
            created_at: now,
            updated_at: now,
        })
    }
}

/// A replacement location with its display address.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationUpdate {
    pub longitude: f64,
    pub latitude: f64,
    #[serde(default)]
    pub address: String,
}

/// Partial update of a food item; only the provided fields change.
///
/// `photo` distinguishes "leave unchanged" (`None`) from "remove"
/// (`Some(None)`) from "replace" (`Some(Some(data_url))`).
#[derive(Debug, Clone, Default)]
pub struct FoodItemPatch {
    pub name: Option<String>,
    pub contact: Option<String>,
    pub description: Option<String>,
    pub location: Option<LocationUpdate>,
    pub photo: Option<Option<String>>,
}
