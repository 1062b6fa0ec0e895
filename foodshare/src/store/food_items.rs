//! Food item store.

use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;
use uuid::Uuid;

use foodshare_geo::{GeoIndex, GeoPoint, SearchRadius};

use crate::errors::{FoodShareError, FoodShareResult};
use crate::model::food_item::{ADDRESS_MAX, CONTACT_MAX, DESCRIPTION_MAX, NAME_MAX};
use crate::model::{optional_field, required_field, FoodItem, FoodItemDraft, FoodItemPatch, Photo};

/// Result cap for food item listings.
const LIST_LIMIT: usize = 100;

/// Thread-safe in-memory collection of food items with a spatial index on
/// the pickup location.
///
/// Clones share the same underlying state.
#[derive(Debug, Clone, Default)]
pub struct FoodItemStore {
    inner: Arc<FoodItemStoreInner>,
}

#[derive(Debug, Default)]
struct FoodItemStoreInner {
    // Lock order: items before geo, everywhere.
    items: RwLock<IndexMap<Uuid, FoodItem>>,
    geo: RwLock<GeoIndex<Uuid>>,
}

impl FoodItemStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and inserts a new food item.
    pub fn insert(&self, draft: FoodItemDraft) -> FoodShareResult<FoodItem> {
        let item = draft.into_item()?;

        let mut items = self.inner.items.write();
        let mut geo = self.inner.geo.write();
        if let Some(point) = item.location {
            geo.insert(item.id, point);
        }
        items.insert(item.id, item.clone());

        log::info!(
            "food item created: id={} name={:?} has_photo={}",
            item.id,
            item.name,
            item.photo.is_some()
        );
        Ok(item)
    }

    /// Fetches a food item by id.
    pub fn get(&self, id: Uuid) -> FoodShareResult<FoodItem> {
        self.inner
            .items
            .read()
            .get(&id)
            .cloned()
            .ok_or(FoodShareError::NotFound {
                kind: "food item",
                id,
            })
    }

    /// Applies a partial update; only provided fields change.
    ///
    /// All inputs are validated before anything is written, so a failed
    /// update leaves the record untouched.
    pub fn update(&self, id: Uuid, patch: FoodItemPatch) -> FoodShareResult<FoodItem> {
        let name = patch
            .name
            .map(|value| required_field("name", &value, NAME_MAX))
            .transpose()?;
        let contact = patch
            .contact
            .map(|value| required_field("contact", &value, CONTACT_MAX))
            .transpose()?;
        let description = patch
            .description
            .map(|value| optional_field("description", &value, DESCRIPTION_MAX))
            .transpose()?;
        let location = patch
            .location
            .map(|update| -> FoodShareResult<(GeoPoint, String)> {
                let point = GeoPoint::new(update.longitude, update.latitude)?;
                let address = optional_field("address", &update.address, ADDRESS_MAX)?;
                Ok((point, address))
            })
            .transpose()?;
        let photo = match patch.photo {
            None => None,
            Some(None) => Some(None),
            Some(Some(data)) if data.trim().is_empty() => Some(None),
            Some(Some(data)) => Some(Some(Photo::from_data_url(data)?)),
        };

        let mut items = self.inner.items.write();
        let item = items.get_mut(&id).ok_or(FoodShareError::NotFound {
            kind: "food item",
            id,
        })?;

        if let Some(name) = name {
            item.name = name;
        }
        if let Some(contact) = contact {
            item.contact = contact;
        }
        if let Some(description) = description {
            item.description = description;
        }
        if let Some((point, address)) = location {
            item.location = Some(point);
            item.address = address;
            self.inner.geo.write().insert(id, point);
        }
        if let Some(photo) = photo {
            item.photo = photo;
        }
        item.updated_at = chrono::Utc::now();

        log::info!("food item updated: id={} name={:?}", id, item.name);
        Ok(item.clone())
    }

    /// Removes a food item, returning the removed record.
    pub fn delete(&self, id: Uuid) -> FoodShareResult<FoodItem> {
        let mut items = self.inner.items.write();
        let mut geo = self.inner.geo.write();
        let removed = items
            .shift_remove(&id)
            .ok_or(FoodShareError::NotFound {
                kind: "food item",
                id,
            })?;
        geo.remove(&id);

        log::info!(
            "food item deleted: id={} name={:?} had_photo={}",
            id,
            removed.name,
            removed.photo.is_some()
        );
        Ok(removed)
    }

    /// Number of stored items.
    pub fn len(&self) -> usize {
        self.inner.items.read().len()
    }

    /// Returns true when the store holds no items.
    pub fn is_empty(&self) -> bool {
        self.inner.items.read().is_empty()
    }

    /// Lists items newest-first, capped at 100 results.
    pub fn list(&self) -> Vec<FoodItem> {
        let items = self.inner.items.read();
        let mut all: Vec<FoodItem> = items.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        all.truncate(LIST_LIMIT);

        let with_photo = all.iter().filter(|item| item.photo.is_some()).count();
        log::debug!(
            "food items retrieved: total={} with_photo={} without_photo={}",
            all.len(),
            with_photo,
            all.len() - with_photo
        );
        all
    }

    /// Near-query: items within `radius` of `origin`, ordered ascending by
    /// distance (inclusive boundary), capped at 100 results.
    pub fn list_near(&self, origin: GeoPoint, radius: SearchRadius) -> Vec<FoodItem> {
        let items = self.inner.items.read();
        let geo = self.inner.geo.read();
        geo.near(origin, radius, Some(LIST_LIMIT))
            .into_iter()
            .filter_map(|(id, _)| items.get(&id).cloned())
            .collect()
    }
}
