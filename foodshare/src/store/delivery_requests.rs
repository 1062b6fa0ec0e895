//! Delivery request store and workflow operations.

use std::sync::Arc;

use chrono::Utc;
use indexmap::IndexMap;
use parking_lot::RwLock;
use uuid::Uuid;

use foodshare_geo::{sort_by_proximity, within_radius, GeoPoint, SearchRadius};

use crate::errors::{FoodShareError, FoodShareResult};
use crate::model::{
    DeliveryRequest, DeliveryRequestDraft, DeliveryStatus, HelperInfo,
};
use crate::store::food_items::FoodItemStore;

/// Result cap for delivery request listings.
const LIST_LIMIT: usize = 50;

/// Query parameters for listing delivery requests.
///
/// `status: None` reproduces the default view: only active requests
/// (pending, accepted, in progress); completed and cancelled ones are
/// hidden. `near` restricts and orders results by distance from the
/// helper's location to the pickup point.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeliveryQuery {
    pub status: Option<DeliveryStatus>,
    pub near: Option<(GeoPoint, SearchRadius)>,
}

/// Thread-safe in-memory collection of delivery requests.
///
/// Holds a handle to the food item store so a request can only be created
/// for a food item that exists. Clones share the same underlying state.
#[derive(Debug, Clone)]
pub struct DeliveryRequestStore {
    inner: Arc<DeliveryRequestStoreInner>,
}

#[derive(Debug)]
struct DeliveryRequestStoreInner {
    requests: RwLock<IndexMap<Uuid, DeliveryRequest>>,
    food_items: FoodItemStore,
}

impl DeliveryRequestStore {
    /// Creates an empty store backed by the given food item store.
    pub fn new(food_items: FoodItemStore) -> Self {
        Self {
            inner: Arc::new(DeliveryRequestStoreInner {
                requests: RwLock::new(IndexMap::new()),
                food_items,
            }),
        }
    }

    /// Validates and inserts a new pending request.
    pub fn insert(&self, draft: DeliveryRequestDraft) -> FoodShareResult<DeliveryRequest> {
        let request = draft.into_request()?;
        // The referenced food item must exist.
        let food_item = self.inner.food_items.get(request.food_item_id)?;

        self.inner
            .requests
            .write()
            .insert(request.id, request.clone());

        log::info!(
            "delivery request created: id={} food_item={:?} requester={:?}",
            request.id,
            food_item.name,
            request.requester_name
        );
        Ok(request)
    }

    /// Fetches a request by id.
    pub fn get(&self, id: Uuid) -> FoodShareResult<DeliveryRequest> {
        self.inner
            .requests
            .read()
            .get(&id)
            .cloned()
            .ok_or(FoodShareError::NotFound {
                kind: "delivery request",
                id,
            })
    }

    /// A volunteer takes a pending request.
    ///
    /// Fails with [`FoodShareError::RequestUnavailable`] if the request has
    /// already been taken, completed, or cancelled.
    pub fn accept(&self, id: Uuid, helper: HelperInfo) -> FoodShareResult<DeliveryRequest> {
        let mut requests = self.inner.requests.write();
        let request = requests.get_mut(&id).ok_or(FoodShareError::NotFound {
            kind: "delivery request",
            id,
        })?;

        if request.status != DeliveryStatus::Pending {
            return Err(FoodShareError::RequestUnavailable);
        }

        request.status = DeliveryStatus::Accepted;
        request.helper = Some(helper);
        request.accepted_at = Some(Utc::now());
        request.updated_at = Utc::now();

        log::info!(
            "delivery request accepted: id={} helper={:?}",
            id,
            request.helper.as_ref().map(|h| h.name.as_str())
        );
        Ok(request.clone())
    }

    /// Moves a request through its workflow.
    ///
    /// Only legal transitions are accepted; completing a request stamps
    /// `completed_at`.
    pub fn set_status(
        &self,
        id: Uuid,
        status: DeliveryStatus,
    ) -> FoodShareResult<DeliveryRequest> {
        let mut requests = self.inner.requests.write();
        let request = requests.get_mut(&id).ok_or(FoodShareError::NotFound {
            kind: "delivery request",
            id,
        })?;

        if !request.status.can_transition_to(status) {
            return Err(FoodShareError::InvalidTransition {
                from: request.status,
                to: status,
            });
        }

        request.status = status;
        if status == DeliveryStatus::Completed {
            request.completed_at = Some(Utc::now());
        }
        request.updated_at = Utc::now();

        log::info!("delivery request status updated: id={} status={}", id, status);
        Ok(request.clone())
    }

    /// Removes a request, returning the removed record.
    pub fn delete(&self, id: Uuid) -> FoodShareResult<DeliveryRequest> {
        let removed = self
            .inner
            .requests
            .write()
            .shift_remove(&id)
            .ok_or(FoodShareError::NotFound {
                kind: "delivery request",
                id,
            })?;

        log::info!("delivery request deleted: id={}", id);
        Ok(removed)
    }

    /// Number of stored requests.
    pub fn len(&self) -> usize {
        self.inner.requests.read().len()
    }

    /// Returns true when the store holds no requests.
    pub fn is_empty(&self) -> bool {
        self.inner.requests.read().is_empty()
    }

    /// Lists requests matching `query`, capped at 50 results.
    ///
    /// Without a near-query the order is newest-first; with one, results are
    /// restricted to the radius and ordered nearest pickup first.
    pub fn list(&self, query: &DeliveryQuery) -> Vec<DeliveryRequest> {
        let requests = self.inner.requests.read();
        let mut matched: Vec<DeliveryRequest> = requests
            .values()
            .filter(|request| match query.status {
                Some(status) => request.status == status,
                None => request.status.is_active(),
            })
            .cloned()
            .collect();
        drop(requests);

        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        if let Some((origin, radius)) = query.near {
            matched = within_radius(Some(origin), &matched, radius);
            matched = sort_by_proximity(Some(origin), &matched);
        }

        matched.truncate(LIST_LIMIT);
        matched
    }
}
