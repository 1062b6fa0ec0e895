//! End-to-end flows over the in-memory stores: posting food, browsing by
//! radius, re-filtering a client-held cache, and the delivery lifecycle.

use foodshare::geo::{
    distance_km, sort_by_proximity, within_radius, GeoPoint, SearchRadius,
};
use foodshare::{
    DeliveryQuery, DeliveryRequestDraft, DeliveryRequestStore, DeliveryStatus, FoodItemDraft,
    FoodItemPatch, FoodItemStore, FoodShareError, HelperInfo,
};

#[ctor::ctor]
fn init() {
    colog::init();
}

fn origin() -> GeoPoint {
    GeoPoint::new(-75.0, 40.0).unwrap()
}

fn food_draft(name: &str, lon: f64, lat: f64) -> FoodItemDraft {
    FoodItemDraft {
        name: name.to_string(),
        longitude: lon,
        latitude: lat,
        address: format!("{} street", name),
        contact: "owner@example.com".to_string(),
        description: String::new(),
        photo: None,
    }
}

/// Seeds items roughly 1 km, 5 km and 50 km from the origin, posted in
/// far/near/mid order.
fn seeded_store() -> FoodItemStore {
    let store = FoodItemStore::new();
    store.insert(food_draft("far", -75.0, 40.45)).unwrap();
    store.insert(food_draft("near", -75.0, 40.009)).unwrap();
    store.insert(food_draft("mid", -75.0, 40.045)).unwrap();
    store
}

#[test]
fn browse_by_radius_then_refilter_cached_items() {
    let store = seeded_store();

    // Server-side near-query.
    let nearby = store.list_near(origin(), SearchRadius::km(10.0));
    let names: Vec<_> = nearby.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["near", "mid"]);

    // The client keeps the full list and re-filters locally when the radius
    // selector changes; the result must agree with the server's answer.
    let cached = store.list_near(origin(), SearchRadius::Unbounded);
    let refiltered = within_radius(Some(origin()), &cached, SearchRadius::km(10.0));
    let refiltered = sort_by_proximity(Some(origin()), &refiltered);
    let names: Vec<_> = refiltered.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["near", "mid"]);

    // Switching the selector back to "all" shows everything, cache order
    // untouched.
    let all = within_radius(Some(origin()), &cached, SearchRadius::Unbounded);
    assert_eq!(all.len(), 3);
    let cached_names: Vec<_> = cached.iter().map(|i| i.name.as_str()).collect();
    let all_names: Vec<_> = all.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(all_names, cached_names);
}

#[test]
fn browse_without_location_falls_back_to_recency() {
    let store = seeded_store();
    let listed = store.list();
    assert_eq!(listed.len(), 3);

    // Location denied: no origin, so neither filter nor sort reorders.
    let filtered = within_radius(None, &listed, SearchRadius::km(10.0));
    let sorted = sort_by_proximity(None, &filtered);
    assert_eq!(sorted, listed);
}

#[test]
fn nearest_first_ordering_matches_distances() {
    let store = seeded_store();
    let sorted = sort_by_proximity(Some(origin()), &store.list());
    let distances: Vec<f64> = sorted
        .iter()
        .map(|item| distance_km(origin(), item.location.unwrap()))
        .collect();
    for pair in distances.windows(2) {
        assert!(pair[0] <= pair[1]);
    }
    assert_eq!(sorted[0].name, "near");
    assert_eq!(sorted[2].name, "far");
}

#[test]
fn photo_validation_guards_create_and_update() {
    let store = FoodItemStore::new();

    let mut bad = food_draft("soup", -75.0, 40.0);
    bad.photo = Some("not-a-data-url".to_string());
    assert!(matches!(
        store.insert(bad),
        Err(FoodShareError::InvalidPhoto(_))
    ));

    let item = store.insert(food_draft("soup", -75.0, 40.0)).unwrap();
    let patch = FoodItemPatch {
        photo: Some(Some("data:image/webp;base64,UklGRg==".to_string())),
        ..Default::default()
    };
    let updated = store.update(item.id, patch).unwrap();
    assert_eq!(
        updated.photo.as_ref().unwrap().metadata().mime_type,
        "image/webp"
    );
}

#[test]
fn delivery_request_full_lifecycle() {
    let food_items = FoodItemStore::new();
    let deliveries = DeliveryRequestStore::new(food_items.clone());

    let item = food_items.insert(food_draft("soup", -75.0, 40.009)).unwrap();
    let pickup = item.location.unwrap();

    let request = deliveries
        .insert(DeliveryRequestDraft {
            food_item_id: item.id,
            pickup_longitude: pickup.longitude(),
            pickup_latitude: pickup.latitude(),
            pickup_address: "12 Baker St".to_string(),
            delivery_longitude: -75.05,
            delivery_latitude: 40.05,
            delivery_address: "90 Oak Ave".to_string(),
            requester_name: "Ruth".to_string(),
            requester_contact: "ruth@example.com".to_string(),
            delivery_notes: "ring twice".to_string(),
            preferred_delivery_time: "evening".to_string(),
        })
        .unwrap();

    assert!(request.span_km() > 0.0);

    // A helper nearby finds the request through the proximity listing.
    let listed = deliveries.list(&DeliveryQuery {
        status: Some(DeliveryStatus::Pending),
        near: Some((origin(), SearchRadius::km(10.0))),
    });
    assert_eq!(listed.len(), 1);

    let helper = HelperInfo::new("Sam", "sam@example.com").unwrap();
    deliveries.accept(request.id, helper).unwrap();
    deliveries
        .set_status(request.id, DeliveryStatus::InProgress)
        .unwrap();
    let done = deliveries
        .set_status(request.id, DeliveryStatus::Completed)
        .unwrap();
    assert_eq!(done.status, DeliveryStatus::Completed);
    assert!(done.completed_at.is_some());

    // Completed requests drop out of the default view.
    assert!(deliveries.list(&DeliveryQuery::default()).is_empty());
}

#[test]
fn wire_shape_keeps_lon_lat_pair_order() {
    let store = FoodItemStore::new();
    let item = store.insert(food_draft("soup", -75.0, 40.0)).unwrap();

    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["location"][0].as_f64().unwrap(), -75.0);
    assert_eq!(json["location"][1].as_f64().unwrap(), 40.0);
}
