mod pixel_support;

use honest_herbalist_site::config::OFFER;
use honest_herbalist_site::utils::dedup::{DedupStore, MemoryStorage, StorageDedupStore};
use honest_herbalist_site::utils::meta_pixel::{EventOptions, TrackingClient};
use honest_herbalist_site::utils::purchase::{
    extract_order_identifier, purchase_storage_key, record_purchase, PurchaseOutcome,
};
use pixel_support::{RecordingTransport, ThrowingStorage};
use serde_json::json;

fn visit<S: DedupStore>(
    pixel: &TrackingClient<RecordingTransport>,
    store: &S,
    query: &str,
) -> PurchaseOutcome {
    let identifier = extract_order_identifier(query);
    record_purchase(pixel, store, identifier.as_deref(), &OFFER).expect("purchase flow")
}

#[test]
fn first_visit_fires_and_reload_does_not() {
    let pixel = TrackingClient::new(RecordingTransport::default(), "1");
    let store = StorageDedupStore::new(MemoryStorage::new());

    assert_eq!(
        visit(&pixel, &store, "?session_id=ABC123"),
        PurchaseOutcome::TrackedNow("ABC123".into())
    );
    assert!(store.was_fired(&purchase_storage_key("ABC123")));

    assert_eq!(
        visit(&pixel, &store, "?session_id=ABC123"),
        PurchaseOutcome::AlreadyTracked("ABC123".into())
    );

    let purchases = pixel.transport().named("Purchase");
    assert_eq!(purchases.len(), 1);
    assert_eq!(
        serde_json::Value::Object(purchases[0].params.clone().unwrap()),
        json!({"value": 49.0, "currency": "USD"})
    );
    assert_eq!(purchases[0].options, Some(EventOptions::with_event_id("ABC123")));
}

#[test]
fn no_recognized_parameter_fires_nothing() {
    let pixel = TrackingClient::new(RecordingTransport::default(), "1");
    let store = StorageDedupStore::new(MemoryStorage::new());

    assert_eq!(visit(&pixel, &store, ""), PurchaseOutcome::NoIdentifier);
    assert_eq!(visit(&pixel, &store, "?order=ABC123"), PurchaseOutcome::NoIdentifier);
    assert_eq!(visit(&pixel, &store, "?session_id=%20"), PurchaseOutcome::NoIdentifier);

    assert!(pixel.transport().named("Purchase").is_empty());
    assert!(store.storage().is_empty());
}

#[test]
fn distinct_identifiers_each_fire_once() {
    let pixel = TrackingClient::new(RecordingTransport::default(), "1");
    let store = StorageDedupStore::new(MemoryStorage::new());

    visit(&pixel, &store, "?session_id=ABC123");
    visit(&pixel, &store, "?checkout_session_id=XYZ789");
    visit(&pixel, &store, "?session_id=ABC123");
    visit(&pixel, &store, "?sessionId=XYZ789");

    let ids: Vec<_> = pixel
        .transport()
        .named("Purchase")
        .into_iter()
        .map(|event| event.options.and_then(|options| options.event_id))
        .collect();
    assert_eq!(ids, vec![Some("ABC123".to_string()), Some("XYZ789".to_string())]);
}

#[test]
fn throwing_storage_fails_open_and_still_tracks() {
    let pixel = TrackingClient::new(RecordingTransport::default(), "1");
    let store = StorageDedupStore::new(ThrowingStorage);

    assert!(!store.was_fired(&purchase_storage_key("ABC123")));
    assert_eq!(
        visit(&pixel, &store, "?session_id=ABC123"),
        PurchaseOutcome::TrackedNow("ABC123".into())
    );
    assert_eq!(pixel.transport().named("Purchase").len(), 1);
}

#[test]
fn duplicate_mount_in_same_session_is_deduplicated() {
    let pixel = TrackingClient::new(RecordingTransport::default(), "1");
    let store = StorageDedupStore::new(MemoryStorage::new());

    let first = visit(&pixel, &store, "session_id=cs_test_1");
    let second = visit(&pixel, &store, "session_id=cs_test_1");

    assert!(matches!(first, PurchaseOutcome::TrackedNow(_)));
    assert!(matches!(second, PurchaseOutcome::AlreadyTracked(_)));
    assert_eq!(pixel.transport().init_calls.borrow().len(), 1);
}
