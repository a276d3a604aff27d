// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::backend::{LinePatch, ListStore};
use crate::backend::memory::MemoryStore;
use stock_alloc_domain::{LineStatus, Reference, ReservationRecord, Site};

#[tokio::test]
async fn test_demo_fixtures_resolve_the_demo_order() {
    let store: MemoryStore = MemoryStore::with_demo_fixtures();

    let order = store.get_order("1001").await.unwrap().unwrap();
    assert_eq!(order.primary_site.value(), "Paris");

    let lines = store.list_order_lines("1001").await.unwrap();
    assert_eq!(lines.len(), 3);

    assert!(store.get_order("9999").await.unwrap().is_none());
}

#[tokio::test]
async fn test_reservations_filter_by_reference() {
    let reservation = |reference: &str| ReservationRecord {
        reference: Reference::new(reference),
        site: Some(Site::new("Paris")),
        quantity: 1.0,
        status: LineStatus::Reserved,
        reconciled: false,
    };
    let store: MemoryStore = MemoryStore::new()
        .with_reservations(vec![reservation("REF-1"), reservation("REF-2")]);

    let records = store
        .list_reservations(&[Reference::new("REF-1")])
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].reference.value(), "REF-1");
}

#[tokio::test]
async fn test_writes_land_in_the_patch_log() {
    let store: MemoryStore = MemoryStore::new();

    let patch: LinePatch = LinePatch {
        status: Some(String::from("Préparé")),
        prep_status: Some(String::from("Préparé")),
        prep_site: Some(String::from("Paris")),
        prep_building: None,
        prep_slot: None,
    };
    store.update_line_fields("11", &patch).await.unwrap();
    store.update_order_status("1", "Réceptionné").await.unwrap();

    assert_eq!(store.line_patches(), vec![(String::from("11"), patch)]);
    assert_eq!(
        store.order_patches(),
        vec![(String::from("1"), String::from("Réceptionné"))]
    );
}

#[test]
fn test_line_patch_skips_unset_fields() {
    let patch: LinePatch = LinePatch {
        status: Some(String::from("Préparé")),
        ..LinePatch::default()
    };

    assert_eq!(
        patch.to_fields(),
        serde_json::json!({ "Statut": "Préparé" })
    );
}
