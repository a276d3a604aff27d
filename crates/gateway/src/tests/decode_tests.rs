// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::decode::{self, ListItem, ListPage};
use crate::error::GatewayError;
use stock_alloc_domain::{LineStatus, Order, Origin, ReservationRecord};
use time::macros::date;

fn item(id: &str, fields: serde_json::Value) -> ListItem {
    serde_json::from_value(serde_json::json!({ "id": id, "fields": fields })).unwrap()
}

#[test]
fn test_order_decodes_wire_fields() {
    let order: Order = decode::order(&item(
        "7",
        serde_json::json!({
            "CMD_ID": 1001,
            "Site_Stock": "Paris",
            "Site_Stock_second": "Lyon",
            "Date_livraison": "2025-06-15T00:00:00Z",
            "Statut": "Nouveau"
        }),
    ))
    .unwrap();

    assert_eq!(order.item_id, "7");
    assert_eq!(order.id, "1001");
    assert_eq!(order.primary_site.value(), "Paris");
    assert_eq!(order.secondary_site.as_ref().unwrap().value(), "Lyon");
    assert_eq!(order.delivery_date, Some(date!(2025 - 06 - 15)));
}

#[test]
fn test_order_normalizes_sentinel_secondary_site() {
    let order: Order = decode::order(&item(
        "7",
        serde_json::json!({ "CMD_ID": "1001", "Site_Stock": "Paris", "Site_Stock_second": "0" }),
    ))
    .unwrap();

    assert_eq!(order.secondary_site, None);
    assert_eq!(order.delivery_date, None);
}

#[test]
fn test_order_line_applies_lenient_quantity_parsing() {
    let line = decode::order_line(&item(
        "11",
        serde_json::json!({
            "CMD_ID": "1001",
            "Title": "VIS-M6",
            "Quantite": "pas un nombre",
            "Statut": "Reservé"
        }),
    ))
    .unwrap();

    assert_eq!(line.reference.value(), "VIS-M6");
    assert!(line.quantity.abs() < f64::EPSILON);
    assert_eq!(line.status, LineStatus::Reserved);
}

#[test]
fn test_product_origin_defaults_to_external() {
    let product = decode::product(&item("3", serde_json::json!({ "Title": "JOINT-EXT" }))).unwrap();
    assert_eq!(product.origin, Origin::External);

    let product =
        decode::product(&item("4", serde_json::json!({ "Title": "VIS-M6", "Origine": "SDF" })))
            .unwrap();
    assert_eq!(product.origin, Origin::Internal);
}

#[test]
fn test_reservation_reconciled_flag_accepts_number_form() {
    let record: ReservationRecord = decode::reservation(&item(
        "5",
        serde_json::json!({
            "Title": "VIS-M6",
            "Site": "Paris",
            "Quantite": 4,
            "Statut": "Sortie produits",
            "Comptabilise_inventaire": 1
        }),
    ))
    .unwrap();

    assert!(record.reconciled);
    assert!(!record.claims_stock());
}

#[test]
fn test_missing_fields_payload_is_a_decode_error() {
    let bare: ListItem = serde_json::from_value(serde_json::json!({ "id": "9" })).unwrap();
    let result = decode::product(&bare);

    assert!(matches!(
        result,
        Err(GatewayError::Decode {
            collection: "produits",
            ..
        })
    ));
}

#[test]
fn test_list_page_carries_next_link() {
    let page: ListPage = serde_json::from_value(serde_json::json!({
        "value": [{ "id": "1", "fields": {} }],
        "@odata.nextLink": "https://example.test/next"
    }))
    .unwrap();

    assert_eq!(page.value.len(), 1);
    assert_eq!(page.next_link.as_deref(), Some("https://example.test/next"));
}

#[test]
fn test_arrival_excludes_unparsable_dates() {
    let shipment = decode::arrival(&item(
        "6",
        serde_json::json!({ "Title": "PLAQUE-200", "Date": "bientôt", "Quantite": 20 }),
    ))
    .unwrap();

    assert_eq!(shipment.arrival_date, None);
    assert!((shipment.quantity - 20.0).abs() < f64::EPSILON);
}
