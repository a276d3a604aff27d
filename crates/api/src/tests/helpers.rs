// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use stock_alloc_domain::{
    InventoryRecord, LineStatus, Order, OrderLine, Origin, Product, Reference, Site,
};
use stock_alloc_gateway::MemoryStore;
use time::macros::date;

pub const ORDER_ID: &str = "1001";
pub const ORDER_ITEM_ID: &str = "1";

pub fn test_order() -> Order {
    Order::new(
        ORDER_ITEM_ID,
        ORDER_ID,
        Site::new("Paris"),
        Some(String::from("Lyon")),
        Some(date!(2025 - 06 - 15)),
        None,
    )
}

pub fn test_line(id: &str, reference: &str, quantity: f64) -> OrderLine {
    OrderLine {
        id: id.to_string(),
        order_id: ORDER_ID.to_string(),
        reference: Reference::new(reference),
        quantity,
        status: LineStatus::Other(String::from("Nouveau")),
        site: None,
    }
}

pub fn internal_product(reference: &str) -> Product {
    Product {
        reference: Reference::new(reference),
        origin: Origin::Internal,
    }
}

pub fn stock(reference: &str, site: &str, quantity: f64) -> InventoryRecord {
    InventoryRecord {
        reference: Reference::new(reference),
        site: Site::new(site),
        quantity,
        building: Some(String::from("B1")),
        slot: Some(String::from("A-01")),
    }
}

/// One order of two lines against a stocked primary site; the first
/// reference is covered, the second is not in the catalog.
pub fn mixed_store() -> MemoryStore {
    MemoryStore::new()
        .with_orders(vec![test_order()])
        .with_lines(vec![
            test_line("11", "VIS-M6", 5.0),
            test_line("12", "GHOST", 1.0),
        ])
        .with_products(vec![internal_product("VIS-M6")])
        .with_inventory(vec![stock("VIS-M6", "Paris", 10.0)])
}
