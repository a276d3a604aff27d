// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use stock_alloc_domain::{
    IncomingShipment, InventoryRecord, LineStatus, Order, OrderLine, Origin, Product, Reference,
    ReservationRecord, Site,
};
use time::Date;

pub fn internal_product(reference: &str) -> Product {
    Product {
        reference: Reference::new(reference),
        origin: Origin::Internal,
    }
}

pub fn external_product(reference: &str) -> Product {
    Product {
        reference: Reference::new(reference),
        origin: Origin::External,
    }
}

pub fn inventory(reference: &str, site: &str, quantity: f64) -> InventoryRecord {
    InventoryRecord {
        reference: Reference::new(reference),
        site: Site::new(site),
        quantity,
        building: Some(String::from("B1")),
        slot: Some(String::from("A-01")),
    }
}

pub fn arrival(reference: &str, arrival_date: Option<Date>, quantity: f64) -> IncomingShipment {
    IncomingShipment {
        reference: Reference::new(reference),
        arrival_date,
        quantity,
    }
}

pub fn reservation(
    reference: &str,
    site: &str,
    quantity: f64,
    status: LineStatus,
) -> ReservationRecord {
    ReservationRecord {
        reference: Reference::new(reference),
        site: Some(Site::new(site)),
        quantity,
        status,
        reconciled: false,
    }
}

pub fn order(primary: &str, secondary: Option<&str>, delivery_date: Option<Date>) -> Order {
    Order::new(
        "1",
        "CMD-1",
        Site::new(primary),
        secondary.map(String::from),
        delivery_date,
        None,
    )
}

pub fn line(reference: &str, quantity: f64) -> OrderLine {
    OrderLine {
        id: String::from("item-1"),
        order_id: String::from("CMD-1"),
        reference: Reference::new(reference),
        quantity,
        status: LineStatus::Other(String::from("Nouveau")),
        site: None,
    }
}
