// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Typed decoding of raw list items into domain entities.
//!
//! Field values follow the domain's lenient parsing rules: quantities
//! coerce to zero, dates to `None`, and unknown statuses are kept
//! verbatim. Only an item with no `fields` object at all is a decode
//! error; a malformed field value never fails a run.

use crate::error::GatewayError;
use serde::Deserialize;
use serde_json::Value;
use stock_alloc_domain::{
    IncomingShipment, InventoryRecord, LineStatus, Order, OrderLine, Origin, Product, Reference,
    ReservationRecord, Site, parse,
};
use time::Date;

/// One item of a list page, with its expanded `fields` payload.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ListItem {
    pub id: String,
    #[serde(default)]
    pub fields: Value,
}

/// One page of a list read.
#[derive(Debug, Deserialize)]
pub(crate) struct ListPage {
    #[serde(default)]
    pub value: Vec<ListItem>,
    #[serde(rename = "@odata.nextLink")]
    pub next_link: Option<String>,
}

pub(crate) fn order(item: &ListItem) -> Result<Order, GatewayError> {
    let fields: &Value = fields_of(item, "commandes")?;
    Ok(Order::new(
        item.id.clone(),
        text(fields, "CMD_ID").unwrap_or_default(),
        Site::new(text(fields, "Site_Stock").unwrap_or_default()),
        text(fields, "Site_Stock_second"),
        date(fields, "Date_livraison"),
        text(fields, "Statut"),
    ))
}

pub(crate) fn order_line(item: &ListItem) -> Result<OrderLine, GatewayError> {
    let fields: &Value = fields_of(item, "details")?;
    Ok(OrderLine {
        id: item.id.clone(),
        order_id: text(fields, "CMD_ID").unwrap_or_default(),
        reference: Reference::new(text(fields, "Title").unwrap_or_default()),
        quantity: quantity(fields, "Quantite"),
        status: status(fields),
        site: text(fields, "Site").map(Site::new),
    })
}

pub(crate) fn product(item: &ListItem) -> Result<Product, GatewayError> {
    let fields: &Value = fields_of(item, "produits")?;
    Ok(Product {
        reference: Reference::new(text(fields, "Title").unwrap_or_default()),
        origin: Origin::parse(&text(fields, "Origine").unwrap_or_default()),
    })
}

pub(crate) fn inventory(item: &ListItem) -> Result<InventoryRecord, GatewayError> {
    let fields: &Value = fields_of(item, "inventaire")?;
    Ok(InventoryRecord {
        reference: Reference::new(text(fields, "Title").unwrap_or_default()),
        site: Site::new(text(fields, "Site").unwrap_or_default()),
        quantity: quantity(fields, "Quantite"),
        building: text(fields, "Batiment"),
        slot: text(fields, "Emplacement"),
    })
}

pub(crate) fn arrival(item: &ListItem) -> Result<IncomingShipment, GatewayError> {
    let fields: &Value = fields_of(item, "arrivages")?;
    Ok(IncomingShipment {
        reference: Reference::new(text(fields, "Title").unwrap_or_default()),
        arrival_date: date(fields, "Date"),
        quantity: quantity(fields, "Quantite"),
    })
}

pub(crate) fn reservation(item: &ListItem) -> Result<ReservationRecord, GatewayError> {
    let fields: &Value = fields_of(item, "details")?;
    Ok(ReservationRecord {
        reference: Reference::new(text(fields, "Title").unwrap_or_default()),
        site: text(fields, "Site").map(Site::new),
        quantity: quantity(fields, "Quantite"),
        status: status(fields),
        reconciled: flag(fields, "Comptabilise_inventaire"),
    })
}

fn fields_of<'a>(item: &'a ListItem, collection: &'static str) -> Result<&'a Value, GatewayError> {
    if item.fields.is_object() {
        Ok(&item.fields)
    } else {
        Err(GatewayError::Decode {
            collection,
            message: format!("item {} has no fields payload", item.id),
        })
    }
}

fn text(fields: &Value, name: &str) -> Option<String> {
    match fields.get(name) {
        Some(Value::String(value)) => Some(value.clone()),
        Some(Value::Number(value)) => Some(value.to_string()),
        _ => None,
    }
}

fn quantity(fields: &Value, name: &str) -> f64 {
    match fields.get(name) {
        Some(Value::Number(value)) => value.as_f64().unwrap_or(0.0),
        Some(Value::String(value)) => parse::quantity(value),
        _ => 0.0,
    }
}

fn date(fields: &Value, name: &str) -> Option<Date> {
    text(fields, name).and_then(|value| parse::calendar_date(&value))
}

fn status(fields: &Value) -> LineStatus {
    LineStatus::parse(&text(fields, "Statut").unwrap_or_default())
}

// The reconciled marker is stored as the number 1, but boolean and
// string renditions show up in older rows.
fn flag(fields: &Value, name: &str) -> bool {
    match fields.get(name) {
        Some(Value::Number(value)) => value.as_i64() == Some(1),
        Some(Value::Bool(value)) => *value,
        Some(Value::String(value)) => value == "1",
        _ => false,
    }
}
