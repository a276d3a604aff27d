// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! List store backends.
//!
//! The [`ListStore`] trait is the single seam between the orchestrator
//! and the hosted list store. The `rest` backend talks to the real
//! API; the `memory` backend serves fixtures for tests and local
//! development. Callers hold a `dyn ListStore` and cannot tell them
//! apart.

pub mod memory;
pub mod rest;

use crate::error::GatewayError;
use async_trait::async_trait;
use serde_json::{Map, Value};
use stock_alloc_domain::{
    IncomingShipment, InventoryRecord, Order, OrderLine, Product, Reference, ReservationRecord,
};

/// A partial update to an order line's fields.
///
/// Every value is absolute, never an increment: re-applying the same
/// patch is idempotent, so a caller-level retry after a lost response
/// is safe. `None` fields are left untouched on the row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LinePatch {
    /// New value for the line status.
    pub status: Option<String>,
    /// New value for the preparation status.
    pub prep_status: Option<String>,
    /// Site the line was prepared at.
    pub prep_site: Option<String>,
    /// Building the line was prepared at.
    pub prep_building: Option<String>,
    /// Slot the line was prepared at.
    pub prep_slot: Option<String>,
}

impl LinePatch {
    /// Converts this patch to the wire field map, skipping unset
    /// fields.
    #[must_use]
    pub fn to_fields(&self) -> Value {
        let mut fields: Map<String, Value> = Map::new();
        let entries: [(&str, &Option<String>); 5] = [
            ("Statut", &self.status),
            ("Statut_prepa", &self.prep_status),
            ("Site_prepa", &self.prep_site),
            ("Batiment_prepa", &self.prep_building),
            ("Emplacement_prepa", &self.prep_slot),
        ];
        for (name, value) in entries {
            if let Some(value) = value {
                fields.insert(name.to_string(), Value::String(value.clone()));
            }
        }
        Value::Object(fields)
    }
}

/// The data access boundary for the hosted list store.
///
/// Reads return fully decoded domain entities; implementations handle
/// pagination and filtering internally. Writes propagate failures to
/// the caller unchanged.
#[async_trait]
pub trait ListStore: Send + Sync {
    /// Fetches an order header by its business identifier.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] if the read fails; a missing order
    /// is `Ok(None)`, not an error.
    async fn get_order(&self, order_id: &str) -> Result<Option<Order>, GatewayError>;

    /// Fetches the lines of an order.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] if the read fails.
    async fn list_order_lines(&self, order_id: &str) -> Result<Vec<OrderLine>, GatewayError>;

    /// Fetches the full product catalog.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] if the read fails.
    async fn list_products(&self) -> Result<Vec<Product>, GatewayError>;

    /// Fetches all inventory rows.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] if the read fails.
    async fn list_inventory(&self) -> Result<Vec<InventoryRecord>, GatewayError>;

    /// Fetches all scheduled incoming shipments.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] if the read fails.
    async fn list_arrivals(&self) -> Result<Vec<IncomingShipment>, GatewayError>;

    /// Fetches the cross-order reservation history for a set of
    /// references.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] if any of the underlying reads fail.
    async fn list_reservations(
        &self,
        references: &[Reference],
    ) -> Result<Vec<ReservationRecord>, GatewayError>;

    /// Applies a field patch to an order line.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] if the write fails.
    async fn update_line_fields(
        &self,
        line_id: &str,
        patch: &LinePatch,
    ) -> Result<(), GatewayError>;

    /// Updates an order's top-level status by its list item
    /// identifier.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] if the write fails.
    async fn update_order_status(
        &self,
        order_item_id: &str,
        status: &str,
    ) -> Result<(), GatewayError>;
}
