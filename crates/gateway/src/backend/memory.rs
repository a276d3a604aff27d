// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-process fixture backend.
//!
//! Serves a fixed set of domain entities and records every write in a
//! patch log, so tests can assert exactly what a run would have
//! persisted. Also backs the server's `--in-memory` mode.

use crate::backend::{LinePatch, ListStore};
use crate::error::GatewayError;
use async_trait::async_trait;
use std::sync::{Mutex, PoisonError};
use stock_alloc_domain::{
    IncomingShipment, InventoryRecord, LineStatus, Order, OrderLine, Origin, Product, Reference,
    ReservationRecord, Site,
};
use time::macros::date;

/// Fixture-backed list store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    orders: Vec<Order>,
    lines: Vec<OrderLine>,
    products: Vec<Product>,
    inventory: Vec<InventoryRecord>,
    arrivals: Vec<IncomingShipment>,
    reservations: Vec<ReservationRecord>,
    line_patches: Mutex<Vec<(String, LinePatch)>>,
    order_patches: Mutex<Vec<(String, String)>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with a small demo data set: one order of three
    /// lines against a stocked primary site, a fallback site, and one
    /// incoming shipment.
    #[must_use]
    pub fn with_demo_fixtures() -> Self {
        let order: Order = Order::new(
            "1",
            "1001",
            Site::new("Paris"),
            Some(String::from("Lyon")),
            Some(date!(2025 - 06 - 15)),
            None,
        );
        let line = |id: &str, reference: &str, quantity: f64| OrderLine {
            id: id.to_string(),
            order_id: String::from("1001"),
            reference: Reference::new(reference),
            quantity,
            status: LineStatus::Other(String::from("Nouveau")),
            site: None,
        };
        Self::new()
            .with_orders(vec![order])
            .with_lines(vec![
                line("11", "VIS-M6", 40.0),
                line("12", "PLAQUE-200", 6.0),
                line("13", "JOINT-EXT", 2.0),
            ])
            .with_products(vec![
                Product {
                    reference: Reference::new("VIS-M6"),
                    origin: Origin::Internal,
                },
                Product {
                    reference: Reference::new("PLAQUE-200"),
                    origin: Origin::Internal,
                },
                Product {
                    reference: Reference::new("JOINT-EXT"),
                    origin: Origin::External,
                },
            ])
            .with_inventory(vec![
                InventoryRecord {
                    reference: Reference::new("VIS-M6"),
                    site: Site::new("Paris"),
                    quantity: 100.0,
                    building: Some(String::from("B1")),
                    slot: Some(String::from("A-03")),
                },
                InventoryRecord {
                    reference: Reference::new("PLAQUE-200"),
                    site: Site::new("Lyon"),
                    quantity: 10.0,
                    building: Some(String::from("B2")),
                    slot: Some(String::from("C-11")),
                },
            ])
            .with_arrivals(vec![IncomingShipment {
                reference: Reference::new("PLAQUE-200"),
                arrival_date: Some(date!(2025 - 06 - 10)),
                quantity: 20.0,
            }])
    }

    /// Replaces the order fixtures.
    #[must_use]
    pub fn with_orders(mut self, orders: Vec<Order>) -> Self {
        self.orders = orders;
        self
    }

    /// Replaces the order line fixtures.
    #[must_use]
    pub fn with_lines(mut self, lines: Vec<OrderLine>) -> Self {
        self.lines = lines;
        self
    }

    /// Replaces the product fixtures.
    #[must_use]
    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = products;
        self
    }

    /// Replaces the inventory fixtures.
    #[must_use]
    pub fn with_inventory(mut self, inventory: Vec<InventoryRecord>) -> Self {
        self.inventory = inventory;
        self
    }

    /// Replaces the incoming shipment fixtures.
    #[must_use]
    pub fn with_arrivals(mut self, arrivals: Vec<IncomingShipment>) -> Self {
        self.arrivals = arrivals;
        self
    }

    /// Replaces the reservation history fixtures.
    #[must_use]
    pub fn with_reservations(mut self, reservations: Vec<ReservationRecord>) -> Self {
        self.reservations = reservations;
        self
    }

    /// Returns the line patches applied so far, in application order.
    #[must_use]
    pub fn line_patches(&self) -> Vec<(String, LinePatch)> {
        self.line_patches
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the order status patches applied so far.
    #[must_use]
    pub fn order_patches(&self) -> Vec<(String, String)> {
        self.order_patches
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl ListStore for MemoryStore {
    async fn get_order(&self, order_id: &str) -> Result<Option<Order>, GatewayError> {
        Ok(self.orders.iter().find(|order| order.id == order_id).cloned())
    }

    async fn list_order_lines(&self, order_id: &str) -> Result<Vec<OrderLine>, GatewayError> {
        Ok(self
            .lines
            .iter()
            .filter(|line| line.order_id == order_id)
            .cloned()
            .collect())
    }

    async fn list_products(&self) -> Result<Vec<Product>, GatewayError> {
        Ok(self.products.clone())
    }

    async fn list_inventory(&self) -> Result<Vec<InventoryRecord>, GatewayError> {
        Ok(self.inventory.clone())
    }

    async fn list_arrivals(&self) -> Result<Vec<IncomingShipment>, GatewayError> {
        Ok(self.arrivals.clone())
    }

    async fn list_reservations(
        &self,
        references: &[Reference],
    ) -> Result<Vec<ReservationRecord>, GatewayError> {
        Ok(self
            .reservations
            .iter()
            .filter(|record| references.contains(&record.reference))
            .cloned()
            .collect())
    }

    async fn update_line_fields(
        &self,
        line_id: &str,
        patch: &LinePatch,
    ) -> Result<(), GatewayError> {
        self.line_patches
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((line_id.to_string(), patch.clone()));
        Ok(())
    }

    async fn update_order_status(
        &self,
        order_item_id: &str,
        status: &str,
    ) -> Result<(), GatewayError> {
        self.order_patches
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((order_item_id.to_string(), status.to_string()));
        Ok(())
    }
}
