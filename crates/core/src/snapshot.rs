// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use stock_alloc_domain::{
    IncomingShipment, InventoryRecord, LineStatus, Product, Reference, ReservationRecord, Site,
    StockLocation,
};
use time::Date;

/// The run-scoped reference data snapshot.
///
/// All list reads happen once, before the first line is considered;
/// every line of the run is judged against this same immutable state.
/// Quantities consumed during the run are tracked separately by the
/// [`crate::UsageTracker`].
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    products: Vec<Product>,
    inventory: Vec<InventoryRecord>,
    arrivals: Vec<IncomingShipment>,
    reservations: Vec<ReservationRecord>,
}

impl ReferenceData {
    /// Creates a snapshot from the four reference collections.
    #[must_use]
    pub const fn new(
        products: Vec<Product>,
        inventory: Vec<InventoryRecord>,
        arrivals: Vec<IncomingShipment>,
        reservations: Vec<ReservationRecord>,
    ) -> Self {
        Self {
            products,
            inventory,
            arrivals,
            reservations,
        }
    }

    /// Looks up the catalog product for a reference.
    #[must_use]
    pub fn product(&self, reference: &Reference) -> Option<&Product> {
        self.products
            .iter()
            .find(|product| &product.reference == reference)
    }

    /// Sums the on-hand inventory for a reference at a site.
    #[must_use]
    pub fn on_hand(&self, reference: &Reference, site: &Site) -> f64 {
        self.inventory
            .iter()
            .filter(|record| &record.reference == reference && &record.site == site)
            .map(|record| record.quantity)
            .sum()
    }

    /// Returns the location of the first inventory row holding this
    /// reference at a site, used to report where an allocation landed.
    #[must_use]
    pub fn first_location(&self, reference: &Reference, site: &Site) -> Option<StockLocation> {
        self.inventory
            .iter()
            .find(|record| &record.reference == reference && &record.site == site)
            .map(|record| StockLocation {
                site: record.site.clone(),
                building: record.building.clone(),
                slot: record.slot.clone(),
            })
    }

    /// Sums the reservation quantities still claiming stock for a
    /// reference at a site.
    #[must_use]
    pub fn committed(&self, reference: &Reference, site: &Site) -> f64 {
        self.reservations
            .iter()
            .filter(|record| {
                &record.reference == reference
                    && record.site.as_ref() == Some(site)
                    && record.claims_stock()
            })
            .map(|record| record.quantity)
            .sum()
    }

    /// Sums the incoming shipment quantities arriving strictly before
    /// a cutoff date. Shipments without a parsable arrival date are
    /// excluded.
    #[must_use]
    pub fn incoming_before(&self, reference: &Reference, cutoff: Date) -> f64 {
        self.arrivals
            .iter()
            .filter(|shipment| {
                &shipment.reference == reference
                    && shipment.arrival_date.is_some_and(|arrival| arrival < cutoff)
            })
            .map(|shipment| shipment.quantity)
            .sum()
    }

    /// Sums the reservation quantities already promised against
    /// incoming shipments (status "Arrivage") for a reference.
    #[must_use]
    pub fn awaiting_arrival(&self, reference: &Reference) -> f64 {
        self.reservations
            .iter()
            .filter(|record| {
                &record.reference == reference && record.status == LineStatus::AwaitingArrival
            })
            .map(|record| record.quantity)
            .sum()
    }
}
