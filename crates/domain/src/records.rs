// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{LineStatus, Origin, Reference, Site};
use serde::{Deserialize, Serialize};
use time::Date;

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// The product reference.
    pub reference: Reference,
    /// Where the product is sourced from.
    pub origin: Origin,
}

/// One inventory row: on-hand stock for a reference at a site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    /// The product reference.
    pub reference: Reference,
    /// The site holding the stock.
    pub site: Site,
    /// The on-hand quantity.
    pub quantity: f64,
    /// The building within the site, when recorded.
    pub building: Option<String>,
    /// The slot within the building, when recorded.
    pub slot: Option<String>,
}

/// A scheduled incoming shipment of a reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomingShipment {
    /// The product reference.
    pub reference: Reference,
    /// The expected arrival date; `None` when the list row carries no
    /// parsable date, which excludes the row from date comparisons.
    pub arrival_date: Option<Date>,
    /// The shipped quantity.
    pub quantity: f64,
}

/// A cross-order reservation line from the shared details list.
///
/// These are other orders' lines for the same references; they reduce
/// what is actually available on hand or incoming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationRecord {
    /// The product reference.
    pub reference: Reference,
    /// The site the reservation holds stock at, when recorded.
    pub site: Option<Site>,
    /// The reserved quantity.
    pub quantity: f64,
    /// The reservation line's status.
    pub status: LineStatus,
    /// Whether a shipped-out line has already been reconciled against
    /// the inventory list (wire field `Comptabilise_inventaire`).
    pub reconciled: bool,
}

impl ReservationRecord {
    /// Returns true when this reservation still counts against on-hand
    /// stock.
    ///
    /// A line claims stock while its status is in the committed set
    /// (Reserved, Prepared, `ShippedOut`), except that a shipped-out
    /// line already reconciled against inventory no longer does: its
    /// departure is reflected in the inventory row itself.
    #[must_use]
    pub const fn claims_stock(&self) -> bool {
        self.status.is_committed()
            && !(matches!(self.status, LineStatus::ShippedOut) && self.reconciled)
    }
}
