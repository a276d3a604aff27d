// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{LineStatus, Reference, Site};
use serde::{Deserialize, Serialize};
use time::Date;

/// A customer order header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// The list item identifier, used for write-back.
    pub item_id: String,
    /// The order's business identifier (wire field `CMD_ID`).
    pub id: String,
    /// The primary stock site for this order.
    pub primary_site: Site,
    /// The fallback stock site, when one is configured.
    pub secondary_site: Option<Site>,
    /// The requested delivery date, when parsable.
    pub delivery_date: Option<Date>,
    /// The order's top-level status, preserved verbatim.
    pub status: Option<String>,
}

impl Order {
    /// Creates an order, normalizing the secondary site value.
    ///
    /// The list stores "no secondary site" as either an empty string or
    /// the sentinel `"0"`; both normalize to `None`.
    #[must_use]
    pub fn new(
        item_id: impl Into<String>,
        id: impl Into<String>,
        primary_site: Site,
        secondary_site: Option<String>,
        delivery_date: Option<Date>,
        status: Option<String>,
    ) -> Self {
        Self {
            item_id: item_id.into(),
            id: id.into(),
            primary_site,
            secondary_site: secondary_site
                .filter(|site| !site.is_empty() && site != "0")
                .map(Site::new),
            delivery_date,
            status,
        }
    }
}

/// A single line of an order: one reference, one requested quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    /// The list item identifier, used for write-back.
    pub id: String,
    /// The owning order identifier.
    pub order_id: String,
    /// The requested product reference.
    pub reference: Reference,
    /// The requested quantity.
    pub quantity: f64,
    /// The line's current status.
    pub status: LineStatus,
    /// The site this line holds stock at, once allocated.
    pub site: Option<Site>,
}
