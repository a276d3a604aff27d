// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! The response types serialize to the established French wire
//! contract; existing callers of the service parse these exact field
//! names.

use serde::{Deserialize, Serialize};

/// A request to run allocation for one order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    /// The order's business identifier.
    pub order_id: String,
    /// Receiving site override for committed lines.
    pub receiving_site: Option<String>,
    /// Receiving building override for committed lines.
    pub receiving_building: Option<String>,
    /// Receiving slot override for committed lines.
    pub receiving_slot: Option<String>,
}

impl RunRequest {
    /// Creates a read-only request carrying just the order identifier.
    #[must_use]
    pub const fn new(order_id: String) -> Self {
        Self {
            order_id,
            receiving_site: None,
            receiving_building: None,
            receiving_slot: None,
        }
    }
}

/// Whether a run persists its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Compute outcomes only; nothing is written.
    Verify,
    /// Persist successful allocations to each line and advance the
    /// order status on completion.
    Commit,
}

/// One line the run could not cover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortageInfo {
    /// The product reference.
    pub reference: String,
    /// The shortage reason, as a wire label.
    #[serde(rename = "raison")]
    pub reason: String,
}

/// The result of an allocation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// The order's business identifier.
    #[serde(rename = "commande_id")]
    pub order_id: String,
    /// The run's final status label.
    #[serde(rename = "statut")]
    pub status: String,
    /// The lines that could not be covered, in order.
    #[serde(rename = "ruptures")]
    pub shortages: Vec<ShortageInfo>,
    /// The number of lines on the order.
    #[serde(rename = "nb_produits_commande")]
    pub line_count: usize,
}
