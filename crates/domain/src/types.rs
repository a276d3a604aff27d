// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// A product reference, the catalog match key shared by order lines,
/// products, inventory rows, and incoming shipments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reference(String);

impl Reference {
    /// Creates a new reference from a raw string value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the raw reference string.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Reference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stock site identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Site(String);

impl Site {
    /// Creates a new site from a raw string value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the raw site string.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Site {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The lifecycle status of an order line as carried on the wire.
///
/// The hosted list stores free-text status values; the known ones are
/// enumerated here and anything unrecognized is preserved verbatim in
/// `Other` so a read-modify-write cycle never loses information.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineStatus {
    /// "Reservé" — the line holds stock at a site.
    Reserved,
    /// "Préparé" — the line has been picked and prepared.
    Prepared,
    /// "Sortie produits" — the stock has left the site.
    ShippedOut,
    /// "Arrivage" — the line is waiting on an incoming shipment.
    AwaitingArrival,
    /// "Rupture (SdF)" — the line could not be covered.
    Shortage,
    /// "Commandé" — the line was passed on to an external supplier.
    Ordered,
    /// Any status value not in the known vocabulary.
    Other(String),
}

impl LineStatus {
    /// Parses a wire status value. Never fails; unknown values map to
    /// [`LineStatus::Other`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "Reservé" => Self::Reserved,
            "Préparé" => Self::Prepared,
            "Sortie produits" => Self::ShippedOut,
            "Arrivage" => Self::AwaitingArrival,
            "Rupture (SdF)" => Self::Shortage,
            "Commandé" => Self::Ordered,
            other => Self::Other(other.to_string()),
        }
    }

    /// Converts this status to its wire representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Reserved => "Reservé",
            Self::Prepared => "Préparé",
            Self::ShippedOut => "Sortie produits",
            Self::AwaitingArrival => "Arrivage",
            Self::Shortage => "Rupture (SdF)",
            Self::Ordered => "Commandé",
            Self::Other(value) => value,
        }
    }

    /// Returns true for statuses whose lines hold physical stock at a
    /// site: Reserved, Prepared, and `ShippedOut`.
    #[must_use]
    pub const fn is_committed(&self) -> bool {
        matches!(self, Self::Reserved | Self::Prepared | Self::ShippedOut)
    }
}

impl std::fmt::Display for LineStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether a product is sourced from internal stock or an external
/// supplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Origin {
    /// Origin value "SDF": the product is subject to inventory control.
    Internal,
    /// Any other origin: supply is the supplier's problem, the product
    /// is always considered available.
    External,
}

impl Origin {
    /// Parses a wire origin value. Never fails; only the exact value
    /// "SDF" maps to [`Origin::Internal`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value == "SDF" {
            Self::Internal
        } else {
            Self::External
        }
    }
}

/// A physical stock location: site plus optional building and slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLocation {
    /// The site holding the stock.
    pub site: Site,
    /// The building within the site, when recorded.
    pub building: Option<String>,
    /// The slot within the building, when recorded.
    pub slot: Option<String>,
}
