// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::snapshot::ReferenceData;
use crate::tracker::{SourceBucket, UsageTracker};
use stock_alloc_domain::{Order, OrderLine, Origin, StockLocation};

/// Why a line could not be covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortageReason {
    /// The reference does not exist in the product catalog.
    ProductNotFound,
    /// Neither site stock nor incoming shipments cover the quantity.
    InsufficientSupply,
}

impl ShortageReason {
    /// Converts this reason to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ProductNotFound => "produit introuvable",
            Self::InsufficientSupply => "stock et arrivage insuffisants",
        }
    }
}

impl std::fmt::Display for ShortageReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The result of allocating a single order line.
#[derive(Debug, Clone, PartialEq)]
pub enum AllocationOutcome {
    /// The line is covered.
    Allocated {
        /// The supply bucket the quantity was drawn from.
        source: SourceBucket,
        /// The physical location of the allocated stock, for site
        /// allocations that matched an inventory row.
        location: Option<StockLocation>,
    },
    /// The line cannot be covered.
    Shortage {
        /// Why the line could not be covered.
        reason: ShortageReason,
    },
}

/// Allocates one order line against the reference data snapshot.
///
/// The cascade tries each supply source in order of preference and
/// stops at the first one that covers the full quantity; partial fills
/// across sources are never attempted:
///
/// 1. unknown reference: shortage (`produit introuvable`);
/// 2. external-origin product: allocated, supply is unconstrained;
/// 3. primary site: on-hand minus committed reservations minus
///    quantities already granted this run;
/// 4. secondary site, when the order has one: same computation;
/// 5. incoming shipments arriving strictly before the delivery date,
///    minus reservations already awaiting arrival, minus quantities
///    already granted this run;
/// 6. otherwise shortage (`stock et arrivage insuffisants`).
///
/// Granted quantities are recorded in the tracker so that later lines
/// of the same run see reduced availability. The snapshot itself is
/// never mutated: the same snapshot and the same lines always produce
/// the same outcomes.
#[must_use]
pub fn allocate(
    line: &OrderLine,
    order: &Order,
    data: &ReferenceData,
    tracker: &mut UsageTracker,
) -> AllocationOutcome {
    let Some(product) = data.product(&line.reference) else {
        return AllocationOutcome::Shortage {
            reason: ShortageReason::ProductNotFound,
        };
    };

    if product.origin == Origin::External {
        return AllocationOutcome::Allocated {
            source: SourceBucket::External,
            location: None,
        };
    }

    let mut sites: Vec<(&stock_alloc_domain::Site, SourceBucket)> =
        vec![(&order.primary_site, SourceBucket::Primary)];
    if let Some(secondary) = &order.secondary_site {
        sites.push((secondary, SourceBucket::Secondary));
    }

    for (site, bucket) in sites {
        let available: f64 = data.on_hand(&line.reference, site)
            - data.committed(&line.reference, site)
            - tracker.used(&line.reference, bucket);
        if available >= line.quantity {
            tracker.record(&line.reference, bucket, line.quantity);
            return AllocationOutcome::Allocated {
                source: bucket,
                location: data.first_location(&line.reference, site),
            };
        }
    }

    if let Some(delivery) = order.delivery_date {
        let available: f64 = data.incoming_before(&line.reference, delivery)
            - data.awaiting_arrival(&line.reference)
            - tracker.used(&line.reference, SourceBucket::Incoming);
        if available >= line.quantity {
            tracker.record(&line.reference, SourceBucket::Incoming, line.quantity);
            return AllocationOutcome::Allocated {
                source: SourceBucket::Incoming,
                location: None,
            };
        }
    }

    AllocationOutcome::Shortage {
        reason: ShortageReason::InsufficientSupply,
    }
}
