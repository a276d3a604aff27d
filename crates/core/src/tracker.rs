// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::HashMap;
use stock_alloc_domain::Reference;

/// The supply bucket an allocation draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceBucket {
    /// The order's primary stock site.
    Primary,
    /// The order's secondary stock site.
    Secondary,
    /// Incoming shipments arriving before the delivery date.
    Incoming,
    /// An external supplier; supply is never constrained.
    External,
}

impl SourceBucket {
    /// Converts this bucket to a display name for diagnostics.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Incoming => "incoming",
            Self::External => "external",
        }
    }
}

impl std::fmt::Display for SourceBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tracks quantities already granted during a run so that two lines of
/// the same order cannot both claim the same physical stock.
///
/// The reference-data snapshot is immutable for the whole run; without
/// this ledger, a second line for the same reference would see the
/// same availability the first line already consumed.
///
/// One tracker is created per run and never shared across runs.
#[derive(Debug, Default)]
pub struct UsageTracker {
    used: HashMap<(Reference, SourceBucket), f64>,
}

impl UsageTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the quantity already granted from a bucket for a
    /// reference during this run. Unknown keys yield zero.
    #[must_use]
    pub fn used(&self, reference: &Reference, bucket: SourceBucket) -> f64 {
        self.used
            .get(&(reference.clone(), bucket))
            .copied()
            .unwrap_or(0.0)
    }

    /// Records a granted quantity against a bucket for a reference.
    pub fn record(&mut self, reference: &Reference, bucket: SourceBucket, quantity: f64) {
        *self.used.entry((reference.clone(), bucket)).or_insert(0.0) += quantity;
    }
}
