// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod order;
pub mod parse;
mod records;
mod types;

#[cfg(test)]
mod tests;

// Re-export public types
pub use order::{Order, OrderLine};
pub use records::{IncomingShipment, InventoryRecord, Product, ReservationRecord};
pub use types::{LineStatus, Origin, Reference, Site, StockLocation};
