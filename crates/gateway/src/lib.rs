// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Data access gateway for the stock allocation service.
//!
//! All reads and writes against the hosted list store go through the
//! [`ListStore`] trait. Two backends implement it:
//!
//! - [`RestStore`] — the production backend, a Graph-style REST client
//!   with client-credentials authentication, transparent pagination,
//!   and chunked filter queries;
//! - [`MemoryStore`] — an in-process fixture store for tests and local
//!   development.
//!
//! Raw list payloads never leave this crate: items are decoded into
//! domain entities at the boundary, with the domain's lenient parsing
//! rules applied to quantities, dates, and statuses.

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

mod backend;
mod config;
mod decode;
mod error;

#[cfg(test)]
mod tests;

// Re-export public types
pub use backend::memory::MemoryStore;
pub use backend::rest::RestStore;
pub use backend::{LinePatch, ListStore};
pub use config::GatewayConfig;
pub use error::GatewayError;
