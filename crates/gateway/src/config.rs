// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::GatewayError;

/// Connection settings for the REST backend, read from the
/// environment.
///
/// The client secret is held in memory only; it is never logged and
/// never appears in error messages.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the list API (e.g. `https://graph.microsoft.com/v1.0`).
    pub base_url: String,
    /// Token endpoint URL for client-credentials authentication.
    pub token_url: String,
    /// OAuth2 client identifier.
    pub client_id: String,
    /// OAuth2 client secret.
    pub client_secret: String,
    /// OAuth2 scope requested with the token.
    pub scope: String,
    /// The hosted site identifier.
    pub site_id: String,
    /// The orders list identifier.
    pub orders_list: String,
    /// The order-details list identifier (order lines and the
    /// cross-order reservation history are rows of this same list).
    pub details_list: String,
    /// The product catalog list identifier.
    pub products_list: String,
    /// The inventory list identifier.
    pub inventory_list: String,
    /// The incoming-shipments list identifier.
    pub arrivals_list: String,
}

const DEFAULT_SCOPE: &str = "https://graph.microsoft.com/.default";

impl GatewayConfig {
    /// Reads the configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Config`] naming the first missing
    /// variable. `STOCK_ALLOC_SCOPE` is optional and defaults to the
    /// Graph default scope.
    pub fn from_env() -> Result<Self, GatewayError> {
        Ok(Self {
            base_url: require("STOCK_ALLOC_BASE_URL")?,
            token_url: require("STOCK_ALLOC_TOKEN_URL")?,
            client_id: require("STOCK_ALLOC_CLIENT_ID")?,
            client_secret: require("STOCK_ALLOC_CLIENT_SECRET")?,
            scope: std::env::var("STOCK_ALLOC_SCOPE")
                .unwrap_or_else(|_| String::from(DEFAULT_SCOPE)),
            site_id: require("STOCK_ALLOC_SITE_ID")?,
            orders_list: require("STOCK_ALLOC_ORDERS_LIST")?,
            details_list: require("STOCK_ALLOC_DETAILS_LIST")?,
            products_list: require("STOCK_ALLOC_PRODUCTS_LIST")?,
            inventory_list: require("STOCK_ALLOC_INVENTORY_LIST")?,
            arrivals_list: require("STOCK_ALLOC_ARRIVALS_LIST")?,
        })
    }
}

fn require(name: &'static str) -> Result<String, GatewayError> {
    std::env::var(name).map_err(|_| GatewayError::Config {
        name: name.to_string(),
    })
}
