// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The production list store backend.
//!
//! Speaks a Graph-style hosted list API: client-credentials token
//! acquisition, `$expand=fields` item reads with `@odata.nextLink`
//! pagination, `$filter` queries batched into chunks, and
//! `PATCH .../items/{id}/fields` for writes. No retries; a failed
//! request surfaces as an error and the run aborts.

use crate::backend::{LinePatch, ListStore};
use crate::config::GatewayConfig;
use crate::decode::{self, ListItem, ListPage};
use crate::error::GatewayError;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::{Duration, Instant};
use stock_alloc_domain::{
    IncomingShipment, InventoryRecord, Order, OrderLine, Product, Reference, ReservationRecord,
};
use tokio::sync::Mutex;
use tracing::{debug, error, info};

/// Maximum number of values per `$filter` clause. The list API
/// rejects overlong filter expressions, so reference lookups are
/// batched.
pub(crate) const FILTER_CHUNK_SIZE: usize = 20;

/// Filtered reads hit non-indexed columns; without this header the
/// list API refuses the query outright.
const PREFER_NON_INDEXED: &str = "HonorNonIndexedQueriesWarningMayFailRandomly";

/// Renewal margin subtracted from a token's lifetime.
const TOKEN_EXPIRY_MARGIN: Duration = Duration::from_secs(60);

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: Option<u64>,
}

#[derive(Debug, Clone)]
struct CachedToken {
    value: String,
    expires_at: Instant,
}

/// REST backend over the hosted list API.
pub struct RestStore {
    config: GatewayConfig,
    http: reqwest::Client,
    token: Mutex<Option<CachedToken>>,
}

impl RestStore {
    /// Creates a store from the given configuration.
    #[must_use]
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
            token: Mutex::new(None),
        }
    }

    /// Returns a bearer token, acquiring a fresh one when the cached
    /// token is absent or within the expiry margin.
    async fn token(&self) -> Result<String, GatewayError> {
        let mut cached = self.token.lock().await;
        if let Some(token) = cached.as_ref() {
            if token.expires_at > Instant::now() {
                return Ok(token.value.clone());
            }
        }

        let response = self
            .http
            .post(&self.config.token_url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.config.client_id.as_str()),
                ("client_secret", self.config.client_secret.as_str()),
                ("scope", self.config.scope.as_str()),
            ])
            .send()
            .await
            .map_err(|err| GatewayError::Auth {
                reason: err.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body: String = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Token acquisition refused");
            return Err(GatewayError::Auth {
                reason: format!("token endpoint answered {status}"),
            });
        }

        let token: TokenResponse =
            response.json().await.map_err(|err| GatewayError::Auth {
                reason: format!("malformed token response: {err}"),
            })?;
        info!("Access token acquired");

        let lifetime: Duration = Duration::from_secs(token.expires_in.unwrap_or(3599));
        *cached = Some(CachedToken {
            value: token.access_token.clone(),
            expires_at: Instant::now() + lifetime.saturating_sub(TOKEN_EXPIRY_MARGIN),
        });
        Ok(token.access_token)
    }

    fn items_url(&self, list_id: &str) -> String {
        format!(
            "{}/sites/{}/lists/{}/items?$expand=fields",
            self.config.base_url, self.config.site_id, list_id
        )
    }

    /// Reads a list in full, following `@odata.nextLink` until the
    /// last page.
    async fn list_items(
        &self,
        list_id: &str,
        filter: Option<&str>,
    ) -> Result<Vec<ListItem>, GatewayError> {
        let token: String = self.token().await?;

        let mut url: String = self.items_url(list_id);
        if let Some(filter) = filter {
            url.push_str("&$filter=");
            url.push_str(&encode_filter(filter));
        }
        debug!(url = %url, "List read");

        let mut items: Vec<ListItem> = Vec::new();
        let mut next: Option<String> = Some(url);
        while let Some(page_url) = next {
            let mut request = self.http.get(&page_url).bearer_auth(&token);
            if filter.is_some() {
                request = request.header("Prefer", PREFER_NON_INDEXED);
            }
            let response = request.send().await?;

            let status = response.status();
            if !status.is_success() {
                let body: String = response.text().await.unwrap_or_default();
                error!(status = %status, body = %body, "List read failed");
                return Err(GatewayError::Http {
                    status: status.as_u16(),
                    body,
                });
            }

            let page: ListPage = response.json().await?;
            items.extend(page.value);
            next = page.next_link;
        }

        Ok(items)
    }

    async fn patch_fields(
        &self,
        list_id: &str,
        item_id: &str,
        fields: &serde_json::Value,
    ) -> Result<(), GatewayError> {
        let token: String = self.token().await?;
        let url: String = format!(
            "{}/sites/{}/lists/{}/items/{}/fields",
            self.config.base_url, self.config.site_id, list_id, item_id
        );

        let response = self
            .http
            .patch(&url)
            .bearer_auth(&token)
            .json(fields)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body: String = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, item_id = %item_id, "Field patch failed");
            return Err(GatewayError::Http {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ListStore for RestStore {
    async fn get_order(&self, order_id: &str) -> Result<Option<Order>, GatewayError> {
        let filter: String = format!("fields/CMD_ID eq {order_id}");
        let items: Vec<ListItem> = self
            .list_items(&self.config.orders_list, Some(&filter))
            .await?;
        items.first().map(decode::order).transpose()
    }

    async fn list_order_lines(&self, order_id: &str) -> Result<Vec<OrderLine>, GatewayError> {
        let filter: String = format!("fields/CMD_ID eq {order_id}");
        let items: Vec<ListItem> = self
            .list_items(&self.config.details_list, Some(&filter))
            .await?;
        items.iter().map(decode::order_line).collect()
    }

    async fn list_products(&self) -> Result<Vec<Product>, GatewayError> {
        let items: Vec<ListItem> = self.list_items(&self.config.products_list, None).await?;
        items.iter().map(decode::product).collect()
    }

    async fn list_inventory(&self) -> Result<Vec<InventoryRecord>, GatewayError> {
        let items: Vec<ListItem> = self.list_items(&self.config.inventory_list, None).await?;
        items.iter().map(decode::inventory).collect()
    }

    async fn list_arrivals(&self) -> Result<Vec<IncomingShipment>, GatewayError> {
        let items: Vec<ListItem> = self.list_items(&self.config.arrivals_list, None).await?;
        items.iter().map(decode::arrival).collect()
    }

    async fn list_reservations(
        &self,
        references: &[Reference],
    ) -> Result<Vec<ReservationRecord>, GatewayError> {
        let mut records: Vec<ReservationRecord> = Vec::new();
        for clause in split_filter_clauses("fields/Title", references, FILTER_CHUNK_SIZE) {
            let items: Vec<ListItem> = self
                .list_items(&self.config.details_list, Some(&clause))
                .await?;
            for item in &items {
                records.push(decode::reservation(item)?);
            }
        }
        Ok(records)
    }

    async fn update_line_fields(
        &self,
        line_id: &str,
        patch: &LinePatch,
    ) -> Result<(), GatewayError> {
        self.patch_fields(&self.config.details_list, line_id, &patch.to_fields())
            .await
    }

    async fn update_order_status(
        &self,
        order_item_id: &str,
        status: &str,
    ) -> Result<(), GatewayError> {
        self.patch_fields(
            &self.config.orders_list,
            order_item_id,
            &serde_json::json!({ "Statut": status }),
        )
        .await
    }
}

/// Splits a reference set into `$filter` clauses of at most
/// `chunk_size` equality tests each, joined with `or`.
pub(crate) fn split_filter_clauses(
    field: &str,
    values: &[Reference],
    chunk_size: usize,
) -> Vec<String> {
    values
        .chunks(chunk_size)
        .map(|chunk| {
            chunk
                .iter()
                .map(|value| format!("{field} eq '{}'", value.value()))
                .collect::<Vec<String>>()
                .join(" or ")
        })
        .collect()
}

// Minimal query encoding: the list API tolerates quotes, parentheses,
// and slashes in $filter, but not raw spaces.
fn encode_filter(filter: &str) -> String {
    filter.replace(' ', "%20")
}
