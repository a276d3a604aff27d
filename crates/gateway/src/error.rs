// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the gateway layer.

use thiserror::Error;

/// Errors raised by the list store backends.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// A required configuration value is missing.
    #[error("Missing configuration value: {name}")]
    Config {
        /// The environment variable that was not set.
        name: String,
    },

    /// Token acquisition failed; no list call was attempted.
    #[error("Token acquisition failed: {reason}")]
    Auth {
        /// Why the token could not be obtained.
        reason: String,
    },

    /// The list API answered with a non-success status.
    #[error("List request failed with status {status}: {body}")]
    Http {
        /// The HTTP status code.
        status: u16,
        /// The response body, for diagnostics.
        body: String,
    },

    /// The request never produced a response (connection, TLS, DNS).
    #[error("Request transport error: {0}")]
    Request(#[from] reqwest::Error),

    /// A list item could not be decoded into a domain entity.
    #[error("Failed to decode {collection} item: {message}")]
    Decode {
        /// The collection the item came from.
        collection: &'static str,
        /// What was wrong with the item.
        message: String,
    },
}
