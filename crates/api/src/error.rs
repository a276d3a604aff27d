// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use stock_alloc_gateway::GatewayError;

/// API-level errors.
///
/// These are distinct from gateway errors and represent the API
/// contract: callers never see a raw lower-layer error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A required input was not provided.
    MissingInput {
        /// The input field that was missing.
        field: String,
    },
    /// Authentication against the list store failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A list store read or write failed.
    GatewayFailure {
        /// A description of the failure.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingInput { field } => {
                write!(f, "Missing required input: {field}")
            }
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::GatewayFailure { message } => {
                write!(f, "Gateway failure: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a gateway error into the API contract.
///
/// Missing configuration is an internal fault of the deployment, not
/// of the caller's request; authentication keeps its own category so
/// the server can report it distinctly.
#[must_use]
pub fn translate_gateway_error(err: &GatewayError) -> ApiError {
    match err {
        GatewayError::Config { .. } => ApiError::Internal {
            message: err.to_string(),
        },
        GatewayError::Auth { reason } => ApiError::AuthenticationFailed {
            reason: reason.clone(),
        },
        GatewayError::Http { .. } | GatewayError::Request(_) | GatewayError::Decode { .. } => {
            ApiError::GatewayFailure {
                message: err.to_string(),
            }
        }
    }
}
