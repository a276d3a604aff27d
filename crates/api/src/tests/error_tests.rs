// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ApiError, translate_gateway_error};
use stock_alloc_gateway::GatewayError;

#[test]
fn test_auth_errors_keep_their_category() {
    let translated: ApiError = translate_gateway_error(&GatewayError::Auth {
        reason: String::from("token endpoint answered 400"),
    });

    assert_eq!(
        translated,
        ApiError::AuthenticationFailed {
            reason: String::from("token endpoint answered 400")
        }
    );
}

#[test]
fn test_config_errors_are_internal() {
    let translated: ApiError = translate_gateway_error(&GatewayError::Config {
        name: String::from("STOCK_ALLOC_BASE_URL"),
    });

    assert!(matches!(translated, ApiError::Internal { .. }));
}

#[test]
fn test_http_and_decode_errors_are_gateway_failures() {
    let http: ApiError = translate_gateway_error(&GatewayError::Http {
        status: 503,
        body: String::from("throttled"),
    });
    assert!(matches!(http, ApiError::GatewayFailure { .. }));

    let decode: ApiError = translate_gateway_error(&GatewayError::Decode {
        collection: "produits",
        message: String::from("item 9 has no fields payload"),
    });
    assert!(matches!(decode, ApiError::GatewayFailure { .. }));
}

#[test]
fn test_display_is_reader_friendly() {
    let err: ApiError = ApiError::MissingInput {
        field: String::from("commande_id"),
    };
    assert_eq!(err.to_string(), "Missing required input: commande_id");
}
