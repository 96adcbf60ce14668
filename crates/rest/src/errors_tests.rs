// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[test]
fn woo_error_body() {
    let err = status_error(
        400,
        r#"{"code":"woocommerce_rest_coupon_code_already_exists","message":"The coupon code already exists","data":{"status":400}}"#,
    );

    assert_eq!(err.category, ErrorCategory::Api);
    assert_eq!(err.status, Some(400));
    assert_eq!(
        err.code.as_deref(),
        Some("woocommerce_rest_coupon_code_already_exists")
    );
    assert_eq!(err.message, "The coupon code already exists");
}

#[test]
fn wpcom_error_body() {
    let err = status_error(
        403,
        r#"{"error":"unauthorized","message":"User cannot view stats"}"#,
    );

    assert_eq!(err.category, ErrorCategory::Unauthorized);
    assert_eq!(err.code.as_deref(), Some("unauthorized"));
    assert_eq!(err.message, "User cannot view stats");
}

#[parameterized(
    html = { 502, "<html>Bad Gateway</html>", "Bad Gateway" },
    empty = { 500, "", "Internal Server Error" },
    blank_message = { 404, r#"{"code":"x","message":""}"#, "Not Found" },
    unknown_status = { 599, "", "HTTP 599" },
)]
fn fallback_message_from_status(status: u16, body: &str, expected: &str) {
    let err = status_error(status, body);
    assert_eq!(err.message, expected);
    assert_eq!(err.status, Some(status));
}

#[test]
fn decode_error_is_invalid_response() {
    let json_err = serde_json::from_str::<Vec<i64>>("{").unwrap_err();
    let err = decode_error(&json_err);
    assert_eq!(err.category, ErrorCategory::InvalidResponse);
    assert!(err.message.starts_with("unexpected response body"));
}
