// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Mapping of HTTP failures onto [`RemoteError`].

use reqwest::StatusCode;
use serde::Deserialize;
use wc_core::{ErrorCategory, RemoteError};

/// Error body sent by WooCommerce (`code`) and WordPress.com (`error`).
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApiErrorBody {
    #[serde(alias = "error")]
    code: Option<String>,
    message: Option<String>,
}

/// Classify a failure that happened before a usable response arrived.
pub fn transport_error(e: &reqwest::Error) -> RemoteError {
    if e.is_timeout() {
        RemoteError::new(ErrorCategory::Timeout, "request took too long")
    } else if e.is_connect() {
        RemoteError::new(ErrorCategory::Network, format!("connection failed: {e}"))
    } else if e.is_decode() || e.is_body() {
        RemoteError::new(
            ErrorCategory::InvalidResponse,
            format!("unreadable response: {e}"),
        )
    } else {
        RemoteError::new(ErrorCategory::Network, e.to_string())
    }
}

/// Classify a non-success status, using the server's message when the body
/// carries one.
pub fn status_error(status: u16, body: &str) -> RemoteError {
    let parsed: ApiErrorBody = serde_json::from_str(body).unwrap_or_default();
    let message = parsed
        .message
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| {
            StatusCode::from_u16(status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .map(str::to_string)
                .unwrap_or_else(|| format!("HTTP {status}"))
        });
    RemoteError::api(status, parsed.code, message)
}

/// A success response whose body does not match the expected shape.
pub fn decode_error(e: &serde_json::Error) -> RemoteError {
    RemoteError::new(
        ErrorCategory::InvalidResponse,
        format!("unexpected response body: {e}"),
    )
}

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;
