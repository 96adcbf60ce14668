// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Remote client contract consumed by the stores.
//!
//! The [`CouponRemote`] trait abstracts over the REST transport so the
//! coupon store can run against the HTTP client in production and against
//! a scripted fake in tests. Implementations perform network I/O only and
//! never touch the local database.

use std::fmt;
use std::future::Future;
use std::pin::Pin;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::{CouponDto, CouponReportDto, UpdateCouponRequest};
use crate::site::Site;

/// Failure class of a remote error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Connection could not be established or was dropped.
    Network,
    /// The request did not complete in time.
    Timeout,
    /// The response body could not be decoded.
    InvalidResponse,
    /// The server answered with a non-success status.
    Api,
    /// The server rejected the credentials (401/403).
    Unauthorized,
    /// A client-side precondition failed; the request was never sent.
    InvalidParam,
    /// Anything else.
    Generic,
}

impl ErrorCategory {
    /// Returns the string representation used in logs and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network error",
            ErrorCategory::Timeout => "timeout",
            ErrorCategory::InvalidResponse => "invalid response",
            ErrorCategory::Api => "api error",
            ErrorCategory::Unauthorized => "unauthorized",
            ErrorCategory::InvalidParam => "invalid parameter",
            ErrorCategory::Generic => "error",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Normalized error for every remote failure, transport or API level.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{category}: {message}")]
pub struct RemoteError {
    /// Failure class.
    pub category: ErrorCategory,
    /// Human-readable message, server-supplied when available.
    pub message: String,
    /// HTTP status, when the server answered at all.
    pub status: Option<u16>,
    /// Server error code (e.g. `woocommerce_rest_coupon_code_already_exists`).
    pub code: Option<String>,
}

impl RemoteError {
    pub fn new(category: ErrorCategory, message: impl Into<String>) -> Self {
        RemoteError {
            category,
            message: message.into(),
            status: None,
            code: None,
        }
    }

    /// Error for a client-side precondition that failed before any request.
    pub fn invalid_param(message: impl Into<String>) -> Self {
        Self::new(ErrorCategory::InvalidParam, message)
    }

    /// Error for a non-success HTTP answer.
    pub fn api(status: u16, code: Option<String>, message: impl Into<String>) -> Self {
        let category = match status {
            401 | 403 => ErrorCategory::Unauthorized,
            _ => ErrorCategory::Api,
        };
        RemoteError {
            category,
            message: message.into(),
            status: Some(status),
            code,
        }
    }
}

/// Result type for remote operations.
pub type RemoteResult<T> = std::result::Result<T, RemoteError>;

/// Boxed future returned by remote operations.
pub type RemoteFuture<'a, T> = Pin<Box<dyn Future<Output = RemoteResult<T>> + Send + 'a>>;

/// REST operations on the coupon collection of a site.
pub trait CouponRemote: Send + Sync {
    /// Fetch one page of coupons, optionally filtered by a search string.
    fn fetch_coupons(
        &self,
        site: Site,
        page: u32,
        page_size: u32,
        search: Option<String>,
    ) -> RemoteFuture<'_, Vec<CouponDto>>;

    /// Fetch a single coupon.
    fn fetch_coupon(&self, site: Site, coupon_id: i64) -> RemoteFuture<'_, CouponDto>;

    /// Create a coupon; the server assigns the id.
    fn create_coupon(&self, site: Site, request: UpdateCouponRequest)
        -> RemoteFuture<'_, CouponDto>;

    /// Update an existing coupon.
    fn update_coupon(
        &self,
        site: Site,
        coupon_id: i64,
        request: UpdateCouponRequest,
    ) -> RemoteFuture<'_, CouponDto>;

    /// Delete a coupon. With `trash` the coupon is moved to the trash,
    /// otherwise it is removed permanently.
    fn delete_coupon(&self, site: Site, coupon_id: i64, trash: bool) -> RemoteFuture<'_, ()>;

    /// Fetch usage totals for a coupon from `since` onwards.
    fn fetch_coupon_report(
        &self,
        site: Site,
        coupon_id: i64,
        since: DateTime<Utc>,
    ) -> RemoteFuture<'_, CouponReportDto>;
}

#[cfg(test)]
#[path = "remote_tests.rs"]
mod tests;
