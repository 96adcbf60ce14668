// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;
use wc_core::RemoteError;

/// Errors surfaced by the wcsync command line.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] wc_core::Error),

    #[error("{0}")]
    Remote(#[from] RemoteError),

    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("invalid config file {path}: {message}")]
    InvalidConfig { path: String, message: String },

    #[error("no data directory available\n  hint: set `database` in the config file")]
    NoDataDir,

    #[error("coupon {coupon_id} is not stored for site {site_id}\n  hint: run 'wcsync coupons get --refresh' to fetch it")]
    CouponNotStored { site_id: i64, coupon_id: i64 },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for wcsync operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
