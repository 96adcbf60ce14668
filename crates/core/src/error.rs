// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for wc-core operations.

use thiserror::Error;

use crate::remote::RemoteError;

/// All possible errors that can occur in wc-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Remote(#[from] RemoteError),

    #[error("coupon not found: site {site_id}, coupon {coupon_id}")]
    CouponNotFound { site_id: i64, coupon_id: i64 },

    #[error("invalid stats interval: '{0}'\n  hint: valid intervals are: hour, day, week, month, year")]
    InvalidInterval(String),

    #[error("unsupported schema version {found}\n  hint: this build can open databases at versions {min} through {max}")]
    UnsupportedSchemaVersion { found: i64, min: i64, max: i64 },

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

impl Error {
    /// Returns the remote error if this error came from the network layer
    /// or from a client-side precondition check.
    pub fn as_remote(&self) -> Option<&RemoteError> {
        match self {
            Error::Remote(e) => Some(e),
            _ => None,
        }
    }
}

/// A specialized Result type for wc-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
