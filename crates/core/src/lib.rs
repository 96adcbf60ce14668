// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! wc-core: local store and synchronizer for WooCommerce resources
//!
//! This crate provides the entities, the SQLite store with its versioned
//! schema, reactive queries, the remote-client contract and the coupon
//! synchronizer used by the REST client and the wcsync CLI.

pub mod api;
pub mod coupon;
pub mod db;
pub mod error;
pub mod observe;
pub mod order_note;
pub mod remote;
pub mod site;
pub mod stats;
pub mod store;

pub use coupon::{Coupon, CouponEmail, CouponReport, CouponWithEmails, DiscountType};
pub use db::{Change, Database, Table};
pub use error::{Error, Result};
pub use observe::{observe, shared, SharedDatabase};
pub use order_note::OrderNote;
pub use remote::{CouponRemote, ErrorCategory, RemoteError, RemoteFuture, RemoteResult};
pub use site::Site;
pub use stats::{MostPopularInsights, RevenueStats, StatsInterval};
pub use store::{CouponSearchResult, CouponStore, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
