// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! wc-rest: reqwest-based remote client
//!
//! Implements the `wc_core::CouponRemote` contract over HTTP and exposes the
//! order notes, payments and stats insights endpoints.

mod client;
pub mod endpoints;
mod errors;

pub use client::{ClientConfig, WooClient, DEFAULT_TIMEOUT};
pub use endpoints::{Endpoint, Endpoints, DEFAULT_API_ROOT, DEFAULT_REST_ROOT};
pub use errors::{status_error, transport_error};
