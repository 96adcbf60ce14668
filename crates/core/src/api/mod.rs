// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! REST response and request bodies.
//!
//! Each DTO mirrors the JSON the server sends, with every field optional,
//! and maps into a local entity with absent or null fields defaulted to an
//! empty string, zero or false.

mod coupon;
mod order_note;
mod payments;
mod shipping_label;
mod stats;

pub use coupon::{CouponDto, CouponReportDto, UpdateCouponRequest};
pub use order_note::OrderNoteDto;
pub use payments::{ConnectionToken, ConnectionTokenDto};
pub use shipping_label::{ShippingLabelDto, ShippingLabelItem, ShippingLabelPurchase};
pub use stats::MostPopularDto;


#[cfg(test)]
#[path = "mapping_tests.rs"]
mod mapping_tests;
