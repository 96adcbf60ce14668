// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Coupon entities as persisted locally.
//!
//! A [`Coupon`] row is keyed by `(site_id, id)`. Email restrictions are
//! stored as separate [`CouponEmail`] child rows and joined back together
//! in [`CouponWithEmails`] for reads.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// How a coupon's amount is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DiscountType {
    /// Percentage off the cart.
    Percent,
    /// Fixed amount off the whole cart.
    FixedCart,
    /// Fixed amount off each matching product.
    FixedProduct,
    /// Any type added by an extension; stored verbatim.
    Other(String),
}

impl DiscountType {
    /// Returns the string representation used in storage and on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            DiscountType::Percent => "percent",
            DiscountType::FixedCart => "fixed_cart",
            DiscountType::FixedProduct => "fixed_product",
            DiscountType::Other(s) => s,
        }
    }
}

impl fmt::Display for DiscountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for DiscountType {
    fn from(s: &str) -> Self {
        match s {
            "percent" => DiscountType::Percent,
            "fixed_cart" => DiscountType::FixedCart,
            "fixed_product" => DiscountType::FixedProduct,
            other => DiscountType::Other(other.to_string()),
        }
    }
}

impl From<String> for DiscountType {
    fn from(s: String) -> Self {
        DiscountType::from(s.as_str())
    }
}

impl From<DiscountType> for String {
    fn from(t: DiscountType) -> Self {
        t.as_str().to_string()
    }
}

impl FromStr for DiscountType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(DiscountType::from(s))
    }
}

/// A coupon as stored locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    /// Remote-assigned identifier.
    pub id: i64,
    /// Remote site the coupon belongs to.
    pub site_id: i64,
    pub code: String,
    /// Decimal amount as sent by the server (e.g. `"10.00"`).
    pub amount: String,
    pub date_created_gmt: String,
    pub date_modified_gmt: String,
    pub discount_type: DiscountType,
    pub description: String,
    /// Empty when the coupon never expires.
    pub date_expires_gmt: String,
    pub usage_count: i64,
    pub is_for_individual_use: bool,
    /// Zero means unlimited.
    pub usage_limit: i64,
    /// Zero means unlimited.
    pub usage_limit_per_user: i64,
    /// Zero means unlimited.
    pub limit_usage_to_x_items: i64,
    pub is_shipping_free: bool,
    pub are_sale_items_excluded: bool,
    pub minimum_amount: String,
    pub maximum_amount: String,
    pub product_ids: Vec<i64>,
    pub excluded_product_ids: Vec<i64>,
    pub category_ids: Vec<i64>,
    pub excluded_category_ids: Vec<i64>,
}

impl Coupon {
    /// Creates a coupon with every optional attribute at its default.
    pub fn new(site_id: i64, id: i64, code: impl Into<String>) -> Self {
        Coupon {
            id,
            site_id,
            code: code.into(),
            amount: String::new(),
            date_created_gmt: String::new(),
            date_modified_gmt: String::new(),
            discount_type: DiscountType::FixedCart,
            description: String::new(),
            date_expires_gmt: String::new(),
            usage_count: 0,
            is_for_individual_use: false,
            usage_limit: 0,
            usage_limit_per_user: 0,
            limit_usage_to_x_items: 0,
            is_shipping_free: false,
            are_sale_items_excluded: false,
            minimum_amount: String::new(),
            maximum_amount: String::new(),
            product_ids: Vec::new(),
            excluded_product_ids: Vec::new(),
            category_ids: Vec::new(),
            excluded_category_ids: Vec::new(),
        }
    }
}

/// An email pattern a coupon is restricted to.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CouponEmail {
    pub coupon_id: i64,
    pub site_id: i64,
    /// Email address or wildcard pattern (e.g. `*@example.com`).
    pub email: String,
}

/// A coupon together with its restricted email rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CouponWithEmails {
    pub coupon: Coupon,
    pub restricted_emails: Vec<CouponEmail>,
}

impl CouponWithEmails {
    /// Email patterns as plain strings.
    pub fn emails(&self) -> Vec<&str> {
        self.restricted_emails
            .iter()
            .map(|e| e.email.as_str())
            .collect()
    }
}

/// Usage totals for a coupon. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CouponReport {
    pub coupon_id: i64,
    /// Total discount granted.
    pub amount: f64,
    pub orders_count: i64,
}

#[cfg(test)]
#[path = "coupon_tests.rs"]
mod tests;
