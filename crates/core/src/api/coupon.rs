// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::{Deserialize, Serialize};

use crate::coupon::{Coupon, CouponEmail, CouponReport, DiscountType};

/// Coupon as returned by `wc/v3/coupons`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CouponDto {
    pub id: i64,
    pub code: Option<String>,
    pub amount: Option<String>,
    pub date_created_gmt: Option<String>,
    pub date_modified_gmt: Option<String>,
    pub discount_type: Option<String>,
    pub description: Option<String>,
    pub date_expires_gmt: Option<String>,
    pub usage_count: Option<i64>,
    pub individual_use: Option<bool>,
    pub product_ids: Option<Vec<i64>>,
    pub excluded_product_ids: Option<Vec<i64>>,
    pub usage_limit: Option<i64>,
    pub usage_limit_per_user: Option<i64>,
    pub limit_usage_to_x_items: Option<i64>,
    pub free_shipping: Option<bool>,
    pub product_categories: Option<Vec<i64>>,
    pub excluded_product_categories: Option<Vec<i64>>,
    pub exclude_sale_items: Option<bool>,
    pub minimum_amount: Option<String>,
    pub maximum_amount: Option<String>,
    #[serde(rename = "email_restrictions")]
    pub restricted_emails: Option<Vec<String>>,
}

impl CouponDto {
    /// Maps the response into the local coupon row for `site_id`.
    pub fn to_data_model(&self, site_id: i64) -> Coupon {
        Coupon {
            id: self.id,
            site_id,
            code: self.code.clone().unwrap_or_default(),
            amount: self.amount.clone().unwrap_or_default(),
            date_created_gmt: self.date_created_gmt.clone().unwrap_or_default(),
            date_modified_gmt: self.date_modified_gmt.clone().unwrap_or_default(),
            discount_type: self
                .discount_type
                .as_deref()
                .map(DiscountType::from)
                .unwrap_or(DiscountType::FixedCart),
            description: self.description.clone().unwrap_or_default(),
            date_expires_gmt: self.date_expires_gmt.clone().unwrap_or_default(),
            usage_count: self.usage_count.unwrap_or(0),
            is_for_individual_use: self.individual_use.unwrap_or(false),
            usage_limit: self.usage_limit.unwrap_or(0),
            usage_limit_per_user: self.usage_limit_per_user.unwrap_or(0),
            limit_usage_to_x_items: self.limit_usage_to_x_items.unwrap_or(0),
            is_shipping_free: self.free_shipping.unwrap_or(false),
            are_sale_items_excluded: self.exclude_sale_items.unwrap_or(false),
            minimum_amount: self.minimum_amount.clone().unwrap_or_default(),
            maximum_amount: self.maximum_amount.clone().unwrap_or_default(),
            product_ids: self.product_ids.clone().unwrap_or_default(),
            excluded_product_ids: self.excluded_product_ids.clone().unwrap_or_default(),
            category_ids: self.product_categories.clone().unwrap_or_default(),
            excluded_category_ids: self.excluded_product_categories.clone().unwrap_or_default(),
        }
    }

    /// Child rows for the coupon's email restrictions.
    pub fn email_rows(&self, site_id: i64) -> Vec<CouponEmail> {
        self.restricted_emails
            .iter()
            .flatten()
            .map(|email| CouponEmail {
                coupon_id: self.id,
                site_id,
                email: email.clone(),
            })
            .collect()
    }
}

/// Body for creating or updating a coupon. Unset fields are left out of
/// the JSON so the server keeps its current values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateCouponRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "date_expires", skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_ids: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excluded_product_ids: Option<Vec<i64>>,
    #[serde(rename = "product_categories", skip_serializing_if = "Option::is_none")]
    pub category_ids: Option<Vec<i64>>,
    #[serde(
        rename = "excluded_product_categories",
        skip_serializing_if = "Option::is_none"
    )]
    pub excluded_category_ids: Option<Vec<i64>>,
    #[serde(rename = "free_shipping", skip_serializing_if = "Option::is_none")]
    pub is_shipping_free: Option<bool>,
    #[serde(rename = "individual_use", skip_serializing_if = "Option::is_none")]
    pub is_for_individual_use: Option<bool>,
    #[serde(rename = "exclude_sale_items", skip_serializing_if = "Option::is_none")]
    pub are_sale_items_excluded: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_limit_per_user: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_usage_to_x_items: Option<i64>,
    #[serde(rename = "email_restrictions", skip_serializing_if = "Option::is_none")]
    pub restricted_emails: Option<Vec<String>>,
}

/// One row of `wc-analytics/reports/coupons`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CouponReportDto {
    pub coupon_id: Option<i64>,
    pub amount: Option<f64>,
    pub orders_count: Option<i64>,
}

impl CouponReportDto {
    pub fn to_data_model(&self) -> CouponReport {
        CouponReport {
            coupon_id: self.coupon_id.unwrap_or(0),
            amount: self.amount.unwrap_or(0.0),
            orders_count: self.orders_count.unwrap_or(0),
        }
    }
}
