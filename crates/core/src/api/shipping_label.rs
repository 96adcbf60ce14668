// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response of the shipping label purchase endpoint. Unlike the rest of the
/// API this body uses camelCase keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShippingLabelDto {
    pub order_id: Option<i64>,
    pub paper_size: Option<String>,
    pub form_data: Option<Value>,
    pub store_options: Option<Value>,
    pub labels_data: Option<Vec<ShippingLabelItem>>,
    pub success: Option<bool>,
}

/// One purchased label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShippingLabelItem {
    pub label_id: Option<i64>,
    pub tracking: Option<String>,
    pub refundable_amount: Option<f64>,
    pub status: Option<String>,
    pub created: Option<i64>,
    pub carrier_id: Option<String>,
    pub service_name: Option<String>,
    pub package_name: Option<String>,
    pub product_names: Option<Vec<String>>,
    pub rate: Option<f64>,
    pub currency: Option<String>,
}

/// Outcome of a label purchase for an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingLabelPurchase {
    pub order_id: i64,
    pub paper_size: String,
    /// Raw form data echoed by the server; `null` when absent.
    pub form_data: Value,
    /// Raw store options (currency, units, origin country); `null` when absent.
    pub store_options: Value,
    pub label_ids: Vec<i64>,
    pub success: bool,
}

impl ShippingLabelDto {
    pub fn to_data_model(&self) -> ShippingLabelPurchase {
        ShippingLabelPurchase {
            order_id: self.order_id.unwrap_or(0),
            paper_size: self.paper_size.clone().unwrap_or_default(),
            form_data: self.form_data.clone().unwrap_or(Value::Null),
            store_options: self.store_options.clone().unwrap_or(Value::Null),
            label_ids: self
                .labels_data
                .iter()
                .flatten()
                .filter_map(|item| item.label_id)
                .collect(),
            success: self.success.unwrap_or(false),
        }
    }
}
