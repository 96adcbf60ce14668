// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::{Deserialize, Serialize};

/// A note attached to an order, as stored locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderNote {
    pub local_site_id: i64,
    /// Remote note id.
    pub note_id: i64,
    /// Remote order id.
    pub order_id: i64,
    /// RFC3339 timestamp in UTC, or empty when unknown.
    pub date_created: String,
    pub note: String,
    pub author: String,
    /// Added by the store itself rather than a person.
    pub is_system_note: bool,
    /// Visible to the customer (who is notified when it is added).
    pub is_customer_note: bool,
}
