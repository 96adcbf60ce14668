// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::{Deserialize, Serialize};

use crate::order_note::OrderNote;

/// Authors the server uses for notes it adds on its own.
const SYSTEM_AUTHORS: [&str; 2] = ["system", "WooCommerce"];

/// Note as returned by `wc/v3/orders/{id}/notes`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderNoteDto {
    pub id: Option<i64>,
    pub date_created_gmt: Option<String>,
    pub note: Option<String>,
    pub author: Option<String>,
    /// If true the note is shown to the customer, who is notified.
    pub customer_note: bool,
}

impl OrderNoteDto {
    pub fn to_data_model(&self, local_site_id: i64, order_id: i64) -> OrderNote {
        let author = self.author.clone().unwrap_or_default();
        OrderNote {
            local_site_id,
            note_id: self.id.unwrap_or(0),
            order_id,
            // The server omits the zone designator on GMT timestamps
            date_created: self
                .date_created_gmt
                .as_ref()
                .map(|d| format!("{d}Z"))
                .unwrap_or_default(),
            note: self.note.clone().unwrap_or_default(),
            is_system_note: SYSTEM_AUTHORS.contains(&author.as_str()),
            author,
            is_customer_note: self.customer_note,
        }
    }
}
