// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Site identity.

use serde::{Deserialize, Serialize};

/// A remote store that resources are scoped to.
///
/// Coupons are keyed by the remote `site_id`; stats and order notes are
/// keyed by the local row id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Site {
    /// Remote numeric site identifier.
    pub site_id: i64,
    /// Local row identifier.
    pub local_id: i64,
}

impl Site {
    pub fn new(site_id: i64, local_id: i64) -> Self {
        Site { site_id, local_id }
    }
}
