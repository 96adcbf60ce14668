// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::{Deserialize, Serialize};

/// Body of `payments/connection_tokens`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionTokenDto {
    pub secret: String,
    pub test_mode: bool,
}

/// Short-lived token a card reader uses to connect to the payment gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionToken {
    pub token: String,
    pub is_test_mode: bool,
}

impl From<ConnectionTokenDto> for ConnectionToken {
    fn from(dto: ConnectionTokenDto) -> Self {
        ConnectionToken {
            token: dto.secret,
            is_test_mode: dto.test_mode,
        }
    }
}
