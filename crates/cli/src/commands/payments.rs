// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use wc_core::api::ConnectionToken;

use super::Context;
use crate::cli::PaymentsCommand;
use crate::display::print_json;
use crate::error::Result;

pub async fn run(ctx: &Context, command: PaymentsCommand) -> Result<()> {
    match command {
        PaymentsCommand::Token { site } => {
            let token =
                ConnectionToken::from(ctx.client()?.fetch_connection_token(site.site()).await?);
            if ctx.json() {
                print_json(&token)
            } else {
                let mode = if token.is_test_mode { " (test mode)" } else { "" };
                println!("{}{mode}", token.token);
                Ok(())
            }
        }
    }
}
