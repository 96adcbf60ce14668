// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::Context;
use crate::cli::StatsCommand;
use crate::display::{format_insights, print_json};
use crate::error::Result;

pub async fn run(ctx: &Context, command: StatsCommand) -> Result<()> {
    match command {
        StatsCommand::Insights { site } => {
            let insights = ctx
                .client()?
                .fetch_most_popular(site.site())
                .await?
                .to_data_model();
            if ctx.json() {
                print_json(&insights)
            } else {
                println!("{}", format_insights(&insights));
                Ok(())
            }
        }
    }
}
