// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde_json::json;

use super::Context;
use crate::cli::DbCommand;
use crate::display::print_json;
use crate::error::Result;

pub fn run(ctx: &Context, command: DbCommand) -> Result<()> {
    match command {
        DbCommand::Version => version(ctx),
    }
}

fn version(ctx: &Context) -> Result<()> {
    let path = ctx.config.database_path()?;
    let version = ctx.open_db()?.schema_version()?;
    if ctx.json() {
        print_json(&json!({
            "path": path,
            "schema_version": version,
        }))
    } else {
        println!("schema version: {version}");
        Ok(())
    }
}
