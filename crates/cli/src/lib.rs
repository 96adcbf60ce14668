// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! wcsync - keep a local SQLite copy of WooCommerce coupons in sync.
//!
//! The binary is a thin shell over [`wc_core::CouponStore`] backed by the
//! HTTP client from `wc_rest`:
//!
//! - `coupons fetch|search|get|create|update|delete|report` talk to the site
//!   and mirror the results locally
//! - `coupons list` reads only the local database
//! - `coupons watch` prints the stored list every time it changes
//!
//! Configuration lives in [`Config`]; logs go to stderr through `tracing`.

mod cli;
mod commands;
mod display;
mod logging;

pub mod config;
pub mod error;

pub use cli::{Cli, Command, OutputFormat};
pub use config::Config;
pub use error::{Error, Result};

use commands::Context;

pub async fn run(cli: Cli) -> Result<()> {
    logging::init(cli.verbose);
    let config = Config::load(cli.config.as_deref())?;
    let ctx = Context::new(config, cli.output);

    match cli.command {
        Command::Db(command) => commands::db::run(&ctx, command),
        Command::Coupons(command) => commands::coupons::run(&ctx, command).await,
        Command::Notes(command) => commands::notes::run(&ctx, command).await,
        Command::Stats(command) => commands::stats::run(&ctx, command).await,
        Command::Payments(command) => commands::payments::run(&ctx, command).await,
    }
}
