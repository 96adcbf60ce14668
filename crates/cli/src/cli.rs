// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use wc_core::api::UpdateCouponRequest;
use wc_core::Site;

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

const QUICKSTART_HELP: &str = "\
Get started:
  wcsync coupons fetch --site 123     Download every coupon of site 123
  wcsync coupons list --site 123      Show the stored coupons
  wcsync coupons watch --site 123     Print the coupon list whenever it changes";

#[derive(Parser)]
#[command(name = "wcsync")]
#[command(about = "Keep a local SQLite copy of WooCommerce coupons in sync")]
#[command(after_help = QUICKSTART_HELP)]
pub struct Cli {
    /// Config file (default: ~/.config/wcsync/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'o', global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Log debug output to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Local database maintenance
    #[command(subcommand)]
    Db(DbCommand),

    /// Synchronize and inspect coupons
    #[command(subcommand)]
    Coupons(CouponsCommand),

    /// Fetch and store order notes
    #[command(subcommand)]
    Notes(NotesCommand),

    /// Store statistics
    #[command(subcommand)]
    Stats(StatsCommand),

    /// In-person payments
    #[command(subcommand)]
    Payments(PaymentsCommand),
}

#[derive(Subcommand)]
pub enum DbCommand {
    /// Print the schema version, migrating first if needed
    Version,
}

/// Identifies the site a command works on.
#[derive(Args, Clone, Copy, Debug)]
pub struct SiteArgs {
    /// Remote site id
    #[arg(long = "site", short = 's', value_name = "SITE_ID")]
    pub site_id: i64,

    /// Local site row id (defaults to the remote id)
    #[arg(long, value_name = "ID")]
    pub local_id: Option<i64>,
}

impl SiteArgs {
    pub fn site(&self) -> Site {
        Site::new(self.site_id, self.local_id.unwrap_or(self.site_id))
    }
}

#[derive(Args, Clone, Copy, Debug)]
pub struct PageArgs {
    /// Page to fetch, starting at 1
    #[arg(long, default_value_t = wc_core::DEFAULT_PAGE)]
    pub page: u32,

    /// Coupons per page (default: `page_size` from the config)
    #[arg(long, value_name = "N")]
    pub page_size: Option<u32>,
}

/// Coupon fields settable on create and update.
#[derive(Args, Clone, Debug, Default)]
pub struct CouponFields {
    /// Coupon code customers enter
    #[arg(long)]
    pub code: Option<String>,

    /// Discount amount, e.g. 10.00
    #[arg(long)]
    pub amount: Option<String>,

    /// percent, fixed_cart or fixed_product
    #[arg(long, value_name = "TYPE")]
    pub discount_type: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Expiry date, e.g. 2030-01-31T00:00:00
    #[arg(long, value_name = "DATE")]
    pub expires: Option<String>,

    #[arg(long, value_name = "AMOUNT")]
    pub minimum_amount: Option<String>,

    #[arg(long, value_name = "AMOUNT")]
    pub maximum_amount: Option<String>,

    /// Restrict to a customer email (repeatable)
    #[arg(long = "email", value_name = "EMAIL")]
    pub emails: Vec<String>,

    /// Grant free shipping
    #[arg(long)]
    pub free_shipping: Option<bool>,

    #[arg(long, value_name = "N")]
    pub usage_limit: Option<i64>,
}

impl CouponFields {
    pub fn to_request(&self) -> UpdateCouponRequest {
        UpdateCouponRequest {
            code: self.code.clone(),
            amount: self.amount.clone(),
            discount_type: self.discount_type.clone(),
            description: self.description.clone(),
            expiry_date: self.expires.clone(),
            minimum_amount: self.minimum_amount.clone(),
            maximum_amount: self.maximum_amount.clone(),
            restricted_emails: (!self.emails.is_empty()).then(|| self.emails.clone()),
            is_shipping_free: self.free_shipping,
            usage_limit: self.usage_limit,
            ..Default::default()
        }
    }
}

#[derive(Subcommand)]
pub enum CouponsCommand {
    /// Fetch a page of coupons; page 1 replaces the stored set
    Fetch {
        #[command(flatten)]
        site: SiteArgs,
        #[command(flatten)]
        paging: PageArgs,
    },

    /// Search coupons remotely and store the matches
    #[command(arg_required_else_help = true)]
    Search {
        #[command(flatten)]
        site: SiteArgs,
        /// Text to search for
        query: String,
        #[command(flatten)]
        paging: PageArgs,
    },

    /// Show a stored coupon
    Get {
        #[command(flatten)]
        site: SiteArgs,
        coupon_id: i64,
        /// Fetch the coupon from the server first
        #[arg(long)]
        refresh: bool,
    },

    /// List stored coupons, newest first
    List {
        #[command(flatten)]
        site: SiteArgs,
    },

    /// Create a coupon
    Create {
        #[command(flatten)]
        site: SiteArgs,
        #[command(flatten)]
        fields: CouponFields,
    },

    /// Update a coupon (the code is required)
    Update {
        #[command(flatten)]
        site: SiteArgs,
        coupon_id: i64,
        #[command(flatten)]
        fields: CouponFields,
    },

    /// Delete a coupon (moved to the trash unless --permanent)
    Delete {
        #[command(flatten)]
        site: SiteArgs,
        coupon_id: i64,
        /// Delete permanently instead of trashing
        #[arg(long)]
        permanent: bool,
    },

    /// Show usage totals for a coupon
    Report {
        #[command(flatten)]
        site: SiteArgs,
        coupon_id: i64,
    },

    /// Print the stored coupon list whenever it changes (Ctrl-C to stop)
    Watch {
        #[command(flatten)]
        site: SiteArgs,
        /// Fetch the first page once after starting
        #[arg(long)]
        fetch: bool,
    },
}

#[derive(Subcommand)]
pub enum NotesCommand {
    /// Fetch the notes of an order and store them
    Fetch {
        #[command(flatten)]
        site: SiteArgs,
        order_id: i64,
    },

    /// List stored notes of an order
    List {
        #[command(flatten)]
        site: SiteArgs,
        order_id: i64,
    },
}

#[derive(Subcommand)]
pub enum StatsCommand {
    /// Show the busiest day of week and hour
    Insights {
        #[command(flatten)]
        site: SiteArgs,
    },
}

#[derive(Subcommand)]
pub enum PaymentsCommand {
    /// Request a card reader connection token
    Token {
        #[command(flatten)]
        site: SiteArgs,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
