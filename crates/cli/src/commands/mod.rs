// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod coupons;
pub mod db;
pub mod notes;
pub mod payments;
pub mod stats;

use wc_core::{shared, CouponStore, Database, SharedDatabase};
use wc_rest::WooClient;

use crate::cli::{OutputFormat, PageArgs};
use crate::config::Config;
use crate::error::Result;

/// Everything a command needs, wired once per process.
pub struct Context {
    pub config: Config,
    pub output: OutputFormat,
}

impl Context {
    pub fn new(config: Config, output: OutputFormat) -> Self {
        Context { config, output }
    }

    pub fn json(&self) -> bool {
        self.output == OutputFormat::Json
    }

    /// Open the local database, migrating it to the latest schema.
    pub fn open_db(&self) -> Result<Database> {
        let path = self.config.database_path()?;
        tracing::debug!(path = %path.display(), "opening database");
        Ok(Database::open(&path)?)
    }

    pub fn shared_db(&self) -> Result<SharedDatabase> {
        Ok(shared(self.open_db()?))
    }

    pub fn client(&self) -> Result<WooClient> {
        Ok(WooClient::new(self.config.client_config())?)
    }

    pub fn coupon_store(&self) -> Result<CouponStore<WooClient>> {
        Ok(CouponStore::new(self.client()?, self.shared_db()?))
    }

    pub fn page_size(&self, paging: &PageArgs) -> u32 {
        paging.page_size.unwrap_or(self.config.page_size)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
