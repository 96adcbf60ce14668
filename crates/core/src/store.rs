// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Coupon synchronizer.
//!
//! [`CouponStore`] keeps the local coupon table in step with a remote coupon
//! collection. Every operation calls the remote first and writes locally
//! only after it succeeds; the writes of one operation commit in a single
//! transaction. Reads and observers go straight to the local store.

use chrono::{DateTime, Utc};
use tokio::sync::watch;

use crate::api::{CouponDto, UpdateCouponRequest};
use crate::coupon::{CouponReport, CouponWithEmails};
use crate::db::{Database, Table};
use crate::error::Result;
use crate::observe::{observe, SharedDatabase};
use crate::remote::{CouponRemote, RemoteError};
use crate::site::Site;

/// First page of a paged fetch.
pub const DEFAULT_PAGE: u32 = 1;

/// Page size large enough to fetch most stores in one request.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Lower bound of the coupon report window: one second after the epoch.
pub fn report_since() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH + chrono::Duration::seconds(1)
}

/// Coupons matched by a search, read back from the local store.
#[derive(Debug, Clone, PartialEq)]
pub struct CouponSearchResult {
    pub coupons: Vec<CouponWithEmails>,
    /// The returned page was full, so another page probably exists.
    pub can_load_more: bool,
}

/// Synchronizes one site's coupons between a remote and the local store.
pub struct CouponStore<R> {
    remote: R,
    db: SharedDatabase,
}

impl<R: CouponRemote> CouponStore<R> {
    pub fn new(remote: R, db: SharedDatabase) -> Self {
        CouponStore { remote, db }
    }

    /// The local store handle.
    pub fn database(&self) -> &SharedDatabase {
        &self.db
    }

    /// Fetch one page of coupons and store it.
    ///
    /// Requesting the first page replaces every stored coupon of the site.
    /// Returns whether another page is likely available, which is inferred
    /// from the page being full.
    pub async fn fetch_coupons(&self, site: Site, page: u32, page_size: u32) -> Result<bool> {
        tracing::debug!(site_id = site.site_id, page, page_size, "fetching coupons");
        let dtos = self
            .remote
            .fetch_coupons(site, page, page_size, None)
            .await
            .inspect_err(|e| tracing::warn!(site_id = site.site_id, error = %e, "fetch coupons failed"))?;

        let db = self.db.lock().await;
        db.execute_in_transaction(|db| {
            if page == 1 {
                let purged = db.delete_all_coupons(site.site_id)?;
                tracing::debug!(site_id = site.site_id, purged, "cleared coupons for first page");
            }
            dtos.iter().try_for_each(|dto| store_coupon(db, site, dto))
        })?;

        Ok(more_available(dtos.len(), page_size))
    }

    /// Search coupons and store the matches without clearing anything.
    pub async fn search_coupons(
        &self,
        site: Site,
        query: &str,
        page: u32,
        page_size: u32,
    ) -> Result<CouponSearchResult> {
        tracing::debug!(site_id = site.site_id, query, page, page_size, "searching coupons");
        let dtos = self
            .remote
            .fetch_coupons(site, page, page_size, Some(query.to_string()))
            .await
            .inspect_err(|e| tracing::warn!(site_id = site.site_id, error = %e, "search coupons failed"))?;

        let db = self.db.lock().await;
        db.execute_in_transaction(|db| {
            dtos.iter().try_for_each(|dto| store_coupon(db, site, dto))
        })?;

        let ids: Vec<i64> = dtos.iter().map(|dto| dto.id).collect();
        Ok(CouponSearchResult {
            coupons: db.get_coupons(site.site_id, &ids)?,
            can_load_more: more_available(dtos.len(), page_size),
        })
    }

    /// Fetch a single coupon and store it.
    pub async fn fetch_coupon(&self, site: Site, coupon_id: i64) -> Result<()> {
        tracing::debug!(site_id = site.site_id, coupon_id, "fetching coupon");
        let dto = self
            .remote
            .fetch_coupon(site, coupon_id)
            .await
            .inspect_err(|e| tracing::warn!(site_id = site.site_id, coupon_id, error = %e, "fetch coupon failed"))?;

        self.store(site, &dto).await
    }

    /// Create a coupon remotely and store the server's copy.
    ///
    /// Returns the id assigned by the server.
    pub async fn create_coupon(&self, site: Site, request: UpdateCouponRequest) -> Result<i64> {
        tracing::debug!(site_id = site.site_id, "creating coupon");
        let dto = self
            .remote
            .create_coupon(site, request)
            .await
            .inspect_err(|e| tracing::warn!(site_id = site.site_id, error = %e, "create coupon failed"))?;

        self.store(site, &dto).await?;
        Ok(dto.id)
    }

    /// Update a coupon remotely and store the server's copy.
    ///
    /// A missing or empty code is rejected before any remote call.
    pub async fn update_coupon(
        &self,
        site: Site,
        coupon_id: i64,
        request: UpdateCouponRequest,
    ) -> Result<()> {
        if request.code.as_deref().unwrap_or_default().is_empty() {
            return Err(RemoteError::invalid_param("Coupon code cannot be empty").into());
        }

        tracing::debug!(site_id = site.site_id, coupon_id, "updating coupon");
        let dto = self
            .remote
            .update_coupon(site, coupon_id, request)
            .await
            .inspect_err(|e| tracing::warn!(site_id = site.site_id, coupon_id, error = %e, "update coupon failed"))?;

        self.store(site, &dto).await
    }

    /// Delete a coupon remotely, then locally.
    ///
    /// The local row stays when the remote call fails.
    pub async fn delete_coupon(&self, site: Site, coupon_id: i64, trash: bool) -> Result<()> {
        tracing::debug!(site_id = site.site_id, coupon_id, trash, "deleting coupon");
        self.remote
            .delete_coupon(site, coupon_id, trash)
            .await
            .inspect_err(|e| tracing::warn!(site_id = site.site_id, coupon_id, error = %e, "delete coupon failed"))?;

        self.db.lock().await.delete_coupon(site.site_id, coupon_id)?;
        Ok(())
    }

    /// Usage totals for a coupon since [`report_since`]. Not stored.
    pub async fn fetch_coupon_report(&self, site: Site, coupon_id: i64) -> Result<CouponReport> {
        tracing::debug!(site_id = site.site_id, coupon_id, "fetching coupon report");
        let dto = self
            .remote
            .fetch_coupon_report(site, coupon_id, report_since())
            .await
            .inspect_err(|e| tracing::warn!(site_id = site.site_id, coupon_id, error = %e, "fetch coupon report failed"))?;

        Ok(dto.to_data_model())
    }

    /// Read a stored coupon.
    pub async fn get_coupon(&self, site: Site, coupon_id: i64) -> Result<Option<CouponWithEmails>> {
        self.db.lock().await.get_coupon(site.site_id, coupon_id)
    }

    /// Read every stored coupon of a site, newest first.
    pub async fn get_coupons(&self, site: Site) -> Result<Vec<CouponWithEmails>> {
        self.db.lock().await.get_coupons_for_site(site.site_id)
    }

    /// Watch one stored coupon. `None` while it is absent.
    pub async fn observe_coupon(
        &self,
        site: Site,
        coupon_id: i64,
    ) -> Result<watch::Receiver<Option<CouponWithEmails>>> {
        let site_id = site.site_id;
        observe(self.db.clone(), Table::Coupons, site_id, move |db| {
            db.get_coupon(site_id, coupon_id)
        })
        .await
    }

    /// Watch every stored coupon of a site.
    pub async fn observe_coupons(
        &self,
        site: Site,
    ) -> Result<watch::Receiver<Vec<CouponWithEmails>>> {
        let site_id = site.site_id;
        observe(self.db.clone(), Table::Coupons, site_id, move |db| {
            db.get_coupons_for_site(site_id)
        })
        .await
    }

    async fn store(&self, site: Site, dto: &CouponDto) -> Result<()> {
        let db = self.db.lock().await;
        db.execute_in_transaction(|db| store_coupon(db, site, dto))
    }
}

/// Upsert a coupon, then each of its email rows. Existing emails are kept.
fn store_coupon(db: &Database, site: Site, dto: &CouponDto) -> Result<()> {
    db.execute_in_transaction(|db| {
        db.upsert_coupon(&dto.to_data_model(site.site_id))?;
        dto.email_rows(site.site_id)
            .iter()
            .try_for_each(|email| db.upsert_coupon_email(email))
    })
}

fn more_available(returned: usize, page_size: u32) -> bool {
    u32::try_from(returned).is_ok_and(|n| n == page_size)
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
