// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Coupon and coupon email operations.

use rusqlite::{params, params_from_iter, OptionalExtension, Row};

use super::{parse_id_list, Database, Table};
use crate::coupon::{Coupon, CouponEmail, CouponWithEmails, DiscountType};
use crate::error::Result;

const COUPON_COLUMNS: &str = "site_id, id, code, amount, date_created_gmt, date_modified_gmt,
    discount_type, description, date_expires_gmt, usage_count, individual_use, usage_limit,
    usage_limit_per_user, limit_usage_to_x_items, free_shipping, exclude_sale_items,
    minimum_amount, maximum_amount, product_ids, excluded_product_ids, category_ids,
    excluded_category_ids";

fn coupon_from_row(row: &Row<'_>) -> std::result::Result<Coupon, rusqlite::Error> {
    let discount_type: String = row.get(6)?;
    let product_ids: String = row.get(18)?;
    let excluded_product_ids: String = row.get(19)?;
    let category_ids: String = row.get(20)?;
    let excluded_category_ids: String = row.get(21)?;
    Ok(Coupon {
        site_id: row.get(0)?,
        id: row.get(1)?,
        code: row.get(2)?,
        amount: row.get(3)?,
        date_created_gmt: row.get(4)?,
        date_modified_gmt: row.get(5)?,
        discount_type: DiscountType::from(discount_type),
        description: row.get(7)?,
        date_expires_gmt: row.get(8)?,
        usage_count: row.get(9)?,
        is_for_individual_use: row.get(10)?,
        usage_limit: row.get(11)?,
        usage_limit_per_user: row.get(12)?,
        limit_usage_to_x_items: row.get(13)?,
        is_shipping_free: row.get(14)?,
        are_sale_items_excluded: row.get(15)?,
        minimum_amount: row.get(16)?,
        maximum_amount: row.get(17)?,
        product_ids: parse_id_list(&product_ids, "product_ids")?,
        excluded_product_ids: parse_id_list(&excluded_product_ids, "excluded_product_ids")?,
        category_ids: parse_id_list(&category_ids, "category_ids")?,
        excluded_category_ids: parse_id_list(&excluded_category_ids, "excluded_category_ids")?,
    })
}

fn id_list_json(ids: &[i64]) -> Result<String> {
    Ok(serde_json::to_string(ids)?)
}

impl Database {
    /// Insert a coupon or overwrite the row with the same `(site_id, id)`.
    ///
    /// Existing email rows are left alone.
    pub fn upsert_coupon(&self, coupon: &Coupon) -> Result<()> {
        self.conn.execute(
            "INSERT INTO coupons (site_id, id, code, amount, date_created_gmt, date_modified_gmt,
                discount_type, description, date_expires_gmt, usage_count, individual_use,
                usage_limit, usage_limit_per_user, limit_usage_to_x_items, free_shipping,
                exclude_sale_items, minimum_amount, maximum_amount, product_ids,
                excluded_product_ids, category_ids, excluded_category_ids)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16,
                ?17, ?18, ?19, ?20, ?21, ?22)
             ON CONFLICT(site_id, id) DO UPDATE SET
                code = excluded.code,
                amount = excluded.amount,
                date_created_gmt = excluded.date_created_gmt,
                date_modified_gmt = excluded.date_modified_gmt,
                discount_type = excluded.discount_type,
                description = excluded.description,
                date_expires_gmt = excluded.date_expires_gmt,
                usage_count = excluded.usage_count,
                individual_use = excluded.individual_use,
                usage_limit = excluded.usage_limit,
                usage_limit_per_user = excluded.usage_limit_per_user,
                limit_usage_to_x_items = excluded.limit_usage_to_x_items,
                free_shipping = excluded.free_shipping,
                exclude_sale_items = excluded.exclude_sale_items,
                minimum_amount = excluded.minimum_amount,
                maximum_amount = excluded.maximum_amount,
                product_ids = excluded.product_ids,
                excluded_product_ids = excluded.excluded_product_ids,
                category_ids = excluded.category_ids,
                excluded_category_ids = excluded.excluded_category_ids",
            params![
                coupon.site_id,
                coupon.id,
                coupon.code,
                coupon.amount,
                coupon.date_created_gmt,
                coupon.date_modified_gmt,
                coupon.discount_type.as_str(),
                coupon.description,
                coupon.date_expires_gmt,
                coupon.usage_count,
                coupon.is_for_individual_use,
                coupon.usage_limit,
                coupon.usage_limit_per_user,
                coupon.limit_usage_to_x_items,
                coupon.is_shipping_free,
                coupon.are_sale_items_excluded,
                coupon.minimum_amount,
                coupon.maximum_amount,
                id_list_json(&coupon.product_ids)?,
                id_list_json(&coupon.excluded_product_ids)?,
                id_list_json(&coupon.category_ids)?,
                id_list_json(&coupon.excluded_category_ids)?,
            ],
        )?;
        self.record_change(Table::Coupons, coupon.site_id);
        Ok(())
    }

    /// Add an email restriction; a duplicate is ignored.
    ///
    /// The parent coupon must already exist.
    pub fn upsert_coupon_email(&self, email: &CouponEmail) -> Result<()> {
        self.conn.execute(
            "INSERT INTO coupon_emails (coupon_id, site_id, email) VALUES (?1, ?2, ?3)
             ON CONFLICT(coupon_id, site_id, email) DO NOTHING",
            params![email.coupon_id, email.site_id, email.email],
        )?;
        self.record_change(Table::Coupons, email.site_id);
        Ok(())
    }

    /// Remove every coupon of a site along with their email rows.
    pub fn delete_all_coupons(&self, site_id: i64) -> Result<usize> {
        let removed = self
            .conn
            .execute("DELETE FROM coupons WHERE site_id = ?1", params![site_id])?;
        self.record_change(Table::Coupons, site_id);
        Ok(removed)
    }

    /// Remove one coupon along with its email rows.
    pub fn delete_coupon(&self, site_id: i64, coupon_id: i64) -> Result<bool> {
        let removed = self.conn.execute(
            "DELETE FROM coupons WHERE site_id = ?1 AND id = ?2",
            params![site_id, coupon_id],
        )?;
        self.record_change(Table::Coupons, site_id);
        Ok(removed > 0)
    }

    /// Get one coupon with its emails.
    pub fn get_coupon(&self, site_id: i64, coupon_id: i64) -> Result<Option<CouponWithEmails>> {
        let coupon = self
            .conn
            .query_row(
                &format!("SELECT {COUPON_COLUMNS} FROM coupons WHERE site_id = ?1 AND id = ?2"),
                params![site_id, coupon_id],
                coupon_from_row,
            )
            .optional()?;

        match coupon {
            Some(coupon) => Ok(Some(self.attach_emails(coupon)?)),
            None => Ok(None),
        }
    }

    /// Get every coupon of a site, newest first.
    pub fn get_coupons_for_site(&self, site_id: i64) -> Result<Vec<CouponWithEmails>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {COUPON_COLUMNS} FROM coupons WHERE site_id = ?1
             ORDER BY date_created_gmt DESC, id DESC"
        ))?;
        let coupons = stmt
            .query_map(params![site_id], coupon_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        coupons
            .into_iter()
            .map(|coupon| self.attach_emails(coupon))
            .collect()
    }

    /// Get the listed coupons of a site, in the order of `coupon_ids`.
    ///
    /// Ids with no stored row are skipped.
    pub fn get_coupons(&self, site_id: i64, coupon_ids: &[i64]) -> Result<Vec<CouponWithEmails>> {
        if coupon_ids.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; coupon_ids.len()].join(", ");
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {COUPON_COLUMNS} FROM coupons WHERE site_id = ? AND id IN ({placeholders})"
        ))?;
        let values = std::iter::once(site_id).chain(coupon_ids.iter().copied());
        let mut coupons = stmt
            .query_map(params_from_iter(values), coupon_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut ordered = Vec::with_capacity(coupons.len());
        for id in coupon_ids {
            if let Some(pos) = coupons.iter().position(|c| c.id == *id) {
                ordered.push(self.attach_emails(coupons.swap_remove(pos))?);
            }
        }
        Ok(ordered)
    }

    /// Email rows of one coupon, sorted by address.
    pub fn get_coupon_emails(&self, site_id: i64, coupon_id: i64) -> Result<Vec<CouponEmail>> {
        let mut stmt = self.conn.prepare(
            "SELECT coupon_id, site_id, email FROM coupon_emails
             WHERE site_id = ?1 AND coupon_id = ?2 ORDER BY email",
        )?;
        let emails = stmt
            .query_map(params![site_id, coupon_id], |row| {
                Ok(CouponEmail {
                    coupon_id: row.get(0)?,
                    site_id: row.get(1)?,
                    email: row.get(2)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(emails)
    }

    fn attach_emails(&self, coupon: Coupon) -> Result<CouponWithEmails> {
        let restricted_emails = self.get_coupon_emails(coupon.site_id, coupon.id)?;
        Ok(CouponWithEmails {
            coupon,
            restricted_emails,
        })
    }
}
