// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Revenue stats cache.

use rusqlite::{params, OptionalExtension, Row};

use super::{parse_db, Database, Table};
use crate::error::Result;
use crate::stats::{RevenueStats, StatsInterval};

fn stats_from_row(row: &Row<'_>) -> std::result::Result<RevenueStats, rusqlite::Error> {
    let interval: String = row.get(2)?;
    Ok(RevenueStats {
        id: row.get(0)?,
        local_site_id: row.get(1)?,
        interval: parse_db(&interval, "interval")?,
        start_date: row.get(3)?,
        end_date: row.get(4)?,
        data: row.get(5)?,
        total: row.get(6)?,
    })
}

impl Database {
    /// Store a stats response, replacing any row for the same site,
    /// interval and date range. Returns the stored row id.
    pub fn insert_or_update_stats(&self, stats: &RevenueStats) -> Result<i64> {
        self.execute_in_transaction(|db| {
            let existing: Option<i64> = db
                .conn
                .query_row(
                    "SELECT id FROM revenue_stats
                     WHERE local_site_id = ?1 AND interval = ?2
                       AND start_date = ?3 AND end_date = ?4",
                    params![
                        stats.local_site_id,
                        stats.interval.as_str(),
                        stats.start_date,
                        stats.end_date
                    ],
                    |row| row.get(0),
                )
                .optional()?;

            let id = match existing {
                Some(id) => {
                    db.conn.execute(
                        "UPDATE revenue_stats SET data = ?1, total = ?2 WHERE id = ?3",
                        params![stats.data, stats.total, id],
                    )?;
                    id
                }
                None => {
                    db.conn.execute(
                        "INSERT INTO revenue_stats
                            (local_site_id, interval, start_date, end_date, data, total)
                         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                        params![
                            stats.local_site_id,
                            stats.interval.as_str(),
                            stats.start_date,
                            stats.end_date,
                            stats.data,
                            stats.total
                        ],
                    )?;
                    db.conn.last_insert_rowid()
                }
            };

            db.record_change(Table::RevenueStats, stats.local_site_id);
            Ok(id)
        })
    }

    /// Look up the cached stats for an exact site, interval and date range.
    pub fn get_raw_stats(
        &self,
        local_site_id: i64,
        interval: StatsInterval,
        start_date: &str,
        end_date: &str,
    ) -> Result<Option<RevenueStats>> {
        let stats = self
            .conn
            .query_row(
                "SELECT id, local_site_id, interval, start_date, end_date, data, total
                 FROM revenue_stats
                 WHERE local_site_id = ?1 AND interval = ?2
                   AND start_date = ?3 AND end_date = ?4",
                params![local_site_id, interval.as_str(), start_date, end_date],
                stats_from_row,
            )
            .optional()?;
        Ok(stats)
    }

    /// Every cached stats row, in insertion order.
    pub fn get_all_stats(&self) -> Result<Vec<RevenueStats>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, local_site_id, interval, start_date, end_date, data, total
             FROM revenue_stats ORDER BY id",
        )?;
        let stats = stmt
            .query_map([], stats_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(stats)
    }

    /// Remove the cached stats of a site.
    pub fn delete_stats(&self, local_site_id: i64) -> Result<usize> {
        let removed = self.conn.execute(
            "DELETE FROM revenue_stats WHERE local_site_id = ?1",
            params![local_site_id],
        )?;
        self.record_change(Table::RevenueStats, local_site_id);
        Ok(removed)
    }
}
