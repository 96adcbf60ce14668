// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use rusqlite::params;

use super::{Database, Table};
use crate::error::Result;
use crate::order_note::OrderNote;

impl Database {
    /// Insert a note or overwrite the row with the same `(local_site_id, note_id)`.
    pub fn upsert_order_note(&self, note: &OrderNote) -> Result<()> {
        self.conn.execute(
            "INSERT INTO order_notes (local_site_id, note_id, order_id, date_created, note,
                author, is_system_note, is_customer_note)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
             ON CONFLICT(local_site_id, note_id) DO UPDATE SET
                order_id = excluded.order_id,
                date_created = excluded.date_created,
                note = excluded.note,
                author = excluded.author,
                is_system_note = excluded.is_system_note,
                is_customer_note = excluded.is_customer_note",
            params![
                note.local_site_id,
                note.note_id,
                note.order_id,
                note.date_created,
                note.note,
                note.author,
                note.is_system_note,
                note.is_customer_note
            ],
        )?;
        self.record_change(Table::OrderNotes, note.local_site_id);
        Ok(())
    }

    /// Notes of one order, newest first.
    pub fn get_order_notes(&self, local_site_id: i64, order_id: i64) -> Result<Vec<OrderNote>> {
        let mut stmt = self.conn.prepare(
            "SELECT local_site_id, note_id, order_id, date_created, note, author,
                    is_system_note, is_customer_note
             FROM order_notes
             WHERE local_site_id = ?1 AND order_id = ?2
             ORDER BY date_created DESC, note_id DESC",
        )?;
        let notes = stmt
            .query_map(params![local_site_id, order_id], |row| {
                Ok(OrderNote {
                    local_site_id: row.get(0)?,
                    note_id: row.get(1)?,
                    order_id: row.get(2)?,
                    date_created: row.get(3)?,
                    note: row.get(4)?,
                    author: row.get(5)?,
                    is_system_note: row.get(6)?,
                    is_customer_note: row.get(7)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(notes)
    }

    /// Remove every note of one order.
    pub fn delete_order_notes(&self, local_site_id: i64, order_id: i64) -> Result<usize> {
        let removed = self.conn.execute(
            "DELETE FROM order_notes WHERE local_site_id = ?1 AND order_id = ?2",
            params![local_site_id, order_id],
        )?;
        self.record_change(Table::OrderNotes, local_site_id);
        Ok(removed)
    }
}
