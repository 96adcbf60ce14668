// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SQLite-backed local store.
//!
//! The [`Database`] struct owns the connection, runs the schema migrations
//! on open, executes units of work in a transaction, and publishes a
//! [`Change`] for every committed write so reactive queries can refresh.
//! Table-specific operations live in the submodules.

use std::cell::{Cell, RefCell};
use std::path::Path;

use rusqlite::Connection;
use tokio::sync::broadcast;

use crate::error::{Error, Result};

mod coupons;
mod order_notes;
mod revenue_stats;
pub mod schema;

/// Capacity of the change channel. Slow observers that fall further behind
/// than this resynchronize with a fresh query.
const CHANGE_CHANNEL_CAPACITY: usize = 256;

/// Tables that publish change notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Table {
    Coupons,
    OrderNotes,
    RevenueStats,
}

/// A committed write to `table` for one site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Change {
    pub table: Table,
    /// Remote site id for coupons, local site id for the other tables.
    pub site_id: i64,
}

/// Parse a JSON-encoded id list column.
fn parse_id_list(value: &str, column: &str) -> std::result::Result<Vec<i64>, rusqlite::Error> {
    serde_json::from_str(value).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(Error::CorruptedData(format!(
                "invalid id list '{value}' in column '{column}'"
            ))),
        )
    })
}

/// Parse a string value from the database, returning a rusqlite error on parse failure.
fn parse_db<T: std::str::FromStr>(
    value: &str,
    column: &str,
) -> std::result::Result<T, rusqlite::Error> {
    value.parse().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(Error::CorruptedData(format!(
                "invalid value '{value}' in column '{column}'"
            ))),
        )
    })
}

/// SQLite database connection with the local store operations.
pub struct Database {
    /// The underlying SQLite connection.
    pub conn: Connection,
    changes: broadcast::Sender<Change>,
    /// Nesting depth of `execute_in_transaction`; inner calls join the outer one.
    depth: Cell<u32>,
    /// Changes recorded inside the open transaction, published on commit.
    pending: RefCell<Vec<Change>>,
}

impl Database {
    /// Open a database at the given path, creating and migrating if needed.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )?;

        Self::with_connection(conn)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        schema::migrate(&conn)?;
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Ok(Database {
            conn,
            changes,
            depth: Cell::new(0),
            pending: RefCell::new(Vec::new()),
        })
    }

    /// Current schema version.
    pub fn schema_version(&self) -> Result<i64> {
        schema::user_version(&self.conn)
    }

    /// Subscribe to committed changes.
    pub fn subscribe(&self) -> broadcast::Receiver<Change> {
        self.changes.subscribe()
    }

    /// Run `f` so that every write it performs commits atomically.
    ///
    /// Calls nested inside an open transaction join it. If `f` returns an
    /// error the transaction rolls back and no change is published.
    pub fn execute_in_transaction<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Self) -> Result<T>,
    {
        if self.depth.get() > 0 {
            return f(self);
        }

        let tx = self.conn.unchecked_transaction()?;
        self.depth.set(1);
        let result = f(self);
        self.depth.set(0);

        match result {
            Ok(value) => {
                if let Err(e) = tx.commit() {
                    self.pending.borrow_mut().clear();
                    return Err(e.into());
                }
                self.publish_pending();
                Ok(value)
            }
            Err(e) => {
                self.pending.borrow_mut().clear();
                Err(e)
            }
        }
    }

    /// Record a write; published now, or on commit when inside a transaction.
    fn record_change(&self, table: Table, site_id: i64) {
        let change = Change { table, site_id };
        if self.depth.get() > 0 {
            self.pending.borrow_mut().push(change);
        } else {
            // No subscribers is not an error
            let _ = self.changes.send(change);
        }
    }

    fn publish_pending(&self) {
        let mut pending = std::mem::take(&mut *self.pending.borrow_mut());
        pending.sort();
        pending.dedup();
        for change in pending {
            let _ = self.changes.send(change);
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;


#[cfg(test)]
#[path = "order_notes_tests.rs"]
mod order_notes_tests;
