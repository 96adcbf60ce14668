// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reactive queries over the local store.
//!
//! [`observe`] runs a query once, then re-runs it whenever a committed write
//! touches the watched table and site. The result is published on a
//! [`watch`] channel only when it differs from the previous value, so
//! subscribers never see two equal values in a row.
//!
//! Dropping every receiver stops the background task.

use std::sync::Arc;

use tokio::sync::broadcast::error::RecvError;
use tokio::sync::{watch, Mutex};

use crate::db::{Database, Table};
use crate::error::Result;

/// Database handle shared between the synchronizer and observers.
pub type SharedDatabase = Arc<Mutex<Database>>;

/// Wrap a database for sharing.
pub fn shared(db: Database) -> SharedDatabase {
    Arc::new(Mutex::new(db))
}

/// Start a reactive query on `table` rows of `site_id`.
///
/// Returns once the first result is available. A failing re-query is
/// logged and the last good value stays current.
pub async fn observe<T, F>(
    db: SharedDatabase,
    table: Table,
    site_id: i64,
    query: F,
) -> Result<watch::Receiver<T>>
where
    T: PartialEq + Send + Sync + 'static,
    F: Fn(&Database) -> Result<T> + Send + 'static,
{
    let (initial, mut changes) = {
        let guard = db.lock().await;
        // Subscribe before the first query so no commit slips between them
        let changes = guard.subscribe();
        (query(&guard)?, changes)
    };

    let (tx, rx) = watch::channel(initial);

    tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = tx.closed() => break,
                received = changes.recv() => match received {
                    Ok(change) if change.table == table && change.site_id == site_id => {}
                    Ok(_) => continue,
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::debug!(skipped, "observer lagged behind, re-querying");
                    }
                    Err(RecvError::Closed) => break,
                },
            }

            let result = {
                let guard = db.lock().await;
                query(&guard)
            };

            match result {
                Ok(value) => {
                    tx.send_if_modified(|current| {
                        if *current == value {
                            false
                        } else {
                            *current = value;
                            true
                        }
                    });
                }
                Err(e) => {
                    tracing::warn!(?table, site_id, error = %e, "observer query failed");
                }
            }
        }
        tracing::debug!(?table, site_id, "observer stopped");
    });

    Ok(rx)
}

#[cfg(test)]
#[path = "observe_tests.rs"]
mod tests;
