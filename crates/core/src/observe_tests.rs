// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::coupon::Coupon;
use std::time::Duration;

const WAIT: Duration = Duration::from_secs(5);

fn codes(db: &Database, site_id: i64) -> Result<Vec<String>> {
    Ok(db
        .get_coupons_for_site(site_id)?
        .into_iter()
        .map(|c| c.coupon.code)
        .collect())
}

#[tokio::test]
async fn initial_value_is_current_state() {
    let db = Database::open_in_memory().unwrap();
    db.upsert_coupon(&Coupon::new(1, 1, "A")).unwrap();
    let db = shared(db);

    let rx = observe(db, Table::Coupons, 1, |db| codes(db, 1)).await.unwrap();
    assert_eq!(*rx.borrow(), vec!["A"]);
}

#[tokio::test]
async fn emits_after_matching_write() {
    let db = shared(Database::open_in_memory().unwrap());
    let mut rx = observe(db.clone(), Table::Coupons, 1, |db| codes(db, 1))
        .await
        .unwrap();

    db.lock()
        .await
        .upsert_coupon(&Coupon::new(1, 1, "A"))
        .unwrap();

    tokio::time::timeout(WAIT, rx.changed()).await.unwrap().unwrap();
    assert_eq!(*rx.borrow_and_update(), vec!["A"]);
}

#[tokio::test]
async fn identical_result_is_not_emitted() {
    let db = Database::open_in_memory().unwrap();
    db.upsert_coupon(&Coupon::new(1, 1, "A")).unwrap();
    let db = shared(db);
    let mut rx = observe(db.clone(), Table::Coupons, 1, |db| codes(db, 1))
        .await
        .unwrap();

    // Rewriting the same row notifies, but the query result is unchanged
    db.lock()
        .await
        .upsert_coupon(&Coupon::new(1, 1, "A"))
        .unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(!rx.has_changed().unwrap());

    db.lock()
        .await
        .upsert_coupon(&Coupon::new(1, 2, "B"))
        .unwrap();
    tokio::time::timeout(WAIT, rx.changed()).await.unwrap().unwrap();
    assert_eq!(rx.borrow_and_update().len(), 2);
}

#[tokio::test]
async fn writes_to_other_sites_are_ignored() {
    let db = shared(Database::open_in_memory().unwrap());
    let rx = observe(db.clone(), Table::Coupons, 1, |db| codes(db, 1))
        .await
        .unwrap();

    db.lock()
        .await
        .upsert_coupon(&Coupon::new(2, 1, "OTHER"))
        .unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;

    assert!(!rx.has_changed().unwrap());
    assert!(rx.borrow().is_empty());
}

#[tokio::test]
async fn transaction_emits_final_state_only() {
    let db = Database::open_in_memory().unwrap();
    db.upsert_coupon(&Coupon::new(1, 1, "OLD")).unwrap();
    let db = shared(db);
    let mut rx = observe(db.clone(), Table::Coupons, 1, |db| codes(db, 1))
        .await
        .unwrap();

    db.lock()
        .await
        .execute_in_transaction(|db| {
            db.delete_all_coupons(1)?;
            db.upsert_coupon(&Coupon::new(1, 2, "NEW"))
        })
        .unwrap();

    tokio::time::timeout(WAIT, rx.changed()).await.unwrap().unwrap();
    assert_eq!(*rx.borrow_and_update(), vec!["NEW"]);
}

#[tokio::test]
async fn initial_query_error_is_returned() {
    let db = shared(Database::open_in_memory().unwrap());
    let result = observe(db, Table::Coupons, 1, |_| -> Result<i64> {
        Err(crate::error::Error::CorruptedData("broken".into()))
    })
    .await;
    assert!(result.is_err());
}
