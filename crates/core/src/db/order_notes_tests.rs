// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::order_note::OrderNote;

fn note(note_id: i64, order_id: i64, date_created: &str) -> OrderNote {
    OrderNote {
        local_site_id: 6,
        note_id,
        order_id,
        date_created: date_created.to_string(),
        note: format!("note {note_id}"),
        author: "system".to_string(),
        is_system_note: true,
        is_customer_note: false,
    }
}

#[test]
fn notes_for_order_newest_first() {
    let db = Database::open_in_memory().unwrap();
    db.upsert_order_note(&note(1, 100, "2019-01-01T00:00:00Z")).unwrap();
    db.upsert_order_note(&note(2, 100, "2019-03-01T00:00:00Z")).unwrap();
    db.upsert_order_note(&note(3, 200, "2019-02-01T00:00:00Z")).unwrap();

    let ids: Vec<_> = db
        .get_order_notes(6, 100)
        .unwrap()
        .into_iter()
        .map(|n| n.note_id)
        .collect();
    assert_eq!(ids, vec![2, 1]);
}

#[test]
fn upsert_overwrites_same_note() {
    let db = Database::open_in_memory().unwrap();
    db.upsert_order_note(&note(1, 100, "")).unwrap();
    db.upsert_order_note(&OrderNote {
        note: "edited".into(),
        is_customer_note: true,
        ..note(1, 100, "")
    })
    .unwrap();

    let notes = db.get_order_notes(6, 100).unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].note, "edited");
    assert!(notes[0].is_customer_note);
}

#[test]
fn delete_order_notes_keeps_other_orders() {
    let db = Database::open_in_memory().unwrap();
    db.upsert_order_note(&note(1, 100, "")).unwrap();
    db.upsert_order_note(&note(2, 200, "")).unwrap();

    assert_eq!(db.delete_order_notes(6, 100).unwrap(), 1);
    assert!(db.get_order_notes(6, 100).unwrap().is_empty());
    assert_eq!(db.get_order_notes(6, 200).unwrap().len(), 1);
}
