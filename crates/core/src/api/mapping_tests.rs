// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use serde_json::json;
use yare::parameterized;

#[parameterized(
    system = { Some("system"), true },
    woocommerce = { Some("WooCommerce"), true },
    person = { Some("Shop Manager"), false },
    absent = { None, false },
)]
fn order_note_system_author(author: Option<&str>, expected: bool) {
    let dto = OrderNoteDto {
        author: author.map(str::to_string),
        ..Default::default()
    };
    assert_eq!(dto.to_data_model(1, 2).is_system_note, expected);
}

#[test]
fn order_note_maps_fields() {
    let dto: OrderNoteDto = serde_json::from_value(json!({
        "id": 281,
        "date_created_gmt": "2019-02-07T14:15:40",
        "note": "Order status changed from Pending to Processing.",
        "author": "system",
        "customer_note": true
    }))
    .unwrap();
    let note = dto.to_data_model(6, 1001);

    assert_eq!(note.local_site_id, 6);
    assert_eq!(note.note_id, 281);
    assert_eq!(note.order_id, 1001);
    assert_eq!(note.date_created, "2019-02-07T14:15:40Z");
    assert_eq!(note.author, "system");
    assert!(note.is_customer_note);
}

#[test]
fn order_note_defaults() {
    let dto: OrderNoteDto = serde_json::from_value(json!({})).unwrap();
    let note = dto.to_data_model(6, 1001);

    assert_eq!(note.note_id, 0);
    assert_eq!(note.date_created, "");
    assert_eq!(note.note, "");
    assert_eq!(note.author, "");
    assert!(!note.is_customer_note);
}

#[test]
fn connection_token_renames_fields() {
    let dto: ConnectionTokenDto =
        serde_json::from_value(json!({ "secret": "pst_test_abc", "test_mode": true })).unwrap();
    let token = ConnectionToken::from(dto);

    assert_eq!(token.token, "pst_test_abc");
    assert!(token.is_test_mode);
}

#[test]
fn connection_token_requires_secret() {
    let result = serde_json::from_value::<ConnectionTokenDto>(json!({ "test_mode": false }));
    assert!(result.is_err());
}

#[test]
fn shipping_label_reads_camel_case() {
    let dto: ShippingLabelDto = serde_json::from_value(json!({
        "orderId": 42,
        "paperSize": "label",
        "storeOptions": { "currency_symbol": "$" },
        "labelsData": [
            { "label_id": 11, "tracking": "1Z999", "status": "PURCHASED" },
            { "tracking": "missing id" }
        ],
        "success": true
    }))
    .unwrap();
    let purchase = dto.to_data_model();

    assert_eq!(purchase.order_id, 42);
    assert_eq!(purchase.paper_size, "label");
    assert_eq!(purchase.store_options["currency_symbol"], "$");
    assert_eq!(purchase.form_data, serde_json::Value::Null);
    assert_eq!(purchase.label_ids, vec![11]);
    assert!(purchase.success);
}

#[test]
fn most_popular_defaults() {
    let dto: MostPopularDto =
        serde_json::from_value(json!({ "highest_hour": 14, "highest_day_percent": 32.5 }))
            .unwrap();
    let insights = dto.to_data_model();

    assert_eq!(insights.highest_day_of_week, 0);
    assert_eq!(insights.highest_hour, 14);
    assert_eq!(insights.highest_day_percent, 32.5);
    assert_eq!(insights.highest_hour_percent, 0.0);
}
