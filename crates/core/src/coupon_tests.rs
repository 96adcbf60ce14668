// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    percent = { "percent", DiscountType::Percent },
    fixed_cart = { "fixed_cart", DiscountType::FixedCart },
    fixed_product = { "fixed_product", DiscountType::FixedProduct },
    extension = { "sign_up_fee", DiscountType::Other("sign_up_fee".into()) },
)]
fn discount_type_parses(input: &str, expected: DiscountType) {
    let parsed: DiscountType = input.parse().unwrap();
    assert_eq!(parsed, expected);
    assert_eq!(parsed.as_str(), input);
}

#[test]
fn new_coupon_defaults() {
    let coupon = Coupon::new(1, 2, "SAVE10");
    assert_eq!(coupon.site_id, 1);
    assert_eq!(coupon.id, 2);
    assert_eq!(coupon.code, "SAVE10");
    assert_eq!(coupon.discount_type, DiscountType::FixedCart);
    assert!(coupon.product_ids.is_empty());
    assert_eq!(coupon.usage_limit, 0);
}

#[test]
fn coupon_with_emails_lists_patterns() {
    let with_emails = CouponWithEmails {
        coupon: Coupon::new(1, 2, "VIP"),
        restricted_emails: vec![
            CouponEmail {
                coupon_id: 2,
                site_id: 1,
                email: "a@example.com".into(),
            },
            CouponEmail {
                coupon_id: 2,
                site_id: 1,
                email: "*@vip.example.com".into(),
            },
        ],
    };
    assert_eq!(
        with_emails.emails(),
        vec!["a@example.com", "*@vip.example.com"]
    );
}

#[test]
fn discount_type_serializes_as_plain_string() {
    let json = serde_json::to_string(&DiscountType::Other("recurring_fee".into())).unwrap();
    assert_eq!(json, "\"recurring_fee\"");
    let back: DiscountType = serde_json::from_str("\"percent\"").unwrap();
    assert_eq!(back, DiscountType::Percent);
}
