// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use wc_core::{Coupon, CouponEmail, DiscountType};
use yare::parameterized;

fn coupon() -> CouponWithEmails {
    CouponWithEmails {
        coupon: Coupon {
            amount: "10.00".into(),
            discount_type: DiscountType::Percent,
            date_created_gmt: "2021-04-01T10:00:00".into(),
            usage_count: 2,
            usage_limit: 5,
            ..Coupon::new(1, 720, "SPRING")
        },
        restricted_emails: vec![CouponEmail {
            coupon_id: 720,
            site_id: 1,
            email: "vip@example.com".into(),
        }],
    }
}

#[test]
fn coupon_line() {
    assert_eq!(format_coupon_line(&coupon()), "720: SPRING (10.00 percent)");
}

#[test]
fn coupon_details() {
    let text = format_coupon_details(&coupon());
    assert_eq!(
        text,
        "[720] SPRING\n\
         Discount: 10.00 percent\n\
         Created: 2021-04-01T10:00:00\n\
         Expires: none\n\
         Usage: 2 of 5 (unlimited per user)\n\
         Emails: vip@example.com"
    );
}

#[test]
fn report_line() {
    let report = CouponReport {
        coupon_id: 720,
        amount: 12.5,
        orders_count: 3,
    };
    assert_eq!(format_report(&report), "Coupon 720: 3 orders, 12.50 discounted");
}

#[parameterized(
    system = { true, false, "2021-01-01T00:00:00Z system [system]: Paid" },
    customer = { false, true, "2021-01-01T00:00:00Z system [customer]: Paid" },
    plain = { false, false, "2021-01-01T00:00:00Z system: Paid" },
)]
fn note_tags(is_system_note: bool, is_customer_note: bool, expected: &str) {
    let note = OrderNote {
        local_site_id: 1,
        note_id: 1,
        order_id: 100,
        date_created: "2021-01-01T00:00:00Z".into(),
        note: "Paid".into(),
        author: "system".into(),
        is_system_note,
        is_customer_note,
    };
    assert_eq!(format_note(&note), expected);
}

#[parameterized(
    monday = { 0, "Monday" },
    sunday = { 6, "Sunday" },
    out_of_range = { 9, "unknown" },
)]
fn insights_day_name(day: i64, name: &str) {
    let insights = MostPopularInsights {
        highest_day_of_week: day,
        highest_hour: 9,
        highest_day_percent: 30.4,
        highest_hour_percent: 12.0,
    };
    assert_eq!(
        format_insights(&insights),
        format!("Busiest day: {name} (30.4% of views)\nBusiest hour: 09:00 (12.0% of views)")
    );
}
