// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text rendering of stored entities.

use serde::Serialize;
use wc_core::{CouponReport, CouponWithEmails, MostPopularInsights, OrderNote};

use crate::error::Result;

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// One line per coupon: id, code, amount and discount type.
pub fn format_coupon_line(coupon: &CouponWithEmails) -> String {
    let c = &coupon.coupon;
    format!("{}: {} ({} {})", c.id, c.code, c.amount, c.discount_type)
}

fn or_none(value: &str) -> &str {
    if value.is_empty() {
        "none"
    } else {
        value
    }
}

fn limit(value: i64) -> String {
    if value == 0 {
        "unlimited".to_string()
    } else {
        value.to_string()
    }
}

pub fn format_coupon_details(coupon: &CouponWithEmails) -> String {
    let c = &coupon.coupon;
    let mut lines = vec![
        format!("[{}] {}", c.id, c.code),
        format!("Discount: {} {}", c.amount, c.discount_type),
    ];
    if !c.description.is_empty() {
        lines.push(format!("Description: {}", c.description));
    }
    lines.push(format!("Created: {}", or_none(&c.date_created_gmt)));
    lines.push(format!("Expires: {}", or_none(&c.date_expires_gmt)));
    lines.push(format!(
        "Usage: {} of {} ({} per user)",
        c.usage_count,
        limit(c.usage_limit),
        limit(c.usage_limit_per_user)
    ));
    if c.is_shipping_free {
        lines.push("Free shipping".to_string());
    }
    if !coupon.restricted_emails.is_empty() {
        lines.push(format!("Emails: {}", coupon.emails().join(", ")));
    }
    lines.join("\n")
}

pub fn format_report(report: &CouponReport) -> String {
    format!(
        "Coupon {}: {} orders, {:.2} discounted",
        report.coupon_id, report.orders_count, report.amount
    )
}

pub fn format_note(note: &OrderNote) -> String {
    let mut tags = Vec::new();
    if note.is_system_note {
        tags.push("system");
    }
    if note.is_customer_note {
        tags.push("customer");
    }
    let tags = if tags.is_empty() {
        String::new()
    } else {
        format!(" [{}]", tags.join(", "))
    };
    format!(
        "{} {}{}: {}",
        or_none(&note.date_created),
        note.author,
        tags,
        note.note
    )
}

pub fn format_insights(insights: &MostPopularInsights) -> String {
    let day = usize::try_from(insights.highest_day_of_week)
        .ok()
        .and_then(|d| WEEKDAYS.get(d))
        .copied()
        .unwrap_or("unknown");
    format!(
        "Busiest day: {day} ({:.1}% of views)\nBusiest hour: {:02}:00 ({:.1}% of views)",
        insights.highest_day_percent, insights.highest_hour, insights.highest_hour_percent
    )
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
