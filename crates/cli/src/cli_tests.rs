// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use super::*;
use yare::parameterized;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(args)
}

#[test]
fn fetch_defaults_to_first_page() {
    let cli = parse(&["wcsync", "coupons", "fetch", "--site", "12"]).unwrap();
    match cli.command {
        Command::Coupons(CouponsCommand::Fetch { site, paging }) => {
            assert_eq!(site.site(), Site::new(12, 12));
            assert_eq!(paging.page, 1);
            assert_eq!(paging.page_size, None);
        }
        _ => panic!("expected coupons fetch"),
    }
}

#[test]
fn local_id_overrides_default() {
    let cli = parse(&[
        "wcsync", "coupons", "list", "--site", "12", "--local-id", "3",
    ])
    .unwrap();
    match cli.command {
        Command::Coupons(CouponsCommand::List { site }) => {
            assert_eq!(site.site(), Site::new(12, 3));
        }
        _ => panic!("expected coupons list"),
    }
}

#[test]
fn global_flags_after_subcommand() {
    let cli = parse(&["wcsync", "db", "version", "-o", "json", "-v"]).unwrap();
    assert_eq!(cli.output, OutputFormat::Json);
    assert!(cli.verbose);
}

#[test]
fn search_takes_query_and_paging() {
    let cli = parse(&[
        "wcsync",
        "coupons",
        "search",
        "--site",
        "12",
        "summer",
        "--page",
        "2",
        "--page-size",
        "10",
    ])
    .unwrap();
    match cli.command {
        Command::Coupons(CouponsCommand::Search {
            query, paging, ..
        }) => {
            assert_eq!(query, "summer");
            assert_eq!(paging.page, 2);
            assert_eq!(paging.page_size, Some(10));
        }
        _ => panic!("expected coupons search"),
    }
}

#[test]
fn create_fields_map_to_request() {
    let cli = parse(&[
        "wcsync",
        "coupons",
        "create",
        "--site",
        "12",
        "--code",
        "VIP",
        "--amount",
        "15",
        "--email",
        "a@example.com",
        "--email",
        "b@example.com",
        "--free-shipping",
        "true",
    ])
    .unwrap();
    match cli.command {
        Command::Coupons(CouponsCommand::Create { fields, .. }) => {
            let request = fields.to_request();
            assert_eq!(request.code.as_deref(), Some("VIP"));
            assert_eq!(request.amount.as_deref(), Some("15"));
            assert_eq!(
                request.restricted_emails,
                Some(vec!["a@example.com".to_string(), "b@example.com".to_string()])
            );
            assert_eq!(request.is_shipping_free, Some(true));
            assert_eq!(request.description, None);
        }
        _ => panic!("expected coupons create"),
    }
}

#[test]
fn no_emails_leaves_restriction_unset() {
    assert_eq!(CouponFields::default().to_request().restricted_emails, None);
}

#[parameterized(
    trash = { &["wcsync", "coupons", "delete", "--site", "1", "5"], false },
    permanent = { &["wcsync", "coupons", "delete", "--site", "1", "5", "--permanent"], true },
)]
fn delete_permanent_flag(args: &[&str], expected: bool) {
    match parse(args).unwrap().command {
        Command::Coupons(CouponsCommand::Delete {
            coupon_id,
            permanent,
            ..
        }) => {
            assert_eq!(coupon_id, 5);
            assert_eq!(permanent, expected);
        }
        _ => panic!("expected coupons delete"),
    }
}

#[parameterized(
    missing_site = { &["wcsync", "coupons", "list"] },
    bad_site = { &["wcsync", "coupons", "list", "--site", "abc"] },
    bad_output = { &["wcsync", "db", "version", "-o", "yaml"] },
    missing_coupon_id = { &["wcsync", "coupons", "get", "--site", "1"] },
)]
fn invalid_arguments_are_rejected(args: &[&str]) {
    assert!(parse(args).is_err());
}
