// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde_json::json;
use wc_core::{CouponWithEmails, Site};

use super::Context;
use crate::cli::{CouponFields, CouponsCommand, PageArgs};
use crate::display::{format_coupon_details, format_coupon_line, format_report, print_json};
use crate::error::{Error, Result};

pub async fn run(ctx: &Context, command: CouponsCommand) -> Result<()> {
    match command {
        CouponsCommand::Fetch { site, paging } => fetch(ctx, site.site(), paging).await,
        CouponsCommand::Search {
            site,
            query,
            paging,
        } => search(ctx, site.site(), &query, paging).await,
        CouponsCommand::Get {
            site,
            coupon_id,
            refresh,
        } => get(ctx, site.site(), coupon_id, refresh).await,
        CouponsCommand::List { site } => list(ctx, site.site()),
        CouponsCommand::Create { site, fields } => create(ctx, site.site(), fields).await,
        CouponsCommand::Update {
            site,
            coupon_id,
            fields,
        } => update(ctx, site.site(), coupon_id, fields).await,
        CouponsCommand::Delete {
            site,
            coupon_id,
            permanent,
        } => delete(ctx, site.site(), coupon_id, permanent).await,
        CouponsCommand::Report { site, coupon_id } => report(ctx, site.site(), coupon_id).await,
        CouponsCommand::Watch { site, fetch } => watch(ctx, site.site(), fetch).await,
    }
}

fn print_list(ctx: &Context, site: Site, coupons: &[CouponWithEmails]) -> Result<()> {
    if ctx.json() {
        return print_json(coupons);
    }
    if coupons.is_empty() {
        println!("No coupons stored for site {}", site.site_id);
    }
    for coupon in coupons {
        println!("{}", format_coupon_line(coupon));
    }
    Ok(())
}

async fn fetch(ctx: &Context, site: Site, paging: PageArgs) -> Result<()> {
    let store = ctx.coupon_store()?;
    let page_size = ctx.page_size(&paging);
    let more = store.fetch_coupons(site, paging.page, page_size).await?;
    let stored = store.get_coupons(site).await?.len();

    if ctx.json() {
        return print_json(&json!({
            "site_id": site.site_id,
            "page": paging.page,
            "stored": stored,
            "more_available": more,
        }));
    }
    println!(
        "Fetched page {} for site {}: {stored} coupons stored",
        paging.page, site.site_id
    );
    if more {
        println!("More coupons available: run with --page {}", paging.page + 1);
    }
    Ok(())
}

async fn search(ctx: &Context, site: Site, query: &str, paging: PageArgs) -> Result<()> {
    let store = ctx.coupon_store()?;
    let result = store
        .search_coupons(site, query, paging.page, ctx.page_size(&paging))
        .await?;

    if ctx.json() {
        return print_json(&json!({
            "coupons": result.coupons,
            "can_load_more": result.can_load_more,
        }));
    }
    if result.coupons.is_empty() {
        println!("No coupons match '{query}'");
    }
    for coupon in &result.coupons {
        println!("{}", format_coupon_line(coupon));
    }
    if result.can_load_more {
        println!("More matches available: run with --page {}", paging.page + 1);
    }
    Ok(())
}

async fn get(ctx: &Context, site: Site, coupon_id: i64, refresh: bool) -> Result<()> {
    let store = ctx.coupon_store()?;
    if refresh {
        store.fetch_coupon(site, coupon_id).await?;
    }
    let coupon = store
        .get_coupon(site, coupon_id)
        .await?
        .ok_or(Error::CouponNotStored {
            site_id: site.site_id,
            coupon_id,
        })?;

    if ctx.json() {
        print_json(&coupon)
    } else {
        println!("{}", format_coupon_details(&coupon));
        Ok(())
    }
}

fn list(ctx: &Context, site: Site) -> Result<()> {
    let coupons = ctx.open_db()?.get_coupons_for_site(site.site_id)?;
    print_list(ctx, site, &coupons)
}

async fn create(ctx: &Context, site: Site, fields: CouponFields) -> Result<()> {
    let id = ctx
        .coupon_store()?
        .create_coupon(site, fields.to_request())
        .await?;

    if ctx.json() {
        print_json(&json!({ "id": id }))
    } else {
        println!("Created coupon {id}");
        Ok(())
    }
}

async fn update(ctx: &Context, site: Site, coupon_id: i64, fields: CouponFields) -> Result<()> {
    ctx.coupon_store()?
        .update_coupon(site, coupon_id, fields.to_request())
        .await?;
    if !ctx.json() {
        println!("Updated coupon {coupon_id}");
    }
    Ok(())
}

async fn delete(ctx: &Context, site: Site, coupon_id: i64, permanent: bool) -> Result<()> {
    ctx.coupon_store()?
        .delete_coupon(site, coupon_id, !permanent)
        .await?;
    if !ctx.json() {
        let verb = if permanent { "Deleted" } else { "Trashed" };
        println!("{verb} coupon {coupon_id}");
    }
    Ok(())
}

async fn report(ctx: &Context, site: Site, coupon_id: i64) -> Result<()> {
    let report = ctx
        .coupon_store()?
        .fetch_coupon_report(site, coupon_id)
        .await?;
    if ctx.json() {
        print_json(&report)
    } else {
        println!("{}", format_report(&report));
        Ok(())
    }
}

fn print_snapshot(ctx: &Context, site: Site, coupons: &[CouponWithEmails]) -> Result<()> {
    if ctx.json() {
        // One document per line so the stream can be piped
        println!("{}", serde_json::to_string(coupons)?);
        return Ok(());
    }
    println!(
        "-- {} coupons at {}",
        coupons.len(),
        chrono::Utc::now().format("%H:%M:%S")
    );
    print_list(ctx, site, coupons)
}

async fn watch(ctx: &Context, site: Site, fetch_first: bool) -> Result<()> {
    let store = ctx.coupon_store()?;
    let mut rx = store.observe_coupons(site).await?;
    let snapshot = rx.borrow_and_update().clone();
    print_snapshot(ctx, site, &snapshot)?;

    if fetch_first {
        store
            .fetch_coupons(site, wc_core::DEFAULT_PAGE, ctx.config.page_size)
            .await?;
    }

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = rx.borrow_and_update().clone();
                print_snapshot(ctx, site, &snapshot)?;
            }
        }
    }
    Ok(())
}
