// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use wc_core::Site;

use super::Context;
use crate::cli::NotesCommand;
use crate::display::{format_note, print_json};
use crate::error::Result;

pub async fn run(ctx: &Context, command: NotesCommand) -> Result<()> {
    match command {
        NotesCommand::Fetch { site, order_id } => fetch(ctx, site.site(), order_id).await,
        NotesCommand::List { site, order_id } => list(ctx, site.site(), order_id),
    }
}

/// Notes are keyed by the local site id.
async fn fetch(ctx: &Context, site: Site, order_id: i64) -> Result<()> {
    let dtos = ctx.client()?.fetch_order_notes(site, order_id).await?;
    let db = ctx.open_db()?;
    db.execute_in_transaction(|db| {
        dtos.iter()
            .try_for_each(|dto| db.upsert_order_note(&dto.to_data_model(site.local_id, order_id)))
    })?;
    tracing::debug!(order_id, count = dtos.len(), "stored order notes");
    list(ctx, site, order_id)
}

fn list(ctx: &Context, site: Site, order_id: i64) -> Result<()> {
    let notes = ctx.open_db()?.get_order_notes(site.local_id, order_id)?;
    if ctx.json() {
        return print_json(&notes);
    }
    if notes.is_empty() {
        println!("No notes stored for order {order_id}");
    }
    for note in &notes {
        println!("{}", format_note(note));
    }
    Ok(())
}
