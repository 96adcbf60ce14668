// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use tempfile::TempDir;

fn context(dir: &TempDir, output: OutputFormat) -> Context {
    let config = Config {
        database: Some(dir.path().join("wcsync.db")),
        page_size: 25,
        ..Config::default()
    };
    Context::new(config, output)
}

#[test]
fn page_size_prefers_flag() {
    let temp = TempDir::new().unwrap();
    let ctx = context(&temp, OutputFormat::Text);
    let paging = PageArgs {
        page: 1,
        page_size: Some(5),
    };
    assert_eq!(ctx.page_size(&paging), 5);
    assert_eq!(ctx.page_size(&PageArgs { page_size: None, ..paging }), 25);
}

#[test]
fn json_follows_output_format() {
    let temp = TempDir::new().unwrap();
    assert!(context(&temp, OutputFormat::Json).json());
    assert!(!context(&temp, OutputFormat::Text).json());
}

#[test]
fn open_db_creates_configured_file() {
    let temp = TempDir::new().unwrap();
    let db = context(&temp, OutputFormat::Text).open_db().unwrap();
    assert_eq!(db.schema_version().unwrap(), wc_core::db::schema::LATEST_VERSION);
    assert!(temp.path().join("wcsync.db").exists());
}
