// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod common;
use common::*;

#[test]
fn version_creates_latest_schema() {
    let ws = Workspace::offline();
    ws.cmd()
        .args(["db", "version"])
        .assert()
        .success()
        .stdout("schema version: 7\n");
    assert!(ws.db_path().exists());
}

#[test]
fn version_as_json() {
    let ws = Workspace::offline();
    let output = ws
        .cmd()
        .args(["-o", "json", "db", "version"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["schema_version"], 7);
    assert!(value["path"].as_str().unwrap().ends_with("wcsync.db"));
}
