// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod common;
use common::*;

#[test]
fn help_lists_command_groups() {
    wcsync()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("coupons"))
        .stdout(predicate::str::contains("Get started:"));
}

#[test]
fn site_is_required() {
    wcsync()
        .args(["coupons", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--site"));
}

#[test]
fn explicit_config_must_exist() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope.toml");
    wcsync()
        .arg("--config")
        .arg(&missing)
        .args(["db", "version"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn invalid_config_is_reported() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");
    std::fs::write(&config, "page_size = \"many\"\n").unwrap();
    wcsync()
        .arg("--config")
        .arg(&config)
        .args(["db", "version"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config file"));
}
