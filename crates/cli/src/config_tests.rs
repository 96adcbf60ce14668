// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use tempfile::TempDir;
use yare::parameterized;

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn empty_file_gives_defaults() {
    let temp = TempDir::new().unwrap();
    let path = write_config(&temp, "");

    let config = Config::read(&path).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.page_size, 100);
    assert_eq!(config.timeout_secs, 30);
    assert_eq!(config.api_root, "https://public-api.wordpress.com/wpcom/v2");
}

#[test]
fn all_keys_are_read() {
    let temp = TempDir::new().unwrap();
    let path = write_config(
        &temp,
        r#"
api_root = "http://localhost:8080"
rest_root = "http://localhost:8080/rest"
token = "abc"
database = "/tmp/coupons.db"
page_size = 25
timeout_secs = 5
"#,
    );

    let config = Config::read(&path).unwrap();
    assert_eq!(config.api_root, "http://localhost:8080");
    assert_eq!(config.rest_root, "http://localhost:8080/rest");
    assert_eq!(config.token.as_deref(), Some("abc"));
    assert_eq!(config.database_path().unwrap(), PathBuf::from("/tmp/coupons.db"));
    assert_eq!(config.page_size, 25);

    let client = config.client_config();
    assert_eq!(client.timeout, Duration::from_secs(5));
    assert_eq!(client.token.as_deref(), Some("abc"));
}

#[test]
fn malformed_file_names_path() {
    let temp = TempDir::new().unwrap();
    let path = write_config(&temp, "page_size = \"lots\"");

    let err = Config::read(&path).unwrap_err();
    assert!(matches!(err, Error::InvalidConfig { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn explicit_missing_path_is_an_error() {
    let temp = TempDir::new().unwrap();
    let err = Config::load(Some(&temp.path().join("nope.toml"))).unwrap_err();
    assert!(matches!(err, Error::ConfigNotFound(_)));
}

#[parameterized(
    set = { Some("from-env"), Some("from-env") },
    blank = { Some("  "), Some("from-file") },
    unset = { None, Some("from-file") },
)]
fn token_override(env: Option<&str>, expected: Option<&str>) {
    let mut config = Config {
        token: Some("from-file".into()),
        ..Config::default()
    };
    config.apply_token_override(env.map(str::to_string));
    assert_eq!(config.token.as_deref(), expected);
}

#[test]
fn default_database_lives_in_data_dir() {
    if let Some(data) = dirs::data_dir() {
        assert_eq!(
            Config::default().database_path().unwrap(),
            data.join("wcsync").join("wcsync.db")
        );
    }
}
