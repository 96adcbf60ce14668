// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User configuration.
//!
//! Read from `config.toml` in the wcsync config directory (or the path given
//! with `--config`). Every key is optional:
//! - `api_root`, `rest_root`: API base URLs
//! - `token`: OAuth bearer token, overridden by `WCSYNC_TOKEN`
//! - `database`: SQLite file (default: `wcsync.db` in the data directory)
//! - `page_size`: coupons per fetched page
//! - `timeout_secs`: per-request timeout

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use wc_rest::{ClientConfig, DEFAULT_API_ROOT, DEFAULT_REST_ROOT};

use crate::error::{Error, Result};

const APP_DIR_NAME: &str = "wcsync";
const CONFIG_FILE_NAME: &str = "config.toml";
const DB_FILE_NAME: &str = "wcsync.db";

/// Environment variable that overrides the configured token.
pub const TOKEN_ENV: &str = "WCSYNC_TOKEN";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_root")]
    pub api_root: String,
    #[serde(default = "default_rest_root")]
    pub rest_root: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_root() -> String {
    DEFAULT_API_ROOT.to_string()
}

fn default_rest_root() -> String {
    DEFAULT_REST_ROOT.to_string()
}

fn default_page_size() -> u32 {
    wc_core::DEFAULT_PAGE_SIZE
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_root: default_api_root(),
            rest_root: default_rest_root(),
            token: None,
            database: None,
            page_size: default_page_size(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Default location of the config file.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

impl Config {
    /// Load the config, then apply `WCSYNC_TOKEN`.
    ///
    /// An explicit path must exist. A missing default file means defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::ConfigNotFound(path.display().to_string()));
                }
                Self::read(path)?
            }
            None => match default_config_path() {
                Some(path) if path.exists() => Self::read(&path)?,
                _ => Config::default(),
            },
        };
        config.apply_token_override(std::env::var(TOKEN_ENV).ok());
        Ok(config)
    }

    fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| Error::InvalidConfig {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// An empty override is ignored.
    pub fn apply_token_override(&mut self, token: Option<String>) {
        if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
            self.token = Some(token);
        }
    }

    /// Resolved database path.
    pub fn database_path(&self) -> Result<PathBuf> {
        match self.database {
            Some(ref path) => Ok(path.clone()),
            None => dirs::data_dir()
                .map(|d| d.join(APP_DIR_NAME).join(DB_FILE_NAME))
                .ok_or(Error::NoDataDir),
        }
    }

    /// Settings for the REST client.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            api_root: self.api_root.clone(),
            rest_root: self.rest_root.clone(),
            token: self.token.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
