// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub fn wcsync() -> Command {
    let mut cmd = cargo_bin_cmd!("wcsync");
    cmd.env_remove("WCSYNC_TOKEN").env_remove("RUST_LOG");
    cmd
}

/// A temp directory holding a config file and the database it points at.
pub struct Workspace {
    pub dir: TempDir,
    pub config: PathBuf,
}

impl Workspace {
    /// Config pointing at `api_root` with a page size of 2.
    pub fn new(api_root: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("config.toml");
        let db = dir.path().join("wcsync.db");
        std::fs::write(
            &config,
            format!(
                "api_root = \"{api_root}\"\nrest_root = \"{api_root}\"\ndatabase = \"{}\"\npage_size = 2\ntimeout_secs = 5\n",
                db.display()
            ),
        )
        .unwrap();
        Workspace { dir, config }
    }

    /// A workspace whose API root refuses every connection.
    pub fn offline() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        Workspace::new(&format!("http://{addr}"))
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = wcsync();
        cmd.arg("--config").arg(&self.config);
        cmd
    }

    pub fn db_path(&self) -> PathBuf {
        self.dir.path().join("wcsync.db")
    }
}

/// Serve one canned `(status, body)` per connection from a background
/// thread. Returns the root URL and the request lines seen so far.
pub fn serve(responses: Vec<(u16, String)>) -> (String, Arc<Mutex<Vec<String>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let log = seen.clone();

    std::thread::spawn(move || {
        for (status, body) in responses {
            let Ok((mut stream, _)) = listener.accept() else {
                return;
            };
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();

            let mut content_length = 0;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                if line.trim().is_empty() {
                    break;
                }
                if let Some((name, value)) = line.split_once(':') {
                    if name.eq_ignore_ascii_case("content-length") {
                        content_length = value.trim().parse().unwrap_or(0);
                    }
                }
            }
            let mut body_in = vec![0u8; content_length];
            reader.read_exact(&mut body_in).unwrap();
            log.lock().unwrap().push(request_line.trim().to_string());

            let response = format!(
                "HTTP/1.1 {status} Canned\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
        }
    });

    (format!("http://{addr}"), seen)
}

pub fn coupon_json(id: i64, code: &str) -> String {
    format!(
        r#"{{"id":{id},"code":"{code}","amount":"10.00","discount_type":"percent","date_created_gmt":"2021-04-0{id}T10:00:00","email_restrictions":["vip@example.com"]}}"#
    )
}

pub fn coupon_page(coupons: &[(i64, &str)]) -> String {
    let items: Vec<String> = coupons
        .iter()
        .map(|(id, code)| coupon_json(*id, code))
        .collect();
    format!("[{}]", items.join(","))
}
