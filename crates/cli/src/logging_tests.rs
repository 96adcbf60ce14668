// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    quiet = { false, "warn" },
    verbose = { true, "debug" },
)]
fn directive_follows_verbosity(verbose: bool, expected: &str) {
    assert_eq!(default_directive(verbose), expected);
}
