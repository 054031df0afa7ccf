// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    default = { false, None, "warn" },
    debug_flag = { true, None, "debug" },
    debug_beats_env = { true, Some("trace"), "debug" },
    from_env = { false, Some("ilorest=trace"), "ilorest=trace" },
    blank_env = { false, Some("  "), "warn" },
)]
fn test_directive(debug: bool, from_env: Option<&str>, expected: &str) {
    assert_eq!(directive(debug, from_env), expected);
}

#[test]
fn test_init_twice_is_harmless() {
    init(false);
    init(true);
}
