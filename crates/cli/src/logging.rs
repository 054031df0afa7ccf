// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging to stderr.
//!
//! Filter precedence: `--debug`, then `ILOREST_LOG` (EnvFilter syntax),
//! then `warn`.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

use crate::env;

const DEFAULT_DIRECTIVE: &str = "warn";

/// Installs the global subscriber. Later calls are ignored.
pub fn init(debug: bool) {
    let filter = EnvFilter::try_new(directive(debug, env::log_filter().as_deref()))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}

fn directive(debug: bool, from_env: Option<&str>) -> String {
    if debug {
        return "debug".to_string();
    }
    match from_env.map(str::trim) {
        Some(d) if !d.is_empty() => d.to_string(),
        _ => DEFAULT_DIRECTIVE.to_string(),
    }
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
