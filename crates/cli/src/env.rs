// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by the CLI are defined here
//! with typed accessor functions. The variable name constants are generated
//! by `build.rs` and live in the [`vars`] submodule.

use std::path::PathBuf;

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Returns the value of `ILOREST_CONFIG` if set.
pub fn config_path() -> Option<PathBuf> {
    std::env::var(vars::ILOREST_CONFIG).ok().map(PathBuf::from)
}

/// Returns the value of `ILOREST_CACHE_DIR` if set.
pub fn cache_dir() -> Option<PathBuf> {
    std::env::var(vars::ILOREST_CACHE_DIR)
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Returns the `ILOREST_LOG` filter directive if set.
pub fn log_filter() -> Option<String> {
    std::env::var(vars::ILOREST_LOG).ok()
}

/// Returns `true` if `ILOREST_TIMINGS` is set (any value).
pub fn timings() -> bool {
    std::env::var(vars::ILOREST_TIMINGS).is_ok()
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
