// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod commit;
pub mod disable_ilo;
pub mod get;
pub mod login;
pub mod logout;
pub mod select;
pub mod set;
pub mod status;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use crate::app::App;
use crate::config::Config;
use crate::error::Result;

/// Helper to open the session from the default config and cache locations.
pub fn open_app() -> Result<App> {
    let config = Config::load_default()?;
    crate::time_phase!("session::open", { App::open(config) })
}
