// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};

use crate::app::App;
use crate::error::Result;

use super::open_app;

pub fn run() -> Result<()> {
    let mut app = open_app()?;
    run_impl(&mut app, &mut io::stdout().lock())
}

/// Internal implementation that accepts the app and writer for testing.
pub(crate) fn run_impl<W: Write>(app: &mut App, out: &mut W) -> Result<()> {
    writeln!(out, "Logging session out.")?;
    app.logout()
}

#[cfg(test)]
#[path = "logout_tests.rs"]
mod tests;
