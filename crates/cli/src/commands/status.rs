// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};

use ilo_core::render_pending;

use crate::app::App;
use crate::credentials::Credentials;
use crate::error::Result;
use crate::validate::{validate_session, SessionPolicy};

use super::open_app;

const NO_SESSION_MESSAGE: &str =
    "Please login and make setting changes before using status command.";

pub fn run(creds: Credentials) -> Result<()> {
    let mut app = open_app()?;
    run_impl(&mut app, &creds, &mut io::stdout().lock())
}

/// Internal implementation that accepts the app and writer for testing.
pub(crate) fn run_impl<W: Write>(app: &mut App, creds: &Credentials, out: &mut W) -> Result<()> {
    validate_session(app, creds, None, SessionPolicy::Require(NO_SESSION_MESSAGE))?;

    let contents = app.status();
    if contents.is_empty() {
        writeln!(out, "No changes found")?;
        return Ok(());
    }

    let summary = render_pending(contents, app.selector(), out)?;
    if summary.skipped > 0 {
        tracing::warn!(
            "{} pending entr{} could not be displayed",
            summary.skipped,
            if summary.skipped == 1 { "y" } else { "ies" }
        );
    }
    Ok(())
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
