// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};

use crate::app::App;
use crate::credentials::Credentials;
use crate::error::Result;
use crate::validate::login_input;

use super::open_app;

pub fn run(url: Option<&str>, creds: Credentials) -> Result<()> {
    let mut app = open_app()?;
    run_impl(&mut app, url, &creds, &mut io::stdout().lock())
}

/// Internal implementation that accepts the app and writer for testing.
///
/// An existing session is logged out first.
pub(crate) fn run_impl<W: Write>(
    app: &mut App,
    url: Option<&str>,
    creds: &Credentials,
    out: &mut W,
) -> Result<()> {
    let (url, user, password) = login_input(app, creds, url)?;
    if app.current_client().is_some() {
        tracing::debug!("replacing the current session");
        app.logout()?;
    }
    app.login(&url, &user, &password)?;
    writeln!(out, "Logged in to {}", url.trim_end_matches('/'))?;
    Ok(())
}

#[cfg(test)]
#[path = "login_tests.rs"]
mod tests;
