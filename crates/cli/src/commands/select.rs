// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};

use crate::app::App;
use crate::credentials::Credentials;
use crate::error::{Error, Result};
use crate::validate::{validate_session, SessionPolicy};

use super::open_app;

pub fn run(type_name: Option<&str>, creds: Credentials, url: Option<&str>) -> Result<()> {
    let mut app = open_app()?;
    run_impl(&mut app, type_name, &creds, url, &mut io::stdout().lock())
}

/// Internal implementation that accepts the app and writer for testing.
///
/// Without a type, prints the current selection.
pub(crate) fn run_impl<W: Write>(
    app: &mut App,
    type_name: Option<&str>,
    creds: &Credentials,
    url: Option<&str>,
    out: &mut W,
) -> Result<()> {
    validate_session(app, creds, url, SessionPolicy::InlineLogin)?;
    match type_name {
        Some(type_name) => {
            let instances = app.select(type_name)?;
            tracing::debug!("selected {} instance(s) of {}", instances.len(), type_name);
        }
        None => {
            let selector = app.selector().ok_or(Error::NothingSelected)?;
            writeln!(out, "Current selection: {selector}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "select_tests.rs"]
mod tests;
