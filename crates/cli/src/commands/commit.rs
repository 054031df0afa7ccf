// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};

use ilo_core::build_patch_body;

use crate::app::App;
use crate::credentials::Credentials;
use crate::error::Result;
use crate::validate::{validate_session, SessionPolicy};

use super::open_app;

pub fn run(creds: Credentials, url: Option<&str>) -> Result<()> {
    let mut app = open_app()?;
    run_impl(&mut app, &creds, url, &mut io::stdout().lock())
}

/// Internal implementation that accepts the app and writer for testing.
///
/// Keys whose PATCH succeeds leave the pending set and the session is saved
/// right away, so an error on a later key never resends them. Failed keys
/// and keys whose body cannot be built stay pending.
pub(crate) fn run_impl<W: Write>(
    app: &mut App,
    creds: &Credentials,
    url: Option<&str>,
    out: &mut W,
) -> Result<()> {
    validate_session(app, creds, url, SessionPolicy::InlineLogin)?;
    if app.status().is_empty() {
        writeln!(out, "No changes found")?;
        return Ok(());
    }

    writeln!(out, "Committing changes...")?;
    let keys: Vec<String> = app.status().keys().map(str::to_string).collect();
    for key in keys {
        let entries = app.status().get(&key).unwrap_or_default();
        let patch = match build_patch_body(entries) {
            Ok(patch) => patch,
            Err(e) => {
                tracing::warn!("{}: {}, keeping changes", key, e);
                continue;
            }
        };
        if patch.skipped > 0 {
            tracing::warn!("{}: skipped {} entries a PATCH cannot carry", key, patch.skipped);
        }
        if patch.body.as_object().is_some_and(|b| b.is_empty()) {
            tracing::debug!("{}: nothing to send", key);
            app.discard(&key);
            app.save()?;
            continue;
        }

        let Some(path) = app.target_of(&key).map(str::to_string) else {
            tracing::warn!("{}: no resource path recorded, keeping changes", key);
            continue;
        };
        let response = app.patch(&path, &patch.body)?;
        if response.is_success() {
            writeln!(out, "[{}] The operation completed successfully.", response.status)?;
            app.discard(&key);
            app.save()?;
        } else {
            writeln!(out, "[{}] No message returned by iLO.", response.status)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "commit_tests.rs"]
mod tests;
