// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Checks run by commands before they touch the iLO.

use crate::app::App;
use crate::credentials::Credentials;
use crate::error::{Error, Result};

/// What a command does when no session exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPolicy {
    /// Log in from the given URL and credentials, falling back to config.
    InlineLogin,
    /// Fail with this message.
    Require(&'static str),
}

/// Ensures a session client exists.
///
/// With a session, `creds` fill in a missing username or password. Without
/// one, `policy` decides between an inline login and an error.
pub fn validate_session(
    app: &mut App,
    creds: &Credentials,
    url: Option<&str>,
    policy: SessionPolicy,
) -> Result<()> {
    if let Some(client) = app.current_client_mut() {
        client.populate_missing(creds);
        return Ok(());
    }

    match policy {
        SessionPolicy::Require(message) => Err(Error::NoCurrentSession(message.to_string())),
        SessionPolicy::InlineLogin => {
            let (url, user, password) = login_input(app, creds, url)?;
            tracing::debug!("no session, logging in to {}", url);
            app.login(&url, &user, &password)
        }
    }
}

/// Login URL, user and password: explicit values first, then config.
///
/// Each field falls back on its own. An explicit `--url` still picks up the
/// configured username and password; config is not dropped as a whole when
/// any one value is given.
pub fn login_input(
    app: &App,
    creds: &Credentials,
    url: Option<&str>,
) -> Result<(String, String, String)> {
    let config = app.config();
    let url = url
        .map(str::to_string)
        .or_else(|| config.url.clone())
        .ok_or(Error::MustLogin)?;
    let user = creds
        .user
        .clone()
        .or_else(|| config.username.clone())
        .ok_or(Error::FieldRequired { field: "Username" })?;
    let password = creds
        .password
        .clone()
        .or_else(|| config.password.clone())
        .ok_or(Error::FieldRequired { field: "Password" })?;
    Ok((url, user, password))
}

/// Fails when a command that takes no arguments was given some.
pub fn reject_arguments(command: &str, args: &[String]) -> Result<()> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(Error::InvalidCommandLine(format!(
            "{command} command takes no arguments."
        )))
    }
}

/// Splits `PROPERTY=VALUE`. The value may be empty; the property may not.
pub fn parse_assignment(input: &str) -> Result<(String, String)> {
    match input.split_once('=') {
        Some((property, value)) if !property.trim().is_empty() => {
            Ok((property.trim().to_string(), value.to_string()))
        }
        _ => Err(Error::InvalidAssignment(input.to_string())),
    }
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
