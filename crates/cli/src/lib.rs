// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ilorest - manage HPE iLO through the Redfish REST API.
//!
//! This crate provides the commands behind the `ilorest` binary. A command
//! opens the persisted session, validates or creates a login, talks to the
//! iLO through a [`rest::Transport`] and prints the result.
//!
//! # Main Components
//!
//! - [`App`] - Session context: client, selection, staged changes, discovery
//! - [`Config`] - User configuration (`config.toml`)
//! - [`rest`] - Transport trait with the reqwest-backed [`rest::HttpTransport`]
//! - [`Error`] - Error types and their exit codes
//!
//! Staged changes and their rendering live in the `ilo_core` crate.

mod cli;
mod commands;
mod validate;

pub mod app;
pub mod config;
pub mod credentials;
pub mod env;
pub mod error;
pub mod logging;
pub mod rest;
pub mod session;
pub mod timings;
pub mod typedefs;

pub use app::{App, Instance};
pub use cli::{Cli, Command, CredentialArgs, LoginArgs};
pub use config::Config;
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Login { url, creds } => commands::login::run(url.as_deref(), creds.credentials()?),
        Command::Logout => commands::logout::run(),
        Command::Select { type_name, login } => commands::select::run(
            type_name.as_deref(),
            login.creds.credentials()?,
            login.url.as_deref(),
        ),
        Command::Get { properties, login } => commands::get::run(
            &properties,
            login.creds.credentials()?,
            login.url.as_deref(),
        ),
        Command::Set { assignments, login } => commands::set::run(
            &assignments,
            login.creds.credentials()?,
            login.url.as_deref(),
        ),
        Command::Status { creds } => commands::status::run(creds.credentials()?),
        Command::Commit { login } => {
            commands::commit::run(login.creds.credentials()?, login.url.as_deref())
        }
        Command::Disableilofunctionality { args, login } => commands::disable_ilo::run(
            &args,
            login.creds.credentials()?,
            login.url.as_deref(),
        ),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "ilorest", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Converts a clap parse failure into [`Error::InvalidCommandLine`].
///
/// Only the first line of clap's message is kept.
pub fn parse_error(err: &clap::Error) -> Error {
    let rendered = err.to_string();
    let detail = rendered
        .lines()
        .next()
        .unwrap_or_default()
        .trim_start_matches("error: ")
        .to_string();
    Error::InvalidCommandLine(detail)
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
