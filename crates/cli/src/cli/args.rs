// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are used with `#[command(flatten)]` so every command takes
//! credentials the same way.

use clap::Args;

use crate::credentials::{Base64Decoder, CredentialDecoder, Credentials};
use crate::error::Result;

/// Credentials accepted by every session-aware command.
#[derive(Args, Clone, Debug, Default)]
pub struct CredentialArgs {
    /// iLO username, used when no session exists or to complete one
    #[arg(long, short)]
    pub user: Option<String>,

    /// iLO password, used together with --user
    #[arg(long, short)]
    pub password: Option<String>,

    /// Credentials are base64 encoded
    #[arg(long, short, hide = true)]
    pub enc: bool,
}

impl CredentialArgs {
    /// Plain-text credentials, decoded when `--enc` was given.
    pub fn credentials(&self) -> Result<Credentials> {
        self.credentials_with(&Base64Decoder)
    }

    pub fn credentials_with(&self, decoder: &dyn CredentialDecoder) -> Result<Credentials> {
        Credentials::new(self.user.clone(), self.password.clone()).decoded(self.enc, decoder)
    }
}

/// Credentials plus the iLO URL for commands that can log in inline.
#[derive(Args, Clone, Debug, Default)]
pub struct LoginArgs {
    /// iLO URL to log in to when no session exists
    #[arg(long)]
    pub url: Option<String>,

    #[command(flatten)]
    pub creds: CredentialArgs,
}
