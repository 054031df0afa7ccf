// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the ilorest library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid command line: {0}")]
    InvalidCommandLine(String),

    #[error("{0}")]
    NoCurrentSession(String),

    #[error("please login or pass credentials to complete the operation\n  hint: run 'ilorest login <url> -u <user> -p <password>' or set url in config.toml")]
    MustLogin,

    #[error("{0}")]
    NoContentsFound(String),

    #[error("{0}")]
    IncompatibleServerType(String),

    #[error("no type currently selected\n  hint: run 'ilorest select <type>' first")]
    NothingSelected,

    #[error("property '{property}' not found in {type_name}")]
    UnknownProperty { property: String, type_name: String },

    #[error("expected PROPERTY=VALUE, got '{0}'")]
    InvalidAssignment(String),

    #[error("'{property}' overlaps '{other}'; a PATCH cannot set a property and one of its members\n  hint: stage them in separate commits")]
    OverlappingAssignment { property: String, other: String },

    #[error("could not decode credentials: {0}")]
    InvalidCredentials(String),

    #[error("{field} is required")]
    FieldRequired { field: &'static str },

    #[error("login to {url} failed with status {status}")]
    LoginFailed { url: String, status: u16 },

    #[error("session is locked by another ilorest process")]
    SessionLocked,

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] ilo_core::Error),
}

impl Error {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidCommandLine(_)
            | Error::InvalidAssignment(_)
            | Error::OverlappingAssignment { .. } => 2,
            Error::NoCurrentSession(_) | Error::MustLogin => 3,
            Error::NoContentsFound(_) | Error::NothingSelected | Error::UnknownProperty { .. } => 4,
            Error::IncompatibleServerType(_) => 5,
            Error::LoginFailed { .. } | Error::Http(_) => 6,
            _ => 1,
        }
    }
}

/// A specialized Result type for ilorest operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
