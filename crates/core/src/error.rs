// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for ilo-core operations.

use thiserror::Error;

/// All possible errors that can occur in ilo-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid patch path: '{0}'\n  hint: paths look like /Property or /Parent/Child")]
    InvalidPath(String),

    #[error("conflicting patch paths: '{path}' is already set to a scalar")]
    ConflictingPath { path: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for ilo-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
