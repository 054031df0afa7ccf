// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Credential decoding.
//!
//! Scripts may pass obfuscated credentials with the hidden `-e/--enc` flag.
//! Decoding is a separate step applied before session validation, behind
//! the [`CredentialDecoder`] trait so the scheme can be swapped.

use base64::Engine;

use crate::error::{Error, Result};

/// Turns an encoded credential into plain text.
pub trait CredentialDecoder {
    fn decode(&self, raw: &str) -> Result<String>;
}

/// Standard base64, the encoding used by `-e/--enc`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64Decoder;

impl CredentialDecoder for Base64Decoder {
    fn decode(&self, raw: &str) -> Result<String> {
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(raw.trim())
            .map_err(|e| Error::InvalidCredentials(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| Error::InvalidCredentials(e.to_string()))
    }
}

/// Username and password as given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub user: Option<String>,
    pub password: Option<String>,
}

impl Credentials {
    pub fn new(user: Option<String>, password: Option<String>) -> Self {
        Credentials { user, password }
    }

    /// Decodes both fields with `decoder` when `encoded` is set.
    ///
    /// Nothing is decoded unless both user and password were given.
    pub fn decoded(self, encoded: bool, decoder: &dyn CredentialDecoder) -> Result<Self> {
        match (encoded, &self.user, &self.password) {
            (true, Some(user), Some(password)) => Ok(Credentials {
                user: Some(decoder.decode(user)?),
                password: Some(decoder.decode(password)?),
            }),
            _ => Ok(self),
        }
    }
}

#[cfg(test)]
#[path = "credentials_tests.rs"]
mod tests;
