// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Persisted session state.
//!
//! One CLI invocation runs one command, so everything a later command needs
//! (the logged-in client, the selection, staged changes) is kept in
//! `session.json` inside the cache directory. A `session.lock` file is held
//! exclusively while a command runs, making that process the only writer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use ilo_core::PendingChangeSet;

use crate::credentials::Credentials;
use crate::error::{Error, Result};
use crate::typedefs::TypeDefs;

const SESSION_FILE_NAME: &str = "session.json";
const LOCK_FILE_NAME: &str = "session.lock";

/// The logged-in session client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Base URL of the iLO, e.g. `https://10.0.0.5`.
    pub url: String,
    username: Option<String>,
    // never written to disk
    #[serde(skip)]
    password: Option<String>,
    /// Session token sent as `X-Auth-Token`.
    pub token: Option<String>,
    /// Session resource URI, deleted on logout.
    pub location: Option<String>,
}

impl Client {
    pub fn new(url: impl Into<String>) -> Self {
        Client {
            url: url.into(),
            ..Client::default()
        }
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = Some(username.into());
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = Some(password.into());
    }

    /// Fills username and password from `creds` where not already set.
    ///
    /// Only acts when both a user and a password were given; existing
    /// values are never overwritten.
    pub fn populate_missing(&mut self, creds: &Credentials) {
        let (Some(user), Some(password)) = (&creds.user, &creds.password) else {
            return;
        };
        if self.username.is_none() {
            self.set_username(user.clone());
        }
        if self.password.is_none() {
            self.set_password(password.clone());
        }
    }
}

/// Everything persisted between invocations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub client: Option<Client>,
    pub selector: Option<String>,
    #[serde(default)]
    pub typedefs: TypeDefs,
    #[serde(default)]
    pub pending: PendingChangeSet,
    /// Resource path for each pending-change key.
    #[serde(default)]
    pub targets: BTreeMap<String, String>,
}

/// Owner of the session file for the duration of one command.
pub struct SessionStore {
    dir: PathBuf,
    _lock: File,
}

impl SessionStore {
    /// Opens the store in `dir`, creating it and taking the lock.
    pub fn open(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)?;
        let lock = acquire_lock(&dir.join(LOCK_FILE_NAME))?;
        Ok(SessionStore {
            dir: dir.to_path_buf(),
            _lock: lock,
        })
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(SESSION_FILE_NAME)
    }

    /// Loads the state, or an empty one when no session was saved.
    pub fn load(&self) -> Result<SessionState> {
        let path = self.path();
        if !path.exists() {
            return Ok(SessionState::default());
        }
        let content = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Writes the state to a temp file, then renames it into place.
    pub fn save(&self, state: &SessionState) -> Result<()> {
        let tmp = self.dir.join(format!("{SESSION_FILE_NAME}.tmp"));
        fs::write(&tmp, serde_json::to_string_pretty(state)?)?;
        fs::rename(&tmp, self.path())?;
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        let path = self.path();
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// Acquire an exclusive lock on the lock file.
fn acquire_lock(lock_path: &Path) -> Result<File> {
    use fs2::FileExt;

    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(lock_path)?;

    file.try_lock_exclusive().map_err(|_| Error::SessionLocked)?;

    Ok(file)
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
