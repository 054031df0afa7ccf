// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User configuration.
//!
//! Configuration is read from `config.toml`, located through
//! `ILOREST_CONFIG` or the platform config directory
//! (`~/.config/ilorest/config.toml` on Linux). Every key is optional:
//! - `url`, `username`, `password`: defaults used when logging in without
//!   explicit values
//! - `cache_dir`: where the session file lives
//! - `crawl_depth`: how far resource discovery follows links
//! - `timeout_secs`, `insecure`: HTTP client settings

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::env;
use crate::error::{Error, Result};

const CONFIG_DIR_NAME: &str = "ilorest";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Tool configuration stored in `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Default iLO URL used by `login` and inline logins.
    pub url: Option<String>,
    /// Default username.
    pub username: Option<String>,
    /// Default password.
    pub password: Option<String>,
    /// Directory holding the session file (overridden by `ILOREST_CACHE_DIR`).
    pub cache_dir: Option<PathBuf>,
    /// Maximum link depth followed from the service root during discovery.
    #[serde(default = "default_crawl_depth")]
    pub crawl_depth: usize,
    /// HTTP request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Accept self-signed certificates (iLO ships with one).
    #[serde(default = "default_insecure")]
    pub insecure: bool,
}

fn default_crawl_depth() -> usize {
    3
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_insecure() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            url: None,
            username: None,
            password: None,
            cache_dir: None,
            crawl_depth: default_crawl_depth(),
            timeout_secs: default_timeout_secs(),
            insecure: default_insecure(),
        }
    }
}

impl Config {
    /// Loads configuration from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Loads configuration from the default location.
    pub fn load_default() -> Result<Self> {
        match default_config_path() {
            Some(path) => Self::load(&path),
            None => Ok(Config::default()),
        }
    }

    /// Resolves the session cache directory.
    ///
    /// Order: `ILOREST_CACHE_DIR`, `cache_dir` from the config, then the
    /// platform cache directory.
    pub fn resolve_cache_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = env::cache_dir() {
            return Ok(dir);
        }
        if let Some(dir) = &self.cache_dir {
            return Ok(dir.clone());
        }
        dirs::cache_dir()
            .map(|d| d.join(CONFIG_DIR_NAME))
            .ok_or_else(|| Error::Config("cannot determine a cache directory".to_string()))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Path of the config file: `ILOREST_CONFIG`, else the platform config dir.
pub fn default_config_path() -> Option<PathBuf> {
    env::config_path().or_else(|| {
        dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    })
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
