// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! REST transport abstraction.
//!
//! Provides a trait-based transport layer that enables:
//! - Real HTTP requests against iLO for production ([`HttpTransport`])
//! - Canned responses for unit testing (`MockTransport`)
//!
//! A transport only moves requests and responses. Authentication headers,
//! URL building and status handling live in [`crate::app::App`].

mod http;
#[cfg(test)]
pub(crate) mod mock;

pub use http::HttpTransport;

use serde_json::Value;
use std::fmt;

use crate::error::Result;

/// HTTP methods used against the Redfish API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request ready to be sent.
#[derive(Debug, Clone, PartialEq)]
pub struct RestRequest {
    pub method: Method,
    /// Absolute URL.
    pub url: String,
    /// Resource path the URL was built from, e.g. `/redfish/v1/Managers/1/`.
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

/// A response with its body decoded as JSON.
///
/// Bodies that are empty or not JSON decode to `Value::Null`.
#[derive(Debug, Clone, PartialEq)]
pub struct RestResponse {
    pub status: u16,
    /// Path of the request that produced this response.
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Value,
}

impl RestResponse {
    pub fn new(status: u16, path: impl Into<String>, body: Value) -> Self {
        RestResponse {
            status,
            path: path.into(),
            headers: Vec::new(),
            body,
        }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Looks up a header, ignoring case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends REST requests.
///
/// Implementations return every HTTP status as a response; only
/// transport-level failures (connection, TLS, timeouts) are errors.
pub trait Transport {
    fn send(&self, request: &RestRequest) -> Result<RestResponse>;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
