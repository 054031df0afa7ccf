// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use reqwest::blocking::Client;
use std::time::Duration;

use super::{Method, RestRequest, RestResponse, Transport};
use crate::error::Result;

/// Blocking HTTP transport backed by reqwest.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Builds a transport with the given timeout.
    ///
    /// With `insecure` set, self-signed certificates are accepted.
    pub fn new(timeout: Duration, insecure: bool) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .danger_accept_invalid_certs(insecure)
            .build()?;
        Ok(HttpTransport { client })
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &RestRequest) -> Result<RestResponse> {
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
            Method::Patch => self.client.patch(&request.url),
            Method::Delete => self.client.delete(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send()?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.to_string(), v.to_string())))
            .collect();
        let text = response.text()?;
        let body = serde_json::from_str(&text).unwrap_or(serde_json::Value::Null);

        Ok(RestResponse {
            status,
            path: request.path.clone(),
            headers,
            body,
        })
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
