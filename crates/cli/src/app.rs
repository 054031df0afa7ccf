// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Session context shared by every command.
//!
//! [`App`] owns the loaded configuration, the locked session store, the
//! persisted session state and the REST transport. Commands receive it by
//! `&mut` reference; nothing else writes the session file.

use serde_json::{json, Value};
use std::collections::{HashSet, VecDeque};

use ilo_core::{matches_type, PatchEntry, PendingChangeSet};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::rest::{HttpTransport, Method, RestRequest, RestResponse, Transport};
use crate::session::{Client, SessionState, SessionStore};
use crate::typedefs::TypeDefs;

/// Path of the Redfish service root.
pub const SERVICE_ROOT: &str = "/redfish/v1/";

const SESSIONS_PATH: &str = "/redfish/v1/SessionService/Sessions/";
const AUTH_HEADER: &str = "X-Auth-Token";

/// A discovered resource.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    /// Request path the resource was read from.
    pub path: String,
    /// `@odata.type` without its leading `#`.
    pub odata_type: String,
    pub body: Value,
}

impl Instance {
    /// Key used to group this resource's staged changes.
    pub fn change_key(&self) -> String {
        format!("{}({})", self.odata_type, self.path)
    }

    /// Path that receives PATCH requests for this resource.
    ///
    /// Resources with a pending-settings object take changes there.
    pub fn settings_path(&self) -> &str {
        self.body
            .pointer("/@Redfish.Settings/SettingsObject/@odata.id")
            .and_then(Value::as_str)
            .unwrap_or(&self.path)
    }
}

pub struct App {
    config: Config,
    store: SessionStore,
    state: SessionState,
    transport: Box<dyn Transport>,
}

impl App {
    /// Opens the session in the configured cache directory with an HTTP
    /// transport.
    pub fn open(config: Config) -> Result<Self> {
        let transport = HttpTransport::new(config.timeout(), config.insecure)?;
        let store = SessionStore::open(&config.resolve_cache_dir()?)?;
        Self::with_transport(config, store, Box::new(transport))
    }

    pub fn with_transport(
        config: Config,
        store: SessionStore,
        transport: Box<dyn Transport>,
    ) -> Result<Self> {
        let state = store.load()?;
        Ok(App {
            config,
            store,
            state,
            transport,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn current_client(&self) -> Option<&Client> {
        self.state.client.as_ref()
    }

    pub fn current_client_mut(&mut self) -> Option<&mut Client> {
        self.state.client.as_mut()
    }

    pub fn typedefs(&self) -> &TypeDefs {
        &self.state.typedefs
    }

    pub fn selector(&self) -> Option<&str> {
        self.state.selector.as_deref()
    }

    /// Staged changes of the current session.
    pub fn status(&self) -> &PendingChangeSet {
        &self.state.pending
    }

    /// Resource path that a pending-change key is committed to.
    pub fn target_of(&self, key: &str) -> Option<&str> {
        self.state.targets.get(key).map(String::as_str)
    }

    /// Creates a Redfish session and makes it the current client.
    ///
    /// Any previous session state (selection, staged changes) is dropped.
    pub fn login(&mut self, url: &str, user: &str, password: &str) -> Result<()> {
        let url = url.trim_end_matches('/').to_string();
        let request = RestRequest {
            method: Method::Post,
            url: format!("{url}{SESSIONS_PATH}"),
            path: SESSIONS_PATH.to_string(),
            headers: Vec::new(),
            body: Some(json!({ "UserName": user, "Password": password })),
        };
        let response = self.send(&request)?;
        if !response.is_success() {
            return Err(Error::LoginFailed {
                url,
                status: response.status,
            });
        }

        let mut client = Client::new(url);
        client.set_username(user);
        client.set_password(password);
        client.token = response.header(AUTH_HEADER).map(str::to_string);
        client.location = response.header("Location").map(str::to_string);

        self.state = SessionState {
            client: Some(client),
            ..SessionState::default()
        };

        let root = self.get(SERVICE_ROOT)?;
        if root.is_success() {
            self.state.typedefs = TypeDefs::detect(&root.body);
        } else {
            tracing::warn!("service root returned {}, assuming Gen10", root.status);
        }
        tracing::debug!(typedefs = ?self.state.typedefs, "logged in");
        self.save()
    }

    /// Deletes the Redfish session and forgets all session state.
    pub fn logout(&mut self) -> Result<()> {
        let location = self
            .current_client()
            .and_then(|c| c.location.clone());
        if let Some(location) = location {
            match self.delete(&location) {
                Ok(resp) if resp.is_success() => {}
                Ok(resp) => tracing::warn!("session delete returned {}", resp.status),
                Err(e) => tracing::warn!("session delete failed: {}", e),
            }
        }
        self.state = SessionState::default();
        self.store.clear()
    }

    /// Selects a resource type.
    ///
    /// Fails when no resource of that type exists.
    pub fn select(&mut self, type_filter: &str) -> Result<Vec<Instance>> {
        let instances = self.filter(type_filter)?;
        if instances.is_empty() {
            return Err(Error::NoContentsFound(format!(
                "No type found for selection: {type_filter}"
            )));
        }
        self.state.selector = Some(type_filter.to_string());
        self.save()?;
        Ok(instances)
    }

    /// Instances of the selected type, failing when nothing is selected.
    pub fn selected_instances(&self) -> Result<Vec<Instance>> {
        let selector = self.selector().ok_or(Error::NothingSelected)?;
        self.filter(selector)
    }

    /// Discovers every resource whose type starts with `type_filter`.
    ///
    /// Walks breadth-first from the service root through top-level links and
    /// collection members, up to `crawl_depth` hops, reading each path once.
    pub fn filter(&self, type_filter: &str) -> Result<Vec<Instance>> {
        let max_depth = self.config.crawl_depth;
        let mut found = Vec::new();
        let mut visited = HashSet::new();
        let mut queue = VecDeque::from([(SERVICE_ROOT.to_string(), 0usize)]);

        while let Some((path, depth)) = queue.pop_front() {
            if !visited.insert(path.clone()) {
                continue;
            }
            let response = self.get(&path)?;
            if !response.is_success() {
                tracing::debug!("skipping {} ({})", path, response.status);
                continue;
            }
            if let Some(odata_type) = response.body.get("@odata.type").and_then(Value::as_str) {
                if matches_type(odata_type, type_filter) {
                    found.push(Instance {
                        path: path.clone(),
                        odata_type: odata_type.trim_start_matches('#').to_string(),
                        body: response.body.clone(),
                    });
                }
            }
            if depth < max_depth {
                for link in links(&response.body) {
                    if !visited.contains(&link) {
                        queue.push_back((link, depth + 1));
                    }
                }
            }
        }

        tracing::debug!("{} instance(s) of {}", found.len(), type_filter);
        Ok(found)
    }

    pub fn get(&self, path: &str) -> Result<RestResponse> {
        self.authenticated(Method::Get, path, None)
    }

    /// POSTs `body` to `path`. Non-2xx statuses are returned, not raised.
    pub fn post_handler(&self, path: &str, body: &Value) -> Result<RestResponse> {
        self.authenticated(Method::Post, path, Some(body.clone()))
    }

    pub fn patch(&self, path: &str, body: &Value) -> Result<RestResponse> {
        self.authenticated(Method::Patch, path, Some(body.clone()))
    }

    pub fn delete(&self, path: &str) -> Result<RestResponse> {
        self.authenticated(Method::Delete, path, None)
    }

    /// Stages a change against `instance`.
    pub fn stage(&mut self, instance: &Instance, entry: PatchEntry) {
        let key = instance.change_key();
        self.state
            .targets
            .insert(key.clone(), instance.settings_path().to_string());
        self.state.pending.stage(&key, entry);
    }

    /// Drops the staged changes of `key`.
    pub fn discard(&mut self, key: &str) {
        self.state.pending.remove(key);
        self.state.targets.remove(key);
    }

    pub fn save(&self) -> Result<()> {
        self.store.save(&self.state)
    }

    fn authenticated(&self, method: Method, path: &str, body: Option<Value>) -> Result<RestResponse> {
        let client = self.current_client().ok_or(Error::MustLogin)?;
        let (url, path) = resolve(&client.url, path);
        let headers = client
            .token
            .iter()
            .map(|t| (AUTH_HEADER.to_string(), t.clone()))
            .collect();
        self.send(&RestRequest {
            method,
            url,
            path,
            headers,
            body,
        })
    }

    fn send(&self, request: &RestRequest) -> Result<RestResponse> {
        tracing::debug!("{} {}", request.method, request.url);
        let response = crate::time_phase!(&format!("rest::{}", request.method), {
            self.transport.send(request)
        })?;
        tracing::debug!("{} {} -> {}", request.method, request.path, response.status);
        Ok(response)
    }
}

/// Builds the absolute URL and the request path for `path`.
///
/// Absolute URLs (as returned in `Location` headers) are used as-is.
fn resolve(base: &str, path: &str) -> (String, String) {
    if path.starts_with("http://") || path.starts_with("https://") {
        let request_path = reqwest::Url::parse(path)
            .map(|u| u.path().to_string())
            .unwrap_or_else(|_| path.to_string());
        return (path.to_string(), request_path);
    }
    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };
    (format!("{}{}", base.trim_end_matches('/'), path), path)
}

/// Links followed during discovery: top-level `@odata.id` references and
/// collection members.
fn links(body: &Value) -> Vec<String> {
    let Some(object) = body.as_object() else {
        return Vec::new();
    };
    let mut out = Vec::new();
    for (name, value) in object {
        if name == "Members" {
            if let Some(members) = value.as_array() {
                out.extend(members.iter().filter_map(odata_id));
            }
        } else if let Some(id) = odata_id(value) {
            out.push(id);
        }
    }
    out
}

fn odata_id(value: &Value) -> Option<String> {
    value
        .get("@odata.id")
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
