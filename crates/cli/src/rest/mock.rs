// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory transport for unit tests.

use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::{Method, RestRequest, RestResponse, Transport};
use crate::error::Result;

#[derive(Default)]
struct MockState {
    routes: HashMap<(Method, String), RestResponse>,
    requests: Vec<RestRequest>,
}

/// Transport answering from a route table and recording every request.
///
/// Clones share state, so a test can keep a handle after moving one into
/// an `App`. Unknown routes answer 404.
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Rc<RefCell<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a response for `method` on `path`.
    pub fn route(&self, method: Method, path: &str, response: RestResponse) -> &Self {
        self.state
            .borrow_mut()
            .routes
            .insert((method, path.to_string()), response);
        self
    }

    /// Registers a 200 JSON body for a GET.
    pub fn get(&self, path: &str, body: Value) -> &Self {
        self.route(Method::Get, path, RestResponse::new(200, path, body))
    }

    pub fn requests(&self) -> Vec<RestRequest> {
        self.state.borrow().requests.clone()
    }

    /// Requests sent with `method`.
    pub fn requests_with(&self, method: Method) -> Vec<RestRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method)
            .collect()
    }
}

impl Transport for MockTransport {
    fn send(&self, request: &RestRequest) -> Result<RestResponse> {
        let mut state = self.state.borrow_mut();
        state.requests.push(request.clone());
        let response = state
            .routes
            .get(&(request.method, request.path.clone()))
            .cloned()
            .unwrap_or_else(|| RestResponse::new(404, request.path.clone(), Value::Null));
        Ok(response)
    }
}
