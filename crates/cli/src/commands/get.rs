// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde_json::Value;
use std::io::{self, Write};

use crate::app::App;
use crate::credentials::Credentials;
use crate::error::{Error, Result};
use crate::validate::{validate_session, SessionPolicy};

use super::open_app;

pub fn run(properties: &[String], creds: Credentials, url: Option<&str>) -> Result<()> {
    let mut app = open_app()?;
    run_impl(&mut app, properties, &creds, url, &mut io::stdout().lock())
}

/// Internal implementation that accepts the app and writer for testing.
pub(crate) fn run_impl<W: Write>(
    app: &mut App,
    properties: &[String],
    creds: &Credentials,
    url: Option<&str>,
    out: &mut W,
) -> Result<()> {
    validate_session(app, creds, url, SessionPolicy::InlineLogin)?;
    let selector = app.selector().ok_or(Error::NothingSelected)?.to_string();
    let instances = app.selected_instances()?;
    if instances.is_empty() {
        return Err(Error::NoContentsFound(format!(
            "No contents found for selection: {selector}"
        )));
    }

    for (i, instance) in instances.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        if properties.is_empty() {
            for (name, value) in scalar_properties(&instance.body) {
                writeln!(out, "{}={}", name, format_value(value))?;
            }
            continue;
        }
        for name in properties {
            match property(&instance.body, name) {
                Some(value) => writeln!(out, "{}={}", name, format_value(value))?,
                None if instances.len() == 1 => {
                    return Err(Error::UnknownProperty {
                        property: name.clone(),
                        type_name: selector,
                    })
                }
                None => tracing::debug!("{} has no {}", instance.path, name),
            }
        }
    }
    Ok(())
}

/// Looks up a property by name. `/` separates nested names, as in
/// `Attributes/BootMode`.
pub(crate) fn property<'a>(body: &'a Value, name: &str) -> Option<&'a Value> {
    name.split('/')
        .filter(|s| !s.is_empty())
        .try_fold(body, |node, segment| node.get(segment))
}

/// Top-level properties that are neither objects, arrays nor OData
/// annotations.
fn scalar_properties(body: &Value) -> Vec<(&str, &Value)> {
    body.as_object()
        .map(|map| {
            map.iter()
                .filter(|(name, value)| {
                    !name.starts_with('@')
                        && !name.contains("@odata")
                        && !value.is_object()
                        && !value.is_array()
                })
                .map(|(name, value)| (name.as_str(), value))
                .collect()
        })
        .unwrap_or_default()
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "get_tests.rs"]
mod tests;
