// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};

use ilo_core::{PatchEntry, PatchValue, StagedEntry};

use crate::app::{App, Instance};
use crate::credentials::Credentials;
use crate::error::{Error, Result};
use crate::validate::{parse_assignment, validate_session, SessionPolicy};

use super::{get, open_app};

pub fn run(assignments: &[String], creds: Credentials, url: Option<&str>) -> Result<()> {
    let mut app = open_app()?;
    run_impl(&mut app, assignments, &creds, url, &mut io::stdout().lock())
}

/// Internal implementation that accepts the app and writer for testing.
pub(crate) fn run_impl<W: Write>(
    app: &mut App,
    assignments: &[String],
    creds: &Credentials,
    url: Option<&str>,
    out: &mut W,
) -> Result<()> {
    if assignments.is_empty() {
        return Err(Error::InvalidCommandLine(
            "set requires at least one PROPERTY=VALUE".to_string(),
        ));
    }
    let assignments = assignments
        .iter()
        .map(|a| parse_assignment(a))
        .collect::<Result<Vec<_>>>()?;

    validate_session(app, creds, url, SessionPolicy::InlineLogin)?;
    let selector = app.selector().ok_or(Error::NothingSelected)?.to_string();
    let instances = app.selected_instances()?;
    if instances.is_empty() {
        return Err(Error::NoContentsFound(format!(
            "No contents found for selection: {selector}"
        )));
    }

    // Check every property before staging anything.
    let mut staged: Vec<(String, PatchValue, Vec<&Instance>)> = Vec::new();
    for (property, raw) in assignments {
        let targets: Vec<&Instance> = instances
            .iter()
            .filter(|i| get::property(&i.body, &property).is_some())
            .collect();
        if targets.is_empty() {
            return Err(Error::UnknownProperty {
                property,
                type_name: selector,
            });
        }
        staged.push((property, PatchValue::parse(&raw), targets));
    }

    for (i, (property, _, targets)) in staged.iter().enumerate() {
        let path = pointer(property);
        for (other, _, _) in &staged[i + 1..] {
            reject_overlap(&path, &pointer(other))?;
        }
        for instance in targets {
            let existing = app.status().get(&instance.change_key()).unwrap_or_default();
            for entry in existing.iter().filter_map(StagedEntry::as_patch) {
                if matches!(entry, PatchEntry::Value { .. }) {
                    reject_overlap(&path, entry.path())?;
                }
            }
        }
    }

    for (property, value, targets) in staged {
        let path = pointer(&property);
        for instance in &targets {
            app.stage(instance, PatchEntry::replace(path.as_str(), value.clone()));
        }
        writeln!(out, "Staged {property}={value}")?;
    }
    app.save()
}

fn pointer(property: &str) -> String {
    format!("/{}", property.trim_start_matches('/'))
}

/// Fails when one path lies inside the other. Equal paths are a re-stage.
fn reject_overlap(path: &str, other: &str) -> Result<()> {
    let inside = |outer: &str, inner: &str| {
        inner
            .strip_prefix(outer)
            .is_some_and(|rest| rest.starts_with('/'))
    };
    if inside(path, other) || inside(other, path) {
        return Err(Error::OverlappingAssignment {
            property: path.to_string(),
            other: other.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "set_tests.rs"]
mod tests;
