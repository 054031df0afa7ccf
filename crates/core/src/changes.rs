// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The ordered set of pending (staged, uncommitted) changes.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::patch::{PatchEntry, StagedEntry};

/// Staged changes grouped by resource-type key, in insertion order.
///
/// Serializes as a JSON object mapping each key to an array of raw patch
/// entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PendingChangeSet {
    groups: IndexMap<String, Vec<StagedEntry>>,
}

impl PendingChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a change set from its JSON form, normalizing every entry.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of keys (resource groups) with staged entries.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[StagedEntry])> {
        self.groups
            .iter()
            .map(|(key, entries)| (key.as_str(), entries.as_slice()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&[StagedEntry]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    /// Stages an entry under `key`.
    ///
    /// A value entry replaces an earlier value entry for the same path, so
    /// setting a property twice leaves one pending change.
    pub fn stage(&mut self, key: &str, entry: PatchEntry) {
        let entries = self.groups.entry(key.to_string()).or_default();
        if let PatchEntry::Value { path, .. } = &entry {
            let existing = entries.iter_mut().find(|staged| {
                matches!(staged.as_patch(), Some(PatchEntry::Value { path: p, .. }) if p == path)
            });
            if let Some(existing) = existing {
                *existing = StagedEntry::Patch(entry);
                return;
            }
        }
        entries.push(StagedEntry::Patch(entry));
    }

    /// Removes a whole group, keeping the order of the remaining keys.
    pub fn remove(&mut self, key: &str) -> Option<Vec<StagedEntry>> {
        self.groups.shift_remove(key)
    }
}

#[cfg(test)]
#[path = "changes_tests.rs"]
mod tests;
