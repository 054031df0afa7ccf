// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Staged patch entries.
//!
//! Pending changes are stored as JSON Patch style objects. Older session
//! data may hold an entry either as a bare object or wrapped in a
//! one-element array, so every raw entry is normalized exactly once, when
//! it is read, into a [`StagedEntry`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::error::{Error, Result};

/// The kind of a staged patch operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOp {
    Add,
    Remove,
    Replace,
    Move,
    Copy,
    Test,
    /// Any operation name this crate does not know, kept verbatim.
    Other(String),
}

impl PatchOp {
    /// Returns the operation name as it appears on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            PatchOp::Add => "add",
            PatchOp::Remove => "remove",
            PatchOp::Replace => "replace",
            PatchOp::Move => "move",
            PatchOp::Copy => "copy",
            PatchOp::Test => "test",
            PatchOp::Other(s) => s,
        }
    }

    /// Returns true for operations that assign a value at their path.
    pub fn assigns_value(&self) -> bool {
        matches!(self, PatchOp::Add | PatchOp::Replace)
    }
}

impl From<&str> for PatchOp {
    fn from(s: &str) -> Self {
        match s {
            "add" => PatchOp::Add,
            "remove" => PatchOp::Remove,
            "replace" => PatchOp::Replace,
            "move" => PatchOp::Move,
            "copy" => PatchOp::Copy,
            "test" => PatchOp::Test,
            other => PatchOp::Other(other.to_string()),
        }
    }
}

impl fmt::Display for PatchOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The value carried by a non-move patch entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchValue {
    Integer(i64),
    /// Integers above `i64::MAX`.
    Unsigned(u64),
    Boolean(bool),
    Text(String),
}

impl PatchValue {
    /// Converts a JSON value, returning `None` for shapes a patch cannot carry
    /// (floats, null, arrays, objects).
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n
                .as_i64()
                .map(PatchValue::Integer)
                .or_else(|| n.as_u64().map(PatchValue::Unsigned)),
            Value::Bool(b) => Some(PatchValue::Boolean(*b)),
            Value::String(s) => Some(PatchValue::Text(s.clone())),
            _ => None,
        }
    }

    /// Parses a value typed on the command line: integer, then boolean,
    /// otherwise text.
    pub fn parse(input: &str) -> Self {
        if let Ok(n) = input.parse::<i64>() {
            return PatchValue::Integer(n);
        }
        if let Ok(n) = input.parse::<u64>() {
            return PatchValue::Unsigned(n);
        }
        match input.to_lowercase().as_str() {
            "true" => PatchValue::Boolean(true),
            "false" => PatchValue::Boolean(false),
            _ => PatchValue::Text(input.to_string()),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            PatchValue::Integer(n) => Value::from(*n),
            PatchValue::Unsigned(n) => Value::from(*n),
            PatchValue::Boolean(b) => Value::Bool(*b),
            PatchValue::Text(s) => Value::String(s.clone()),
        }
    }
}

/// Formats the value the way `status` prints it.
///
/// Booleans print capitalized (`True`, `False`). Text wrapped in double
/// quotes loses exactly one quote on each side and the empty string is
/// shown as `""`.
impl fmt::Display for PatchValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatchValue::Integer(n) => write!(f, "{n}"),
            PatchValue::Unsigned(n) => write!(f, "{n}"),
            PatchValue::Boolean(true) => f.write_str("True"),
            PatchValue::Boolean(false) => f.write_str("False"),
            PatchValue::Text(s) if s.is_empty() => f.write_str("\"\""),
            PatchValue::Text(s) if s.starts_with('"') && s.ends_with('"') => {
                let end = (s.len() - 1).max(1);
                f.write_str(&s[1..end])
            }
            PatchValue::Text(s) => f.write_str(s),
        }
    }
}

/// A single normalized patch entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchEntry {
    /// A list element move. Rendered as part of a "List Manipulation" line.
    Move { path: String, from: Option<String> },
    /// Any other operation, which always carries a value.
    Value {
        op: PatchOp,
        path: String,
        value: PatchValue,
    },
}

impl PatchEntry {
    /// Creates a `replace` entry.
    pub fn replace(path: impl Into<String>, value: PatchValue) -> Self {
        PatchEntry::Value {
            op: PatchOp::Replace,
            path: path.into(),
            value,
        }
    }

    pub fn op(&self) -> PatchOp {
        match self {
            PatchEntry::Move { .. } => PatchOp::Move,
            PatchEntry::Value { op, .. } => op.clone(),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            PatchEntry::Move { path, .. } | PatchEntry::Value { path, .. } => path,
        }
    }

    /// The path without its leading separator.
    pub fn display_path(&self) -> &str {
        let path = self.path();
        path.strip_prefix('/').unwrap_or(path)
    }

    /// For a move entry, the path with its first and last segments removed.
    ///
    /// `/a/b/c/d` yields `b/c`. Paths with two or fewer segments yield an
    /// empty label. Returns `None` for non-move entries.
    pub fn move_label(&self) -> Option<String> {
        let PatchEntry::Move { path, .. } = self else {
            return None;
        };
        let trimmed = path.strip_prefix('/').unwrap_or(path);
        let segments: Vec<&str> = trimmed.split('/').collect();
        if segments.len() <= 2 {
            return Some(String::new());
        }
        Some(segments[1..segments.len() - 1].join("/"))
    }

    /// Normalizes a raw entry that is either an object or a one-element
    /// array holding an object.
    ///
    /// The error is a human-readable reason the entry was rejected.
    pub fn normalize(raw: &Value) -> std::result::Result<Self, String> {
        match raw {
            Value::Object(map) => Self::from_object(map),
            Value::Array(items) => match items.as_slice() {
                [Value::Object(map)] => Self::from_object(map),
                [_] => Err("sequence does not hold a patch object".to_string()),
                _ => Err(format!(
                    "expected a one-element sequence, found {} elements",
                    items.len()
                )),
            },
            other => Err(format!("expected a patch object, found {}", kind_of(other))),
        }
    }

    fn from_object(map: &Map<String, Value>) -> std::result::Result<Self, String> {
        let op = map
            .get("op")
            .and_then(Value::as_str)
            .ok_or_else(|| "missing 'op'".to_string())?;
        let path = map
            .get("path")
            .and_then(Value::as_str)
            .ok_or_else(|| "missing 'path'".to_string())?
            .to_string();

        let op = PatchOp::from(op);
        if op == PatchOp::Move {
            let from = map.get("from").and_then(Value::as_str).map(str::to_string);
            return Ok(PatchEntry::Move { path, from });
        }

        let raw_value = map
            .get("value")
            .ok_or_else(|| "missing 'value'".to_string())?;
        let value = PatchValue::from_json(raw_value)
            .ok_or_else(|| format!("unsupported value type {}", kind_of(raw_value)))?;
        Ok(PatchEntry::Value { op, path, value })
    }

    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        map.insert("op".into(), Value::from(self.op().as_str()));
        match self {
            PatchEntry::Move { path, from } => {
                if let Some(from) = from {
                    map.insert("from".into(), Value::from(from.as_str()));
                }
                map.insert("path".into(), Value::from(path.as_str()));
            }
            PatchEntry::Value { path, value, .. } => {
                map.insert("path".into(), Value::from(path.as_str()));
                map.insert("value".into(), value.to_json());
            }
        }
        Value::Object(map)
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A pending-change entry as read from session data.
///
/// Malformed entries keep their raw JSON so they survive a save/load cycle
/// unchanged; nothing renders or commits them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum StagedEntry {
    Patch(PatchEntry),
    Malformed { raw: Value, reason: String },
}

impl StagedEntry {
    pub fn as_patch(&self) -> Option<&PatchEntry> {
        match self {
            StagedEntry::Patch(entry) => Some(entry),
            StagedEntry::Malformed { .. } => None,
        }
    }
}

impl From<Value> for StagedEntry {
    fn from(raw: Value) -> Self {
        match PatchEntry::normalize(&raw) {
            Ok(entry) => StagedEntry::Patch(entry),
            Err(reason) => StagedEntry::Malformed { raw, reason },
        }
    }
}

impl From<PatchEntry> for StagedEntry {
    fn from(entry: PatchEntry) -> Self {
        StagedEntry::Patch(entry)
    }
}

impl From<StagedEntry> for Value {
    fn from(entry: StagedEntry) -> Self {
        match entry {
            StagedEntry::Patch(entry) => entry.to_json(),
            StagedEntry::Malformed { raw, .. } => raw,
        }
    }
}

/// A PATCH request body assembled from staged entries.
#[derive(Debug, Clone, PartialEq)]
pub struct PatchBody {
    pub body: Value,
    /// Entries left out of the body (moves, removals, malformed data).
    pub skipped: usize,
}

/// Builds a nested PATCH body from the `add`/`replace` entries.
///
/// `/Oem/Hpe/Flag` with value `true` becomes `{"Oem":{"Hpe":{"Flag":true}}}`.
/// Later entries for the same path win.
pub fn build_patch_body(entries: &[StagedEntry]) -> Result<PatchBody> {
    let mut body = Map::new();
    let mut skipped = 0;

    for staged in entries {
        let Some(PatchEntry::Value { op, path, value }) = staged.as_patch() else {
            tracing::debug!("leaving entry out of patch body: {:?}", staged);
            skipped += 1;
            continue;
        };
        if !op.assigns_value() {
            tracing::debug!(op = %op, path = %path, "leaving non-assigning entry out of patch body");
            skipped += 1;
            continue;
        }
        insert_pointer(&mut body, path, value.to_json())?;
    }

    Ok(PatchBody {
        body: Value::Object(body),
        skipped,
    })
}

fn insert_pointer(root: &mut Map<String, Value>, path: &str, value: Value) -> Result<()> {
    let segments: Vec<String> = path
        .strip_prefix('/')
        .ok_or_else(|| Error::InvalidPath(path.to_string()))?
        .split('/')
        .map(|s| s.replace("~1", "/").replace("~0", "~"))
        .collect();
    if segments.iter().any(String::is_empty) {
        return Err(Error::InvalidPath(path.to_string()));
    }

    let (last, parents) = segments
        .split_last()
        .ok_or_else(|| Error::InvalidPath(path.to_string()))?;
    let mut node = root;
    for segment in parents {
        let child = node
            .entry(segment.clone())
            .or_insert_with(|| Value::Object(Map::new()));
        node = child.as_object_mut().ok_or_else(|| Error::ConflictingPath {
            path: path.to_string(),
        })?;
    }
    node.insert(last.clone(), value);
    Ok(())
}

#[cfg(test)]
#[path = "patch_tests.rs"]
mod tests;
