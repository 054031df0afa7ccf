// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pending-change renderer.
//!
//! Turns a [`PendingChangeSet`] into the listing printed by `status`:
//!
//! ```text
//! Current changes found:
//! Bios.v1_0_0(/redfish/v1/Systems/1/Bios/) (Currently selected)
//! 	BootMode=Uefi
//! 	Boot/Order=List Manipulation
//! ```

use std::io::Write;

use crate::changes::PendingChangeSet;
use crate::patch::{PatchEntry, StagedEntry};
use crate::selector::matches_selector;

/// Counts of what a render emitted, mostly useful to tests and debug logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderSummary {
    /// Keys written, selected or not.
    pub keys: usize,
    /// `path=value` lines written.
    pub lines: usize,
    /// Move entries collapsed into a list manipulation line.
    pub moves: usize,
    /// Malformed entries that produced no output.
    pub skipped: usize,
}

/// Writes the pending-change listing for `contents` to `out`.
///
/// Callers print `No changes found` themselves when `contents` is empty.
/// Entry shapes never cause an error; only a failing writer does.
pub fn render_pending<W: Write>(
    contents: &PendingChangeSet,
    selector: Option<&str>,
    out: &mut W,
) -> std::io::Result<RenderSummary> {
    let mut summary = RenderSummary::default();
    writeln!(out, "Current changes found:")?;

    for (key, entries) in contents.iter() {
        summary.keys += 1;
        if selector.is_some_and(|s| matches_selector(key, s)) {
            writeln!(out, "{key} (Currently selected)")?;
        } else {
            writeln!(out, "{key}")?;
        }

        let mut move_label = String::new();
        for staged in entries {
            match staged {
                StagedEntry::Malformed { reason, .. } => {
                    tracing::debug!(key, reason = %reason, "skipping malformed pending entry");
                    summary.skipped += 1;
                }
                StagedEntry::Patch(entry @ PatchEntry::Move { .. }) => {
                    tracing::debug!(key, path = entry.path(), "collapsing move operation");
                    move_label = entry.move_label().unwrap_or_default();
                    summary.moves += 1;
                }
                StagedEntry::Patch(entry @ PatchEntry::Value { value, .. }) => {
                    writeln!(out, "\t{}={}", entry.display_path(), value)?;
                    summary.lines += 1;
                }
            }
        }

        if !move_label.is_empty() {
            writeln!(out, "\t{move_label}=List Manipulation")?;
        }
    }

    Ok(summary)
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
