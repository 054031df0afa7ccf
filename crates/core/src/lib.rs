// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ilo-core: Shared data model for the ilorest CLI.
//!
//! This crate holds the pieces of the tool that do not talk to a server:
//! staged patch entries and their normalization, the ordered set of pending
//! changes, type selector matching, PATCH body construction and the
//! pending-change renderer used by `ilorest status`.

pub mod changes;
pub mod error;
pub mod patch;
pub mod render;
pub mod selector;

pub use changes::PendingChangeSet;
pub use error::{Error, Result};
pub use patch::{build_patch_body, PatchEntry, PatchOp, PatchValue, StagedEntry};
pub use render::{render_pending, RenderSummary};
pub use selector::{matches_selector, matches_type};
