// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Case-insensitive type selector matching.
//!
//! Resource types are selected by prefix: `Manager.` matches
//! `#Manager.v1_5_1.Manager`, and `bios` matches a pending-change key such
//! as `Bios.v1_0_0(/redfish/v1/Systems/1/Bios/)`.

/// Returns true if `name` starts with `selector`, ignoring case.
///
/// An empty selector never matches.
pub fn matches_selector(name: &str, selector: &str) -> bool {
    !selector.is_empty() && name.to_lowercase().starts_with(&selector.to_lowercase())
}

/// Returns true if an `@odata.type` value matches a type filter.
///
/// The leading `#` of the odata type is ignored, and so is one on the filter.
pub fn matches_type(odata_type: &str, filter: &str) -> bool {
    let odata_type = odata_type.strip_prefix('#').unwrap_or(odata_type);
    let filter = filter.strip_prefix('#').unwrap_or(filter);
    matches_selector(odata_type, filter)
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod tests;
