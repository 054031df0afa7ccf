// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Server generation facts detected from the service root.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Generation-specific details that change resource layout.
///
/// Gen10 iLO (iLO 5) publishes vendor data under `Oem.Hpe` and names its
/// actions `#HpeiLO.<Action>`; earlier generations use `Oem.Hp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDefs {
    pub is_gen10: bool,
    /// Key under `Oem` holding vendor data.
    pub oem: String,
}

impl Default for TypeDefs {
    fn default() -> Self {
        TypeDefs {
            is_gen10: true,
            oem: "Hpe".to_string(),
        }
    }
}

impl TypeDefs {
    /// Detects the generation from the `/redfish/v1/` body.
    pub fn detect(root: &Value) -> Self {
        let oem = root.get("Oem");
        if oem.and_then(|o| o.get("Hpe")).is_some() {
            TypeDefs::default()
        } else if oem.and_then(|o| o.get("Hp")).is_some() {
            TypeDefs {
                is_gen10: false,
                oem: "Hp".to_string(),
            }
        } else {
            tracing::debug!("service root has no Hpe/Hp Oem section, assuming Gen10");
            TypeDefs::default()
        }
    }
}

#[cfg(test)]
#[path = "typedefs_tests.rs"]
mod tests;
