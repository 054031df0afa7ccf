// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `disableilofunctionality`: turns off iLO network access through the
//! vendor manager action.

use serde_json::{json, Value};
use std::io::{self, Write};

use crate::app::App;
use crate::credentials::Credentials;
use crate::error::{Error, Result};
use crate::typedefs::TypeDefs;
use crate::validate::{reject_arguments, validate_session, SessionPolicy};

use super::{get, open_app};

const COMMAND: &str = "disableilofunctionality";

/// The POST that disables iLO functionality.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DisableRequest {
    pub path: String,
    pub body: Value,
}

pub fn run(args: &[String], creds: Credentials, url: Option<&str>) -> Result<()> {
    reject_arguments(COMMAND, args)?;
    let mut app = open_app()?;
    run_impl(&mut app, args, &creds, url, &mut io::stdout().lock())
}

/// Internal implementation that accepts the app and writer for testing.
pub(crate) fn run_impl<W: Write>(
    app: &mut App,
    args: &[String],
    creds: &Credentials,
    url: Option<&str>,
    out: &mut W,
) -> Result<()> {
    reject_arguments(COMMAND, args)?;
    validate_session(app, creds, url, SessionPolicy::InlineLogin)?;

    let chassis = app.select("Chassis.")?;
    let chassis_type = chassis
        .iter()
        .find_map(|c| get::property(&c.body, "ChassisType"))
        .and_then(Value::as_str)
        .unwrap_or_default();
    if chassis_type.eq_ignore_ascii_case("blade") {
        return Err(Error::IncompatibleServerType(format!(
            "{COMMAND} command is not available on blade server types."
        )));
    }

    let manager = app
        .filter("Manager.")?
        .into_iter()
        .next()
        .ok_or_else(|| Error::NoContentsFound("Manager. not found.".to_string()))?;
    let request = disable_request(&manager.path, &manager.body, app.typedefs());
    tracing::debug!(path = %request.path, body = %request.body, "disabling iLO functionality");

    writeln!(
        out,
        "Disabling iLO functionality. iLO will be unavailable on the logged in server \
         until it is re-enabled manually."
    )?;
    let response = app.post_handler(&request.path, &request.body)?;
    if response.status == 200 {
        writeln!(out, "[{}] The operation completed successfully.", response.status)?;
    } else {
        writeln!(out, "[{}] No message returned by iLO.", response.status)?;
    }
    Ok(())
}

/// Finds the iLOFunctionality action in a manager body.
///
/// Without one, the request goes to the manager itself with an explicit
/// `Target`.
pub(crate) fn disable_request(manager_path: &str, manager: &Value, defs: &TypeDefs) -> DisableRequest {
    let actions = manager
        .get("Oem")
        .and_then(|o| o.get(&defs.oem))
        .and_then(|o| o.get("Actions"))
        .and_then(Value::as_object);

    let found = actions.and_then(|actions| {
        actions
            .iter()
            .find(|(name, _)| name.contains("iLOFunctionality"))
            .and_then(|(name, descriptor)| {
                let target = descriptor.get("target").and_then(Value::as_str)?;
                let action = if defs.is_gen10 {
                    name.rsplit('#').next().unwrap_or(name)
                } else {
                    "iLOFunctionality"
                };
                Some(DisableRequest {
                    path: target.to_string(),
                    body: json!({ "Action": action }),
                })
            })
    });

    found.unwrap_or_else(|| {
        tracing::debug!("no iLOFunctionality action on {}, posting to manager", manager_path);
        DisableRequest {
            path: manager_path.to_string(),
            body: json!({ "Action": "iLOFunctionality", "Target": "/Oem/Hp" }),
        }
    })
}

#[cfg(test)]
#[path = "disable_ilo_tests.rs"]
mod tests;
