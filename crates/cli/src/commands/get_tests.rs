// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use crate::commands::testing::*;
use serde_json::json;
use similar_asserts::assert_eq;
use yare::parameterized;

fn get(ctx: &mut TestContext, properties: &[&str]) -> Result<String> {
    let properties: Vec<String> = properties.iter().map(|s| s.to_string()).collect();
    let mut out = Vec::new();
    run_impl(&mut ctx.app, &properties, &Credentials::default(), None, &mut out)?;
    Ok(output(out))
}

#[test]
fn test_get_named_property() {
    let mut ctx = TestContext::logged_in();
    ctx.app.select("Chassis.").unwrap();
    assert_eq!(get(&mut ctx, &["ChassisType"]).unwrap(), "ChassisType=RackMount\n");
}

#[test]
fn test_get_nested_property() {
    let mut ctx = TestContext::logged_in();
    ctx.app.select("Bios.").unwrap();
    assert_eq!(
        get(&mut ctx, &["Attributes/BootMode"]).unwrap(),
        "Attributes/BootMode=Uefi\n"
    );
}

#[test]
fn test_get_all_scalar_properties() {
    let mut ctx = TestContext::logged_in();
    ctx.app.select("ComputerSystem.").unwrap();
    assert_eq!(get(&mut ctx, &[]).unwrap(), "AssetTag=\nPowerState=On\n");
}

#[test]
fn test_get_unknown_property() {
    let mut ctx = TestContext::logged_in();
    ctx.app.select("Chassis.").unwrap();
    let err = get(&mut ctx, &["Nope"]).unwrap_err();
    assert!(matches!(err, Error::UnknownProperty { .. }));
    assert_eq!(err.to_string(), "property 'Nope' not found in Chassis.");
}

#[test]
fn test_get_without_selection() {
    let mut ctx = TestContext::logged_in();
    assert!(matches!(
        get(&mut ctx, &["ChassisType"]).unwrap_err(),
        Error::NothingSelected
    ));
}

#[parameterized(
    top_level = { "Name", Some(json!("a")) },
    nested = { "Oem/Hpe/Flag", Some(json!(true)) },
    leading_slash = { "/Name", Some(json!("a")) },
    missing = { "Oem/Hp", None },
    through_scalar = { "Name/x", None },
)]
fn test_property(name: &str, expected: Option<Value>) {
    use similar_asserts::assert_eq;
    let body = json!({ "Name": "a", "Oem": { "Hpe": { "Flag": true } } });
    assert_eq!(property(&body, name).cloned(), expected);
}

#[parameterized(
    string = { json!("On"), "On" },
    number = { json!(3), "3" },
    boolean = { json!(false), "false" },
    null = { json!(null), "null" },
)]
fn test_format_value(value: Value, expected: &str) {
    use similar_asserts::assert_eq;
    assert_eq!(format_value(&value), expected);
}
