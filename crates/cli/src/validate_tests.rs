// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use crate::commands::testing::*;
use crate::config::Config;
use crate::rest::Method;
use yare::parameterized;

const STATUS_MESSAGE: &str = "Please login and make setting changes before using status command.";

fn creds(user: Option<&str>, password: Option<&str>) -> Credentials {
    Credentials::new(user.map(String::from), password.map(String::from))
}

#[test]
fn test_existing_session_is_kept() {
    let mut ctx = TestContext::logged_in();
    validate_session(
        &mut ctx.app,
        &Credentials::default(),
        None,
        SessionPolicy::InlineLogin,
    )
    .unwrap();
    assert_eq!(ctx.requests_with(Method::Post).len(), 1);
}

#[test]
fn test_existing_session_never_overwrites_credentials() {
    let mut ctx = TestContext::logged_in();
    validate_session(
        &mut ctx.app,
        &creds(Some("other"), Some("other-pw")),
        None,
        SessionPolicy::Require(STATUS_MESSAGE),
    )
    .unwrap();
    let client = ctx.app.current_client().unwrap();
    assert_eq!(client.username(), Some("admin"));
    assert_eq!(client.password(), Some("password"));
}

#[test]
fn test_reloaded_session_gets_password_from_credentials() {
    let mut ctx = TestContext::logged_in();
    let client = ctx.app.current_client_mut().unwrap();
    *client = {
        let mut fresh = crate::session::Client::new(BASE_URL);
        fresh.set_username("admin");
        fresh
    };
    validate_session(
        &mut ctx.app,
        &creds(Some("admin"), Some("secret")),
        None,
        SessionPolicy::Require(STATUS_MESSAGE),
    )
    .unwrap();
    assert_eq!(ctx.app.current_client().unwrap().password(), Some("secret"));
}

#[test]
fn test_required_session_fails_with_message() {
    let mut ctx = TestContext::new();
    let err = validate_session(
        &mut ctx.app,
        &creds(Some("admin"), Some("pw")),
        None,
        SessionPolicy::Require(STATUS_MESSAGE),
    )
    .unwrap_err();
    assert!(matches!(err, Error::NoCurrentSession(_)));
    assert_eq!(err.to_string(), STATUS_MESSAGE);
    assert!(ctx.transport.requests().is_empty());
}

#[test]
fn test_inline_login_with_explicit_values() {
    let mut ctx = TestContext::new();
    validate_session(
        &mut ctx.app,
        &creds(Some("admin"), Some("pw")),
        Some(BASE_URL),
        SessionPolicy::InlineLogin,
    )
    .unwrap();
    assert_eq!(ctx.app.current_client().unwrap().url, BASE_URL);
}

#[test]
fn test_inline_login_falls_back_to_config() {
    let mut ctx = TestContext::with_config(Config {
        url: Some(BASE_URL.into()),
        username: Some("cfg-user".into()),
        password: Some("cfg-pw".into()),
        ..Config::default()
    });
    validate_session(
        &mut ctx.app,
        &creds(None, Some("explicit-pw")),
        None,
        SessionPolicy::InlineLogin,
    )
    .unwrap();

    let body = ctx.requests_with(Method::Post)[0].body.clone().unwrap();
    assert_eq!(body["UserName"], "cfg-user");
    assert_eq!(body["Password"], "explicit-pw");
}

#[test]
fn test_explicit_url_keeps_config_credentials() {
    let ctx = TestContext::with_config(Config {
        url: Some("https://other.test".into()),
        username: Some("cfg-user".into()),
        password: Some("cfg-pw".into()),
        ..Config::default()
    });
    let (url, user, password) =
        login_input(&ctx.app, &creds(None, None), Some(BASE_URL)).unwrap();
    assert_eq!(
        (url.as_str(), user.as_str(), password.as_str()),
        (BASE_URL, "cfg-user", "cfg-pw")
    );
}

#[test]
fn test_inline_login_without_url_must_login() {
    let mut ctx = TestContext::new();
    let err = validate_session(
        &mut ctx.app,
        &creds(Some("admin"), Some("pw")),
        None,
        SessionPolicy::InlineLogin,
    )
    .unwrap_err();
    assert!(matches!(err, Error::MustLogin));
}

#[test]
fn test_inline_login_without_password_fails() {
    let mut ctx = TestContext::new();
    let err = validate_session(
        &mut ctx.app,
        &creds(Some("admin"), None),
        Some(BASE_URL),
        SessionPolicy::InlineLogin,
    )
    .unwrap_err();
    assert!(matches!(err, Error::FieldRequired { field: "Password" }));
}

#[test]
fn test_reject_arguments() {
    assert!(reject_arguments("status", &[]).is_ok());
    let err = reject_arguments("disableilofunctionality", &["x".to_string()]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid command line: disableilofunctionality command takes no arguments."
    );
}

#[parameterized(
    simple = { "BootMode=Uefi", "BootMode", "Uefi" },
    empty_value = { "AssetTag=", "AssetTag", "" },
    equals_in_value = { "Name=a=b", "Name", "a=b" },
    spaced_property = { " AssetTag =x", "AssetTag", "x" },
)]
fn test_parse_assignment(input: &str, property: &str, value: &str) {
    assert_eq!(
        parse_assignment(input).unwrap(),
        (property.to_string(), value.to_string())
    );
}

#[parameterized(
    no_equals = { "BootMode" },
    empty_property = { "=Uefi" },
)]
fn test_parse_assignment_rejects(input: &str) {
    assert!(matches!(
        parse_assignment(input),
        Err(Error::InvalidAssignment(_))
    ));
}
