// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use super::*;
use clap::error::ErrorKind;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("ilorest").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_parse_status_with_credentials() {
    let cli = parse(&["status", "-u", "admin", "-p", "pw"]);
    match cli.command {
        Command::Status { creds } => {
            assert_eq!(creds.user.as_deref(), Some("admin"));
            assert_eq!(creds.password.as_deref(), Some("pw"));
            assert!(!creds.enc);
        }
        _ => panic!("expected status"),
    }
}

#[test]
fn test_parse_status_encoded_credentials() {
    let cli = parse(&["status", "-u", "YWRtaW4=", "-p", "cHc=", "-e"]);
    let Command::Status { creds } = cli.command else {
        panic!("expected status");
    };
    let decoded = creds.credentials().unwrap();
    assert_eq!(decoded.user.as_deref(), Some("admin"));
    assert_eq!(decoded.password.as_deref(), Some("pw"));
}

#[test]
fn test_parse_disable_with_login_args() {
    let cli = parse(&[
        "disableilofunctionality",
        "--url",
        "https://10.0.0.5",
        "-u",
        "admin",
        "-p",
        "pw",
    ]);
    let Command::Disableilofunctionality { args, login } = cli.command else {
        panic!("expected disableilofunctionality");
    };
    assert!(args.is_empty());
    assert_eq!(login.url.as_deref(), Some("https://10.0.0.5"));
    assert_eq!(login.creds.user.as_deref(), Some("admin"));
}

#[test]
fn test_parse_disable_collects_stray_arguments() {
    let cli = parse(&["disableilofunctionality", "now"]);
    let Command::Disableilofunctionality { args, .. } = cli.command else {
        panic!("expected disableilofunctionality");
    };
    assert_eq!(args, vec!["now"]);
}

#[test]
fn test_parse_global_debug_after_subcommand() {
    let cli = parse(&["status", "--debug"]);
    assert!(cli.debug);
}

#[test]
fn test_parse_set_requires_assignment() {
    let err = Cli::try_parse_from(["ilorest", "set"]).err().unwrap();
    assert_eq!(
        err.kind(),
        ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    );
}

#[test]
fn test_parse_status_rejects_positional() {
    let err = Cli::try_parse_from(["ilorest", "status", "extra"]).err().unwrap();
    assert_eq!(err.kind(), ErrorKind::UnknownArgument);
}

#[test]
fn test_parse_help_is_not_a_failure_kind() {
    let err = Cli::try_parse_from(["ilorest", "status", "--help"]).err().unwrap();
    assert_eq!(err.kind(), ErrorKind::DisplayHelp);
}

#[test]
fn test_parse_login_positional_url() {
    let cli = parse(&["login", "https://ilo", "-u", "a", "-p", "b"]);
    let Command::Login { url, creds } = cli.command else {
        panic!("expected login");
    };
    assert_eq!(url.as_deref(), Some("https://ilo"));
    assert!(creds.user.is_some());
}
