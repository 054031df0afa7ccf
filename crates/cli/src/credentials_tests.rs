// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;

struct Reverse;

impl CredentialDecoder for Reverse {
    fn decode(&self, raw: &str) -> Result<String> {
        Ok(raw.chars().rev().collect())
    }
}

#[test]
fn test_base64_decoder() {
    assert_eq!(Base64Decoder.decode("YWRtaW4=").unwrap(), "admin");
    assert_eq!(Base64Decoder.decode(" cGFzc3dvcmQ=\n").unwrap(), "password");
}

#[test]
fn test_base64_decoder_rejects_garbage() {
    let err = Base64Decoder.decode("not base64!").unwrap_err();
    assert!(matches!(err, Error::InvalidCredentials(_)));
}

#[test]
fn test_base64_decoder_rejects_non_utf8() {
    // 0xff 0xfe
    let err = Base64Decoder.decode("//4=").unwrap_err();
    assert!(matches!(err, Error::InvalidCredentials(_)));
}

#[test]
fn test_decoded_applies_when_encoded_and_complete() {
    let creds = Credentials::new(Some("nimda".into()), Some("terces".into()))
        .decoded(true, &Reverse)
        .unwrap();
    assert_eq!(creds.user.as_deref(), Some("admin"));
    assert_eq!(creds.password.as_deref(), Some("secret"));
}

#[test]
fn test_decoded_is_noop_without_flag() {
    let creds = Credentials::new(Some("nimda".into()), Some("terces".into()));
    assert_eq!(creds.clone().decoded(false, &Reverse).unwrap(), creds);
}

#[test]
fn test_decoded_is_noop_with_only_user() {
    let creds = Credentials::new(Some("nimda".into()), None);
    assert_eq!(creds.clone().decoded(true, &Reverse).unwrap(), creds);
}
