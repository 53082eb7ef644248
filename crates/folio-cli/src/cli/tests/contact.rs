//! Tests for contact and contact-info.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use folio_core::i18n::Language;

#[test]
fn cli_parse_contact_info_lang() {
    match parse(&["folio", "contact-info"]) {
        CliCommand::ContactInfo { lang } => assert!(lang.is_none()),
        _ => panic!("expected ContactInfo"),
    }
    match parse(&["folio", "contact-info", "--lang", "id"]) {
        CliCommand::ContactInfo { lang } => assert_eq!(lang, Some(Language::Id)),
        _ => panic!("expected ContactInfo --lang"),
    }
}

#[test]
fn cli_parse_contact_info_rejects_unknown_lang() {
    assert!(Cli::try_parse_from(["folio", "contact-info", "--lang", "fr"]).is_err());
}

#[test]
fn cli_parse_contact() {
    match parse(&[
        "folio",
        "contact",
        "--name",
        "Ana",
        "--email",
        "ana@example.com",
        "--subject",
        "Work",
        "--message",
        "Hi",
    ]) {
        CliCommand::Contact {
            name,
            email,
            subject,
            phone,
            message,
        } => {
            assert_eq!(name, "Ana");
            assert_eq!(email, "ana@example.com");
            assert_eq!(subject, "Work");
            assert_eq!(phone, "");
            assert_eq!(message, "Hi");
        }
        _ => panic!("expected Contact"),
    }
}

#[test]
fn cli_parse_contact_requires_message() {
    assert!(Cli::try_parse_from(["folio", "contact", "--name", "A", "--email", "a@b"]).is_err());
}

#[test]
fn cli_parse_contact_requires_subject() {
    assert!(Cli::try_parse_from([
        "folio", "contact", "--name", "A", "--email", "a@b", "--message", "Hi"
    ])
    .is_err());
}
