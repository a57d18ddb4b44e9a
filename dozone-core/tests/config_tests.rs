//! Zone document loading: file reads, malformed input, reserved names.

use assert_fs::prelude::*;
use dozone_core::{Config, ConfigError, ZoneDocument};
use predicates::prelude::predicate;
use rstest::rstest;

// ---------------------------------------------------------------------------
// 1. Reading from disk
// ---------------------------------------------------------------------------

#[test]
fn read_document_from_file() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("zones.yaml");
    file.write_str("token: abc\ndefaults:\n  - A @ 1.2.3.4\n---\nexample.com:\n")
        .expect("write");
    file.assert(predicate::path::is_file());

    let doc = ZoneDocument::read(file.path()).expect("read");
    let config = Config::resolve(doc, None).expect("resolve");
    assert_eq!(config.token(), "abc");
    assert_eq!(config.defaults(), ["A @ 1.2.3.4".to_string()]);
    assert_eq!(config.domain_names().collect::<Vec<_>>(), vec!["example.com"]);
}

#[test]
fn read_missing_file_reports_path() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let missing = dir.path().join("nope.yaml");
    let err = ZoneDocument::read(&missing).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }), "got: {err}");
    assert!(err.to_string().contains("nope.yaml"));
}

// ---------------------------------------------------------------------------
// 2. Malformed documents
// ---------------------------------------------------------------------------

#[rstest]
#[case::single_document("token: abc\n")]
#[case::three_documents("token: abc\n---\nexample.com:\n---\nextra: 1\n")]
fn wrong_document_count(#[case] input: &str) {
    let err = ZoneDocument::parse(input).unwrap_err();
    assert!(matches!(err, ConfigError::DocumentCount { .. }), "got: {err}");
}

#[test]
fn corrupt_yaml_is_parse_error() {
    let err = ZoneDocument::parse(": : corrupt : yaml : !!!\n  - broken: [unclosed").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)), "got: {err}");
}

#[test]
fn domains_document_must_be_a_mapping() {
    let err = ZoneDocument::parse("token: abc\n---\n- example.com\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)), "got: {err}");
}

#[test]
fn domain_option_is_reserved() {
    let err = ZoneDocument::parse("token: abc\ndomain: evil.com\n---\nexample.com:\n").unwrap_err();
    assert!(matches!(err, ConfigError::ReservedOption(ref name) if name == "domain"));
}

// ---------------------------------------------------------------------------
// 3. Empty sections
// ---------------------------------------------------------------------------

#[test]
fn null_documents_are_empty() {
    let doc = ZoneDocument::parse("~\n---\n~\n").expect("parse");
    assert!(doc.options.defaults.is_empty());
    assert!(doc.domains.is_empty());
    assert!(matches!(Config::resolve(doc, None), Err(ConfigError::MissingToken)));
}

#[test]
fn null_defaults_are_empty() {
    let doc = ZoneDocument::parse("token: abc\ndefaults:\n---\nexample.com:\n").expect("parse");
    assert!(doc.options.defaults.is_empty());
}
