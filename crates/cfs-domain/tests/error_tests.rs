//! Unit tests for domain error types

use cfs_domain::Error;

#[test]
fn test_not_found_error() {
    let error = Error::not_found("db.json");
    match error {
        Error::NotFound { resource } => assert_eq!(resource, "db.json"),
        _ => panic!("Expected NotFound error"),
    }
}

#[test]
fn test_format_error() {
    let error = Error::format("not a JSON array");
    match error {
        Error::Format { message } => assert_eq!(message, "not a JSON array"),
        _ => panic!("Expected Format error"),
    }
}

#[test]
fn test_validation_error() {
    let error = Error::validation("query is missing '='");
    assert!(error.is_validation());
    match error {
        Error::Validation { message } => assert_eq!(message, "query is missing '='"),
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_persist_error_with_source() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let error = Error::persist_with_source("failed to replace db.json", io);
    match &error {
        Error::Persist { message, source } => {
            assert_eq!(message, "failed to replace db.json");
            assert!(source.is_some());
        }
        _ => panic!("Expected Persist error"),
    }
    assert!(!error.is_validation());
}

#[test]
fn test_persist_error_is_distinct_from_not_found() {
    let persist = Error::persist("disk full");
    assert!(!matches!(persist, Error::NotFound { .. }));
    assert_eq!(format!("{persist}"), "Persist error: disk full");
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
    let error: Error = io.into();
    assert!(matches!(error, Error::Io { .. }));
}

#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: Error = json_err.into();
    assert!(matches!(error, Error::Json { .. }));
}

#[test]
fn test_config_error() {
    let error = Error::config("server port must not be 0");
    match error {
        Error::Config { message } => assert_eq!(message, "server port must not be 0"),
        _ => panic!("Expected Config error"),
    }
}
