//! Tests for error types

use botify_core::Error;

#[test]
fn test_invalid_configuration_error() {
    let error = Error::InvalidConfiguration("split too wide".to_string());
    let error_str = format!("{error}");
    assert!(error_str.contains("Invalid configuration"));
    assert!(error_str.contains("split too wide"));
}

#[test]
fn test_unknown_experiment_error() {
    let error = Error::UnknownExperiment("NOPE".to_string());
    let error_str = format!("{error}");
    assert!(error_str.contains("Unknown experiment: NOPE"));
    assert!(error_str.contains("Register it"));
}

#[test]
fn test_store_unavailable_error() {
    let error = Error::StoreUnavailable("connection refused".to_string());
    let error_str = format!("{error}");
    assert!(error_str.contains("Store unavailable"));
    assert!(error_str.contains("connection refused"));
}

#[test]
fn test_decode_error_conversion() {
    let json_error = serde_json::from_str::<Vec<u64>>("{").unwrap_err();
    let error: Error = json_error.into();
    assert!(format!("{error}").contains("Decode error"));
}

#[test]
fn test_io_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error: Error = io_error.into();
    let error_str = format!("{error}");
    assert!(error_str.contains("IO error"));
}

#[test]
fn test_error_debug() {
    let error = Error::StoreUnavailable("down".to_string());
    let debug_str = format!("{error:?}");
    assert!(debug_str.contains("StoreUnavailable"));
}

#[test]
fn test_result_type_alias_error() {
    fn returns_error() -> botify_core::Result<u64> {
        Err(Error::UnknownExperiment("NOPE".to_string()))
    }

    assert!(returns_error().is_err());
}
