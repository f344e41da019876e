//! Configuration loading tests

use std::io::Write;

use botify_core::config::ServiceConfig;
use botify_core::experiment::{Split, CONTEXTUAL, ULTRA_POWER};
use botify_core::Error;

#[test]
fn test_full_config_from_json() {
    let config = ServiceConfig::from_json_str(
        r#"{
            "experiments": [
                {"name": "ULTRA_POWER", "split": "HALF_HALF"},
                {"name": "AA", "split": "HALF_HALF"}
            ],
            "active_experiment": "AA",
            "recommender": {"threshold": 0.6, "p_rand": 0.1, "top_tracks_limit": 50}
        }"#,
    )
    .unwrap();

    assert_eq!(config.active_experiment, "AA");
    assert_eq!(config.recommender.top_tracks_limit, 50);
    assert!((config.recommender.threshold - 0.6).abs() < f64::EPSILON);

    let registry = config.registry().unwrap();
    assert_eq!(registry.names(), vec!["AA", ULTRA_POWER]);
}

#[test]
fn test_partial_recommender_section_keeps_defaults() {
    let config = ServiceConfig::from_json_str(r#"{"recommender": {"p_rand": 0.0}}"#).unwrap();

    assert!((config.recommender.p_rand).abs() < f64::EPSILON);
    assert!((config.recommender.threshold - 0.8).abs() < f64::EPSILON);
    assert_eq!(config.recommender.top_tracks_limit, 100);
}

#[test]
fn test_default_experiments() {
    let registry = ServiceConfig::default().registry().unwrap();
    assert_eq!(registry.names(), vec![CONTEXTUAL, ULTRA_POWER]);
    assert_eq!(registry.get(CONTEXTUAL).unwrap().split(), Split::HalfHalf);
}

#[test]
fn test_wide_split_fails_when_building_registry() {
    let config = ServiceConfig::from_json_str(
        r#"{"experiments": [{"name": "ULTRA_POWER", "split": "SEVEN_WAY"}]}"#,
    )
    .unwrap();

    assert!(matches!(
        config.registry(),
        Err(Error::InvalidConfiguration(_))
    ));
}

#[test]
fn test_unknown_split_is_decode_error() {
    let result = ServiceConfig::from_json_str(
        r#"{"experiments": [{"name": "X", "split": "THREE_WAY"}], "active_experiment": "X"}"#,
    );
    assert!(matches!(result, Err(Error::Decode(_))));
}

#[test]
fn test_out_of_range_p_rand_rejected() {
    let result = ServiceConfig::from_json_str(r#"{"recommender": {"p_rand": 5.0}}"#);
    assert!(matches!(result, Err(Error::InvalidConfiguration(_))));
}

#[test]
fn test_from_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"recommender": {{"threshold": 0.9}}}}"#).unwrap();

    let config = ServiceConfig::from_path(file.path()).unwrap();
    assert!((config.recommender.threshold - 0.9).abs() < f64::EPSILON);
}

#[test]
fn test_from_missing_path_is_io_error() {
    let result = ServiceConfig::from_path("/nonexistent/botify/config.json");
    assert!(matches!(result, Err(Error::Io(_))));
}
