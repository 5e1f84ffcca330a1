use squat_counter::{CounterConfig, CounterError};
use std::fs;

#[test]
fn test_defaults() {
    let config = CounterConfig::default();
    assert_eq!(config.knee_tolerance_deg(), 5.0);
    assert_eq!(config.min_stance_ratio(), 0.5);
    assert_eq!(config.movement_divisor(), 5.0);
    assert_eq!(config.min_in_frame_likelihood(), None);
    assert!(config.validate().is_ok());
}

#[test]
fn test_builder_chain() {
    let config = CounterConfig::default()
        .with_knee_tolerance_deg(8.0)
        .with_min_stance_ratio(0.7)
        .with_movement_divisor(4.0)
        .with_min_in_frame_likelihood(Some(0.6));

    assert_eq!(config.knee_tolerance_deg(), 8.0);
    assert_eq!(config.min_stance_ratio(), 0.7);
    assert_eq!(config.movement_divisor(), 4.0);
    assert_eq!(config.min_in_frame_likelihood(), Some(0.6));
}

#[test]
fn test_from_json_partial_keeps_defaults() {
    let config = CounterConfig::from_json(r#"{ "min_stance_ratio": 0.8 }"#).unwrap();
    assert_eq!(config.min_stance_ratio(), 0.8);
    assert_eq!(config.knee_tolerance_deg(), 5.0);
    assert_eq!(config.movement_divisor(), 5.0);
}

#[test]
fn test_from_json_empty_object_is_default() {
    assert_eq!(CounterConfig::from_json("{}").unwrap(), CounterConfig::default());
}

#[test]
fn test_from_json_likelihood_floor() {
    let config = CounterConfig::from_json(r#"{ "min_in_frame_likelihood": 0.5 }"#).unwrap();
    assert_eq!(config.min_in_frame_likelihood(), Some(0.5));
}

#[test]
fn test_from_json_rejects_unknown_field() {
    let result = CounterConfig::from_json(r#"{ "min_stance": 0.8 }"#);
    assert!(matches!(result, Err(CounterError::Parse(_))));
}

#[test]
fn test_from_json_rejects_bad_divisor() {
    let result = CounterConfig::from_json(r#"{ "movement_divisor": -1.0 }"#);
    assert!(matches!(result, Err(CounterError::InvalidConfig(_))));
}

#[test]
fn test_validate_rejects_out_of_range_values() {
    assert!(CounterConfig::default().with_knee_tolerance_deg(-1.0).validate().is_err());
    assert!(CounterConfig::default().with_min_stance_ratio(f32::INFINITY).validate().is_err());
    assert!(CounterConfig::default().with_movement_divisor(f32::NAN).validate().is_err());
    assert!(CounterConfig::default().with_min_in_frame_likelihood(Some(1.5)).validate().is_err());
    assert!(CounterConfig::default().with_min_in_frame_likelihood(Some(-0.1)).validate().is_err());
}

#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!("squat-config-{}.json", std::process::id()));
    fs::write(&path, r#"{ "knee_tolerance_deg": 12.5, "movement_divisor": 4.0 }"#).unwrap();

    let config = CounterConfig::load(&path).unwrap();
    assert_eq!(config.knee_tolerance_deg(), 12.5);
    assert_eq!(config.movement_divisor(), 4.0);

    fs::remove_file(&path).ok();
}

#[test]
fn test_load_missing_file_is_io_error() {
    let result = CounterConfig::load("/nonexistent/squat/config.json");
    assert!(matches!(result, Err(CounterError::Io(_))));
}

#[test]
fn test_error_display() {
    let err = CounterError::InvalidConfig("movement_divisor must be positive, got 0".to_string());
    assert_eq!(
        err.to_string(),
        "invalid config: movement_divisor must be positive, got 0"
    );
    assert_eq!(CounterError::Parse("eof".into()).to_string(), "parse error: eof");
    assert_eq!(CounterError::Io("denied".into()).to_string(), "io error: denied");
}
