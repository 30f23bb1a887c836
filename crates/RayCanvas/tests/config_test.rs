use ray_canvas::{ConfigError, RayConfig};

#[test]
fn test_defaults() {
    let config = RayConfig::default();
    assert_eq!(config.divisions, 14);
    assert_eq!(config.ray_count, 10);
    assert_eq!(config.style.line_width, 1.0);
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_json_fills_defaults() {
    let config = RayConfig::from_json(r#"{ "divisions": 8 }"#).unwrap();
    assert_eq!(config.divisions, 8);
    assert_eq!(config.ray_count, 10);
    assert_eq!(config.style.line_width, 1.0);
}

#[test]
fn test_rejects_invalid_values() {
    assert!(matches!(
        RayConfig::from_json(r#"{ "divisions": 0 }"#),
        Err(ConfigError::ZeroDivisions)
    ));
    assert!(matches!(
        RayConfig::from_json(r#"{ "ray_count": 0 }"#),
        Err(ConfigError::ZeroRayCount)
    ));
    assert!(matches!(
        RayConfig::from_json("not json"),
        Err(ConfigError::Parse(_))
    ));
}
