use super::*;

#[test]
fn default_is_the_stock_hero() {
    let cfg = HeroConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.frame_count.get(), 192);
    assert_eq!(cfg.surface, SurfaceSize::new(1920, 1080).unwrap());
    assert_eq!(cfg.container_height_vh, 5.0);
    assert_eq!(cfg.beats.len(), 4);
    assert!(cfg.scroll_hint.is_some());
    assert_eq!(cfg.naming.dir, "frames");
}

#[test]
fn default_round_trips_through_json() {
    let cfg = HeroConfig::default();
    let json = serde_json::to_string_pretty(&cfg).unwrap();
    let back = HeroConfig::from_reader(json.as_bytes()).unwrap();
    assert_eq!(back, cfg);
    back.validate().unwrap();
}

#[test]
fn empty_object_takes_defaults() {
    let cfg = HeroConfig::from_reader("{}".as_bytes()).unwrap();
    assert_eq!(cfg, HeroConfig::default());
}

#[test]
fn partial_overrides_keep_other_defaults() {
    let json = r#"{
        "frame_count": 24,
        "surface": { "width": 640, "height": 360 },
        "spring": { "stiffness": 200 },
        "scroll_hint": null,
        "loader": { "threads": 2 }
    }"#;
    let cfg = HeroConfig::from_reader(json.as_bytes()).unwrap();
    cfg.validate().unwrap();
    assert_eq!(cfg.frame_count.get(), 24);
    assert_eq!(cfg.surface.width, 640);
    assert_eq!(cfg.spring.stiffness, 200.0);
    assert_eq!(cfg.spring.damping, 30.0);
    assert!(cfg.scroll_hint.is_none());
    assert_eq!(cfg.overlay().opacities(0.0).len(), 4);
    assert_eq!(cfg.loader.threads, Some(2));
}

#[test]
fn zero_frame_count_fails_to_parse() {
    let err = HeroConfig::from_reader(r#"{"frame_count":0}"#.as_bytes()).unwrap_err();
    assert!(matches!(err, HeroError::Config(_)));
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = HeroConfig::from_reader("{ not json".as_bytes()).unwrap_err();
    assert!(err.to_string().contains("parse hero JSON"));
}

#[test]
fn missing_file_is_a_config_error() {
    let err = HeroConfig::from_path("/definitely/not/here/hero.json").unwrap_err();
    assert!(matches!(err, HeroError::Config(_)));
}

#[test]
fn invalid_values_fail_validation() {
    let mut cfg = HeroConfig::default();
    cfg.surface.width = 0;
    assert!(cfg.validate().is_err());

    let mut cfg = HeroConfig::default();
    cfg.container_height_vh = 1.0;
    assert!(cfg.validate().is_err());

    let mut cfg = HeroConfig::default();
    cfg.spring.mass = 0.0;
    assert!(cfg.validate().is_err());

    let mut cfg = HeroConfig::default();
    cfg.naming.digits = 2;
    assert!(cfg.validate().is_err());

    let mut cfg = HeroConfig::default();
    cfg.naming.dir = "../outside".to_string();
    assert!(cfg.validate().is_err());

    let mut cfg = HeroConfig::default();
    cfg.beats[0].id = "aero".to_string();
    assert!(cfg.validate().is_err());

    let mut cfg = HeroConfig::default();
    cfg.loader.threads = Some(0);
    assert!(cfg.validate().is_err());
}
