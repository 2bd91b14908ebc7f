use super::*;

#[test]
fn default_naming_pads_to_three_digits() {
    let n = FrameNaming::default();
    assert_eq!(n.file_name(FrameIndex(7)), "frame_007.jpg");
    assert_eq!(n.file_name(FrameIndex(191)), "frame_191.jpg");
    assert_eq!(n.rel_path(FrameIndex(0)).unwrap(), "frames/frame_000.jpg");
    assert_eq!(n.url_path(FrameIndex(12)).unwrap(), "/frames/frame_012.jpg");
}

#[test]
fn validate_for_checks_digit_width() {
    let n = FrameNaming::default();
    n.validate_for(FrameCount::new(192).unwrap()).unwrap();
    n.validate_for(FrameCount::new(1000).unwrap()).unwrap();
    assert!(n.validate_for(FrameCount::new(1001).unwrap()).is_err());
}

#[test]
fn validate_rejects_bad_fields() {
    let bad_dir = FrameNaming {
        dir: "../frames".to_string(),
        ..FrameNaming::default()
    };
    assert!(bad_dir.validate().is_err());

    let bad_ext = FrameNaming {
        extension: ".jpg".to_string(),
        ..FrameNaming::default()
    };
    assert!(bad_ext.validate().is_err());

    let bad_digits = FrameNaming {
        digits: 0,
        ..FrameNaming::default()
    };
    assert!(bad_digits.validate().is_err());
}

#[test]
fn normalize_path_slash_normalization() {
    assert_eq!(normalize_rel_path("a/b.png").unwrap(), "a/b.png");
    assert_eq!(normalize_rel_path("a\\b.png").unwrap(), "a/b.png");
    assert_eq!(normalize_rel_path("./frames//x.jpg").unwrap(), "frames/x.jpg");
    assert!(normalize_rel_path("../x.png").is_err());
    assert!(normalize_rel_path("/abs.png").is_err());
    assert!(normalize_rel_path("./").is_err());
}

#[test]
fn partial_json_fills_defaults() {
    let n: FrameNaming = serde_json::from_str(r#"{"extension":"png"}"#).unwrap();
    assert_eq!(n.dir, "frames");
    assert_eq!(n.file_name(FrameIndex(3)), "frame_003.png");
}
