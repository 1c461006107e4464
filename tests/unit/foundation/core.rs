use super::*;

#[test]
fn progress_clamps_into_unit_interval() {
    assert_eq!(Progress::new(-0.5).get(), 0.0);
    assert_eq!(Progress::new(0.25).get(), 0.25);
    assert_eq!(Progress::new(7.0).get(), 1.0);
    assert_eq!(Progress::new(f64::NAN), Progress::START);
    assert_eq!(Progress::new(f64::INFINITY), Progress::END);
}

#[test]
fn progress_deserializes_clamped() {
    let p: Progress = serde_json::from_str("1.5").unwrap();
    assert_eq!(p, Progress::END);
    assert_eq!(serde_json::to_string(&Progress::new(0.5)).unwrap(), "0.5");
}

#[test]
fn frame_pair_json_uses_origin_and_size() {
    let pair = FramePair {
        start: Rect::new(38.0, 38.0, 182.0, 82.0),
        end: Rect::new(258.0, 338.0, 282.0, 442.0),
    };
    let v = serde_json::to_value(pair).unwrap();
    assert_eq!(v["start"]["x"], 38.0);
    assert_eq!(v["start"]["width"], 144.0);
    assert_eq!(v["end"]["height"], 104.0);

    let back: FramePair = serde_json::from_value(v).unwrap();
    assert_eq!(back, pair);
}

#[test]
fn bounds_validation_accepts_degenerate_rejects_non_finite() {
    assert!(validate_bounds(Size::new(0.0, 0.0)).is_ok());
    assert!(validate_bounds(Size::new(320.0, 480.0)).is_ok());
    assert!(validate_bounds(Size::new(f64::NAN, 10.0)).is_err());
    assert!(validate_bounds(Size::new(10.0, -1.0)).is_err());
}
