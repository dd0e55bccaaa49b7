use super::*;

#[test]
fn defaults_match_component_defaults() {
    let s = BorderStyle::default();
    assert_eq!(s.border_radius, 12.0);
    assert_eq!(s.color.to_hex(), "#7df9ff");
    assert_eq!(s.speed, 0.5);
    assert_eq!(s.chaos, 0.5);
    assert_eq!(s.stroke_width, 1.0);
}

#[test]
fn partial_json_fills_defaults() {
    let s = BorderStyle::from_json_str(r##"{"borderRadius": 8, "color": "#ff0000"}"##).unwrap();
    assert_eq!(s.border_radius, 8.0);
    assert_eq!(s.color, Rgba8::rgb(255, 0, 0));
    assert_eq!(s.speed, 0.5);
    assert_eq!(s.stroke_width, 1.0);

    let empty = BorderStyle::from_json_str("{}").unwrap();
    assert_eq!(empty, BorderStyle::default());
}

#[test]
fn out_of_range_values_are_clamped_not_rejected() {
    let s = BorderStyle::from_json_str(
        r#"{"borderRadius": -3, "chaos": -1, "speed": -2, "strokeWidth": 0}"#,
    )
    .unwrap();
    assert_eq!(s.border_radius, 0.0);
    assert_eq!(s.chaos, 0.0);
    assert_eq!(s.speed, 0.0);
    assert_eq!(s.stroke_width, 1.0);

    let nan = BorderStyle {
        chaos: f64::NAN,
        stroke_width: f64::NAN,
        ..BorderStyle::default()
    }
    .sanitized();
    assert_eq!(nan.chaos, 0.0);
    assert_eq!(nan.stroke_width, 1.0);
}

#[test]
fn malformed_json_is_serde_error() {
    let err = BorderStyle::from_json_str("{not json").unwrap_err();
    assert!(matches!(err, BorderError::Serde(_)));

    let err = BorderStyle::from_json_str(r##"{"color": "#12"}"##).unwrap_err();
    assert!(matches!(err, BorderError::Serde(_)));
}

#[test]
fn reader_and_str_agree() {
    let json = r#"{"chaos": 0.25, "speed": 2.0}"#;
    let a = BorderStyle::from_json_str(json).unwrap();
    let b = BorderStyle::from_json_reader(json.as_bytes()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn serializes_camel_case() {
    let json = serde_json::to_value(BorderStyle::default()).unwrap();
    assert_eq!(json["borderRadius"], 12.0);
    assert_eq!(json["strokeWidth"], 1.0);
    assert_eq!(json["color"], "#7df9ff");
}
