use pretty_assertions::assert_eq;

use form_bridge::{BridgeConfig, BridgeError, Schedules};

#[test]
fn reads_both_schedule_strings() {
    let s = Schedules::from_body(r#"{"initial_schedule":"15 treatment days","optimized_schedule":"9 treatment days"}"#)
        .unwrap();
    assert_eq!(s.initial_schedule, "15 treatment days");
    assert_eq!(s.optimized_schedule, "9 treatment days");
}

#[test]
fn null_field_renders_blank() {
    let s = Schedules::from_body(r#"{"initial_schedule":null,"optimized_schedule":"Y"}"#).unwrap();
    assert_eq!(s.initial_schedule, "");
    assert_eq!(s.optimized_schedule, "Y");
}

#[test]
fn non_string_fields_render_as_json_text() {
    let s = Schedules::from_body(r#"{"initial_schedule":20,"optimized_schedule":{"days":[1,2]}}"#)
        .unwrap();
    assert_eq!(s.initial_schedule, "20");
    assert_eq!(s.optimized_schedule, r#"{"days":[1,2]}"#);
}

#[test]
fn rejects_non_json_and_non_objects() {
    assert!(matches!(
        Schedules::from_body("not json"),
        Err(BridgeError::InvalidJson(_))
    ));
    assert!(matches!(Schedules::from_body(""), Err(BridgeError::InvalidJson(_))));
    assert_eq!(Schedules::from_body(r#"["X","Y"]"#), Err(BridgeError::NotAnObject));
    assert_eq!(Schedules::from_body(r#""X""#), Err(BridgeError::NotAnObject));
}

#[test]
fn endpoint_joins_base_and_path() {
    let cfg = BridgeConfig::new("http://127.0.0.1:5000", "/api/treatment").unwrap();
    assert_eq!(
        cfg.endpoint().unwrap().as_str(),
        "http://127.0.0.1:5000/api/treatment"
    );
}

#[test]
fn absolute_path_replaces_base_path() {
    let cfg = BridgeConfig::new("https://clinic.example/app/", "/api/treatment").unwrap();
    assert_eq!(
        cfg.endpoint().unwrap().as_str(),
        "https://clinic.example/api/treatment"
    );
}

#[test]
fn invalid_base_url_is_a_config_error() {
    let err = BridgeConfig::new("not a url", "/api/treatment").unwrap_err();
    assert!(matches!(err, BridgeError::Config(_)), "err={err:?}");
}

#[test]
fn api_path_that_cannot_join_is_a_config_error() {
    let err = BridgeConfig::new("http://127.0.0.1:5000", "http://[::1").unwrap_err();
    assert!(matches!(err, BridgeError::Config(_)), "err={err:?}");
}
