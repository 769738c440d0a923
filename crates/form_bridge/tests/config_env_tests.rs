use std::env;

use pretty_assertions::assert_eq;

use form_bridge::{BridgeConfig, BridgeError};

// One test owns the process environment so nothing races on the variables.
#[test]
fn from_env_defaults_and_overrides() {
    env::remove_var("TREATMENT_API_BASE_URL");
    env::remove_var("TREATMENT_API_PATH");
    let cfg = BridgeConfig::from_env().unwrap();
    assert_eq!(cfg.base_url.as_str(), "http://127.0.0.1:5000/");
    assert_eq!(cfg.api_path, "/api/treatment");
    assert_eq!(
        cfg.endpoint().unwrap().as_str(),
        "http://127.0.0.1:5000/api/treatment"
    );

    env::set_var("TREATMENT_API_BASE_URL", "https://clinic.example:8443");
    env::set_var("TREATMENT_API_PATH", "/v2/treatment");
    let cfg = BridgeConfig::from_env().unwrap();
    assert_eq!(
        cfg.endpoint().unwrap().as_str(),
        "https://clinic.example:8443/v2/treatment"
    );

    env::set_var("TREATMENT_API_BASE_URL", "clinic.example");
    let err = BridgeConfig::from_env().unwrap_err();
    assert!(matches!(err, BridgeError::Config(_)), "err={err:?}");

    env::set_var("TREATMENT_API_BASE_URL", "http://127.0.0.1:5000");
    env::set_var("TREATMENT_API_PATH", "http://[::1");
    let err = BridgeConfig::from_env().unwrap_err();
    assert!(matches!(err, BridgeError::Config(_)), "err={err:?}");

    env::remove_var("TREATMENT_API_BASE_URL");
    env::remove_var("TREATMENT_API_PATH");
}
