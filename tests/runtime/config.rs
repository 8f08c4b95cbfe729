//! Runtime configuration

use propstore::{JsError, Runtime, RuntimeConfig};

#[test]
fn test_config_from_json() {
    let config =
        RuntimeConfig::from_json(r#"{"gc_threshold": 0, "preload_common_strings": false}"#)
            .unwrap();
    let rt = Runtime::with_config(config);
    assert_eq!(rt.config().gc_threshold, 0);
    assert_eq!(rt.heap().gc_threshold(), 0);
    assert!(rt.strings().is_empty());
}

#[test]
fn test_preloaded_strings() {
    let rt = Runtime::new();
    assert!(rt.strings().get("length").is_some());
    assert!(rt.strings().get("0").is_some());
}

#[test]
fn test_config_rejects_unknown_types() {
    let err = RuntimeConfig::from_json(r#"{"preload_common_strings": "yes"}"#).unwrap_err();
    assert!(matches!(err, JsError::SyntaxError { .. }));
}

#[test]
fn test_from_env_falls_back_to_defaults() {
    let config = RuntimeConfig::from_env();
    match std::env::var("GC_THRESHOLD").ok().and_then(|s| s.parse::<usize>().ok()) {
        Some(threshold) => assert_eq!(config.gc_threshold, threshold),
        None => assert_eq!(config.gc_threshold, 100),
    }
    assert!(config.preload_common_strings);
}
