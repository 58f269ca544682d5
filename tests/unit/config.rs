//! Configuration tests.

use nexu::Config;

#[test]
fn defaults_are_sane() {
    let config = Config::default();
    assert_ne!(config.rng_seed, 0);
    assert!(!config.trace_cache_hits);
}

#[test]
fn deserializes_from_json() {
    let config: Config =
        serde_json::from_str(r#"{"RngSeed": 77, "TraceCacheHits": true}"#).unwrap();
    assert_eq!(config.rng_seed, 77);
    assert!(config.trace_cache_hits);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let config: Config = serde_json::from_str(r#"{"RngSeed": 9}"#).unwrap();
    assert_eq!(config.rng_seed, 9);
    assert!(!config.trace_cache_hits);
}
