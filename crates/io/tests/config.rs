// Integration tests for config file loading
use quotefix_core::Variant;
use quotefix_core::error::QuotefixError;
use quotefix_io::ConfigLayer;
use std::fs;
use std::path::PathBuf;

#[test]
fn test_implicit_config_file_loaded() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("quotefix.json"),
        r#"{ "root": "content", "variant": "baseline", "extensions": ["tsx", "jsx"] }"#,
    )
    .unwrap();

    let layer = tokio_test::block_on(ConfigLayer::load(None, dir.path())).unwrap();

    assert_eq!(layer.root, Some(PathBuf::from("content")));
    assert_eq!(layer.variant, Some(Variant::Baseline));
    assert_eq!(
        layer.extensions,
        Some(vec!["tsx".to_string(), "jsx".to_string()])
    );
}

#[test]
fn test_missing_implicit_config_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let layer = tokio_test::block_on(ConfigLayer::load(None, dir.path())).unwrap();
    assert_eq!(layer, ConfigLayer::default());
}

#[test]
fn test_missing_explicit_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("custom.json");

    let err = tokio_test::block_on(ConfigLayer::load(Some(&missing), dir.path())).unwrap_err();
    assert!(matches!(err, QuotefixError::InvalidConfig(_)));
}

#[test]
fn test_malformed_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("quotefix.json"), "{ not json").unwrap();

    let err = tokio_test::block_on(ConfigLayer::load(None, dir.path())).unwrap_err();
    assert!(matches!(err, QuotefixError::Config(_)));
}
