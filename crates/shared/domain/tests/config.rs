use furever_domain::config::{AppConfig, FixtureConfig, LoggingConfig, StorageConfig};
use serde_json::json;
use std::path::PathBuf;

#[test]
fn config_defaults_are_sane() {
    let storage = StorageConfig::default();
    assert_eq!(storage.data_dir, Some(PathBuf::from(".furever")));
    assert!(!storage.compression);

    let fixtures = FixtureConfig::default();
    assert_eq!(fixtures.products, PathBuf::from("fixtures/pet-products.json"));
    assert_eq!(fixtures.pets, PathBuf::from("fixtures/adoptable-pets.json"));

    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "warn");
    assert!(logging.console);
    assert!(logging.directory.is_none());
}

#[test]
fn app_config_deserializes_partial_sections() {
    let raw = json!({
        "storage": { "data_dir": "/tmp/furever", "compression": true },
        "logging": { "level": "debug" }
    });

    let cfg: AppConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.storage.data_dir, Some(PathBuf::from("/tmp/furever")));
    assert!(cfg.storage.compression);
    assert_eq!(cfg.logging.level, "debug");
    assert_eq!(cfg.logging.max_files, 7);
    assert_eq!(cfg.fixtures.pets, PathBuf::from("fixtures/adoptable-pets.json"));
}

#[test]
fn deref_mut_detaches_clones() {
    let original = AppConfig::default();
    let mut edited = original.clone();
    edited.storage.data_dir = None;

    assert!(original.storage.data_dir.is_some());
    assert!(edited.storage.data_dir.is_none());
}
