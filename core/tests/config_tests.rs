//! Config file handling

use std::time::Duration;
use stitch_core::*;
use tempfile::TempDir;

#[test]
fn test_defaults() {
    let config = AppConfig::default();

    assert_eq!(config.timings.connect_delay(), Duration::from_secs(3));
    assert_eq!(config.timings.duration_tick(), Duration::from_secs(1));
    assert_eq!(config.timings.dismiss_delay(), Duration::from_secs(1));
    assert_eq!(config.timings.auto_reply_delay(), Duration::from_secs(2));
    assert_eq!(config.timings.search_delay(), Duration::from_millis(300));
    assert!(config.data.rng_seed.is_none());
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = AppConfig::load(dir.path()).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().join("nested");

    let mut config = AppConfig::default();
    config.timings.connect_delay_ms = 500;
    config.data.rng_seed = Some(11);
    config.save(&data_dir).unwrap();

    assert!(data_dir.join("config.json").exists());
    assert_eq!(AppConfig::load(&data_dir).unwrap(), config);
}

#[test]
fn test_partial_file_fills_in_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{ "timings": { "search_delay_ms": 50 } }"#,
    )
    .unwrap();

    let config = AppConfig::load(dir.path()).unwrap();
    assert_eq!(config.timings.search_delay_ms, 50);
    assert_eq!(config.timings.connect_delay_ms, 3000);
    assert_eq!(config.data, DataConfig::default());
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), "{ not json").unwrap();

    assert!(matches!(AppConfig::load(dir.path()), Err(Error::Json(_))));
}

#[test]
fn test_zero_tick_is_clamped() {
    let timings = TimingConfig {
        duration_tick_ms: 0,
        ..Default::default()
    };
    assert_eq!(timings.duration_tick(), Duration::from_millis(1));
}

#[test]
fn test_build_store_honours_seed() {
    let config = AppConfig {
        data: DataConfig { rng_seed: Some(5) },
        ..Default::default()
    };

    let favorites = |store: &DataStore| -> Vec<bool> {
        store.get_contacts().iter().map(|c| c.is_favorite).collect()
    };
    assert_eq!(favorites(&config.build_store()), favorites(&DataStore::with_seed(5)));
}
