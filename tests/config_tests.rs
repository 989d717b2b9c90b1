use rtimeclock::config::{Config, migrate};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn test_missing_or_empty_file_yields_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rtimeclock.conf");

    assert_eq!(Config::load_from(&path).unwrap(), Config::default());

    fs::write(&path, "  \n").unwrap();
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn test_partial_file_keeps_defaults_for_absent_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rtimeclock.conf");
    fs::write(&path, "api_base_url: http://localhost:3000\nfallback_delay_ms: 0\n").unwrap();

    let cfg = Config::load_from(&path).unwrap();

    assert_eq!(cfg.api_base_url, "http://localhost:3000");
    assert_eq!(cfg.fallback_delay(), Duration::ZERO);
    assert_eq!(cfg.employees_endpoint, "users");
    assert_eq!(cfg.notice_timeout(), Duration::from_secs(5));
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rtimeclock.conf");
    fs::write(&path, "fallback_delay_ms: [not, a, number]\n").unwrap();

    assert!(Config::load_from(&path).is_err());
}

#[test]
fn test_init_refuses_to_overwrite_without_force() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("rtimeclock.conf");

    Config::init_at(&path, false).unwrap();
    assert!(path.exists());
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());

    fs::write(&path, "log_level: debug\n").unwrap();
    assert!(Config::init_at(&path, false).is_err());
    assert_eq!(Config::load_from(&path).unwrap().log_level, "debug");

    Config::init_at(&path, true).unwrap();
    assert_eq!(Config::load_from(&path).unwrap().log_level, "warn");
}

#[test]
fn test_missing_keys_and_migration() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rtimeclock.conf");
    fs::write(&path, "api_base_url: http://localhost:3000\nlog_level: info\n").unwrap();

    let missing = migrate::missing_keys(&path).unwrap();
    assert_eq!(
        missing,
        vec![
            "employees_endpoint",
            "events_endpoint",
            "fallback_delay_ms",
            "notice_timeout_secs"
        ]
    );

    let added = migrate::fill_missing_keys(&path).unwrap();
    assert_eq!(added, missing);
    assert!(migrate::missing_keys(&path).unwrap().is_empty());

    // existing values survive the migration
    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg.api_base_url, "http://localhost:3000");
    assert_eq!(cfg.log_level, "info");

    assert!(migrate::fill_missing_keys(&path).unwrap().is_empty());
}
