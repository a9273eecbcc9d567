use cashflow_config::{Config, ConfigManager};
use tempfile::tempdir;

#[test]
fn default_config_matches_documented_defaults() {
    let cfg = Config::default();

    assert!(!cfg.currency.is_empty());
    assert!(!cfg.locale.is_empty());
    assert_eq!(cfg.opening_balance_default, 0.0);
    assert_eq!(cfg.projection_months, 12);
    assert_eq!(cfg.group_separator, ',');
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));

    let mut cfg = Config::default();
    cfg.opening_balance_default = 250000.0;
    cfg.projection_months = 6;

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded.opening_balance_default, 250000.0);
    assert_eq!(loaded.projection_months, 6);
}

#[test]
fn missing_config_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("absent.json"));

    let loaded = manager.load().expect("load config");
    assert_eq!(loaded.projection_months, 12);
}

#[test]
fn partial_config_file_fills_missing_fields_from_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"locale":"en-US","currency":"USD"}"#).expect("write config");

    let loaded = ConfigManager::new(path).load().expect("load config");
    assert_eq!(loaded.currency, "USD");
    assert_eq!(loaded.projection_months, 12);
    assert_eq!(loaded.opening_balance_default, 0.0);
}
