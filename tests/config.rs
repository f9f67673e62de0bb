use log::LevelFilter;
use marketdesk::config::Config;
use marketdesk::model::EntityKind;
use marketdesk::routes::Route;
use marketdesk::utils::datetime;
use std::time::Duration;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.ui.default_route, "/");
    assert_eq!(config.ui.page_size, 10);
    assert!(!config.ui.mouse_enabled);
    assert_eq!(config.display.currency_symbol, "$");
    assert_eq!(config.forms.save_delay(), Duration::from_millis(500));
    assert!(!config.logging.enabled);
    assert_eq!(config.start_route(), Route::Dashboard);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Invalid sidebar width should fail
    config.ui.sidebar_width = 10;
    assert!(config.validate().is_err());

    // Reset and test page size bounds
    config = Config::default();
    config.ui.page_size = 0;
    assert!(config.validate().is_err());

    config = Config::default();
    config.ui.default_route = "/spaceships".to_string();
    assert!(config.validate().is_err());

    config = Config::default();
    config.forms.save_delay_ms = 60_000;
    assert!(config.validate().is_err());

    config = Config::default();
    config.logging.level = "loud".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("default_route = \"/\""));
    assert!(toml_str.contains("save_delay_ms = 500"));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[ui]
sidebar_width = 35
default_route = "/orders"

[logging]
enabled = true
level = "debug"
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.ui.sidebar_width, 35);
    assert_eq!(config.start_route(), Route::List(EntityKind::Order));
    assert!(config.logging.enabled);
    assert_eq!(config.logging.level_filter(), LevelFilter::Debug);

    // Check that unspecified values use defaults
    assert_eq!(config.ui.page_size, 10);
    assert_eq!(config.display.date_format, datetime::ISO_DATE_FORMAT);
    assert_eq!(config.forms.save_delay_ms, 500);
}

#[test]
fn test_empty_config_deserialization() {
    // Test that empty TOML uses all defaults
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.ui.default_route, default_config.ui.default_route);
    assert_eq!(config.ui.page_size, default_config.ui.page_size);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
    assert_eq!(config.display.date_format, default_config.display.date_format);
}

#[test]
fn test_display_settings_drive_cell_format() {
    let config: Config = toml::from_str("[display]\ncurrency_symbol = \"€\"\ndate_format = \"%d/%m/%Y\"\n").unwrap();
    let format = config.display.cell_format();
    assert_eq!(format.currency_symbol, "€");
    assert_eq!(format.date_format, "%d/%m/%Y");
}

#[test]
fn test_generate_config_creates_directory() {
    use std::fs;

    // Create a temporary path that doesn't exist
    let temp_dir = std::env::temp_dir().join("marketdesk_test_config");
    let config_path = temp_dir.join("nested").join("config.toml");

    if temp_dir.exists() {
        let _ = fs::remove_dir_all(&temp_dir);
    }
    assert!(!temp_dir.exists());

    // Generate config should create the directory structure
    let result = Config::generate_default_config(&config_path);
    assert!(result.is_ok());
    assert!(config_path.exists());

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("# MarketDesk Configuration File"));
    assert!(content.contains("default_route = \"/\""));

    // The generated file loads back and validates
    let loaded = Config::load_from_file(&config_path).unwrap();
    assert_eq!(loaded.ui.page_size, Config::default().ui.page_size);

    let _ = fs::remove_dir_all(&temp_dir);
}
