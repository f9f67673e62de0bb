//! Configuration management for MarketDesk
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_GENERATED, MAX_PAGE_SIZE, SAVE_DELAY_MAX_MS, SIDEBAR_DEFAULT_WIDTH, SIDEBAR_MAX_WIDTH, SIDEBAR_MIN_WIDTH,
};
use crate::routes::Route;
use crate::table::{CellFormat, DEFAULT_PAGE_SIZE};
use crate::utils::datetime;
use anyhow::{Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub display: DisplayConfig,
    pub forms: FormsConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Route to open on startup, e.g. "/" or "/orders"
    pub default_route: String,
    /// Rows per table page
    pub page_size: usize,
    /// Sidebar width in columns
    pub sidebar_width: u16,
    /// Enable mouse support
    pub mouse_enabled: bool,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// strftime format for date cells
    pub date_format: String,
    /// Prefix for currency cells
    pub currency_symbol: String,
    /// Maximum characters shown for long text in the detail view
    pub truncate_width: usize,
}

/// Form configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormsConfig {
    /// Simulated save latency in milliseconds
    pub save_delay_ms: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write logs to a file in the data directory
    pub enabled: bool,
    /// One of "error", "warn", "info", "debug", "trace"
    pub level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_route: "/".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            sidebar_width: SIDEBAR_DEFAULT_WIDTH,
            mouse_enabled: false,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: datetime::ISO_DATE_FORMAT.to_string(),
            currency_symbol: "$".to_string(),
            truncate_width: 60,
        }
    }
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self { save_delay_ms: 500 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl DisplayConfig {
    pub fn cell_format(&self) -> CellFormat {
        CellFormat {
            currency_symbol: self.currency_symbol.clone(),
            date_format: self.date_format.clone(),
        }
    }
}

impl FormsConfig {
    pub fn save_delay(&self) -> Duration {
        Duration::from_millis(self.save_delay_ms)
    }
}

impl LoggingConfig {
    /// Parsed level; unknown names fall back to `Info`
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.level).unwrap_or(LevelFilter::Info)
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("marketdesk.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("marketdesk").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ui.sidebar_width < SIDEBAR_MIN_WIDTH || self.ui.sidebar_width > SIDEBAR_MAX_WIDTH {
            anyhow::bail!(
                "sidebar_width must be between {} and {} columns, got {}",
                SIDEBAR_MIN_WIDTH,
                SIDEBAR_MAX_WIDTH,
                self.ui.sidebar_width
            );
        }

        if self.ui.page_size == 0 || self.ui.page_size > MAX_PAGE_SIZE {
            anyhow::bail!("page_size must be between 1 and {}, got {}", MAX_PAGE_SIZE, self.ui.page_size);
        }

        if let Err(e) = Route::parse(&self.ui.default_route) {
            anyhow::bail!("Invalid default_route '{}': {}", self.ui.default_route, e);
        }

        // chrono only reports bad specifiers while formatting
        let sample = chrono::NaiveDate::from_ymd_opt(2025, 1, 1).context("sample date out of range")?;
        let mut rendered = String::new();
        if write!(rendered, "{}", sample.format(&self.display.date_format)).is_err() {
            anyhow::bail!("Invalid date_format '{}'", self.display.date_format);
        }

        if self.display.currency_symbol.chars().count() > 3 {
            anyhow::bail!("currency_symbol must be at most 3 characters");
        }

        if self.forms.save_delay_ms > SAVE_DELAY_MAX_MS {
            anyhow::bail!("save_delay_ms cannot exceed {}", SAVE_DELAY_MAX_MS);
        }

        if LevelFilter::from_str(&self.logging.level).is_err() {
            anyhow::bail!("Invalid logging level '{}'", self.logging.level);
        }

        Ok(())
    }

    /// Start route from `[ui] default_route`
    pub fn start_route(&self) -> Route {
        Route::parse(&self.ui.default_route).unwrap_or_default()
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# MarketDesk Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format(datetime::ISO_DATE_FORMAT)
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("marketdesk"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
