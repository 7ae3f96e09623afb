//! Configuration management for exoview
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::classifier::ModelKind;
use crate::constants::{
    CONFIG_GENERATED, DEFAULT_SERVICE_URL, MAX_NUMBER_PRECISION, MAX_TIMEOUT_SECS, SERVICE_URL_ENV,
    SIDEBAR_DEFAULT_WIDTH, SIDEBAR_MAX_WIDTH, SIDEBAR_MIN_WIDTH,
};
use crate::engine::PAGE_SIZES;
use crate::records::DEFAULT_PRECISION;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "exoview.toml";
const APP_DIR: &str = "exoview";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub display: DisplayConfig,
    pub service: ServiceConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Tab shown on startup
    /// Options: "explore", "classify", "curves", "results"
    pub default_tab: String,
    /// Rows per table page (10, 20 or 50)
    pub rows_per_page: usize,
    /// Width of the chart pane next to the table, in columns
    pub sidebar_width: u16,
}

/// Display configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Decimal places for non-integral numbers
    pub number_precision: usize,
    /// Show the charts pane on the Explore tab
    pub show_charts: bool,
}

/// Prediction service configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Base URL of the prediction service
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Model preselected on the Classify tab
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_model: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write logs to a file
    pub enabled: bool,
    /// Minimum level: "error", "warn", "info", "debug" or "trace"
    pub level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_tab: "explore".to_string(),
            rows_per_page: PAGE_SIZES[0],
            sidebar_width: SIDEBAR_DEFAULT_WIDTH,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            number_precision: DEFAULT_PRECISION,
            show_charts: true,
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERVICE_URL.to_string(),
            timeout_secs: 30,
            default_model: None,
        }
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

impl ServiceConfig {
    /// The preselected model, if one is configured.
    pub fn model(&self) -> Option<ModelKind> {
        self.default_model.as_deref().and_then(ModelKind::parse)
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Option<log::LevelFilter> {
        self.level.parse().ok()
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config = match Self::find_config_file()? {
            Some(path) => Self::read_file(&path)?,
            None => Self::default(),
        };
        config.finish()
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::read_file(path)?.finish()
    }

    fn read_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))
    }

    /// Environment overrides win over the file; validation sees the result
    fn finish(mut self) -> Result<Self> {
        self.apply_env();
        self.validate().context("Invalid configuration")?;
        Ok(self)
    }

    /// Apply environment overrides
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(SERVICE_URL_ENV) {
            if !url.trim().is_empty() {
                self.service.base_url = url.trim().to_string();
            }
        }
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(APP_DIR).join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate UI settings
        if self.ui.sidebar_width < SIDEBAR_MIN_WIDTH || self.ui.sidebar_width > SIDEBAR_MAX_WIDTH {
            anyhow::bail!(
                "sidebar_width must be between {} and {} columns, got {}",
                SIDEBAR_MIN_WIDTH,
                SIDEBAR_MAX_WIDTH,
                self.ui.sidebar_width
            );
        }

        let valid_tabs = ["explore", "classify", "curves", "results"];
        if !valid_tabs.contains(&self.ui.default_tab.as_str()) {
            anyhow::bail!(
                "default_tab must be one of {}, got '{}'",
                valid_tabs.join(", "),
                self.ui.default_tab
            );
        }

        if !PAGE_SIZES.contains(&self.ui.rows_per_page) {
            anyhow::bail!(
                "rows_per_page must be one of {:?}, got {}",
                PAGE_SIZES,
                self.ui.rows_per_page
            );
        }

        // Validate display settings
        if self.display.number_precision > MAX_NUMBER_PRECISION {
            anyhow::bail!("number_precision cannot exceed {}", MAX_NUMBER_PRECISION);
        }

        // Validate service settings
        let url = self.service.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            anyhow::bail!("service base_url must start with http:// or https://, got '{}'", url);
        }
        if self.service.timeout_secs == 0 || self.service.timeout_secs > MAX_TIMEOUT_SECS {
            anyhow::bail!("timeout_secs must be between 1 and {}", MAX_TIMEOUT_SECS);
        }
        if let Some(model) = &self.service.default_model {
            if ModelKind::parse(model).is_none() {
                anyhow::bail!("Unknown default_model '{}'", model);
            }
        }

        // Validate logging settings
        if self.logging.level_filter().is_none() {
            anyhow::bail!("Invalid logging level '{}'", self.logging.level);
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# exoview Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
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
            .map(|dir| dir.join(APP_DIR))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
