use crate::error::{EatsError, Result};
use crate::kitchen::DEFAULT_ORDERS_FILE;
use crate::monitor::{DetectMode, MonitorOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// The base config directory name under ~/.config/
const CONFIG_DIR_NAME: &str = "eats";

/// The filename for the configuration file.
const CONFIG_FILENAME: &str = "config.toml";

/// Refresh cadence of the kitchen's live order monitor.
const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 5;

/// Longest gap between two checks for the Enter key.
const DEFAULT_POLL_SLICE_MS: u64 = 250;

// ============================================================================
// Configuration
// ============================================================================

/// User configuration for the kitchen order tools.
///
/// Missing fields in a config file fall back to their defaults, so a
/// partial file is valid.
///
/// # Example
///
/// ```toml
/// orders_file = "kitchen_orders.txt"
/// refresh_interval_secs = 5
/// poll_slice_ms = 250
/// detect = "count"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Kitchen order file, relative to the working directory unless absolute.
    #[serde(default = "default_orders_file")]
    pub orders_file: PathBuf,

    /// Seconds between two reads of the order file in the live monitor.
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,

    /// Milliseconds between two cancellation checks while waiting.
    #[serde(default = "default_poll_slice_ms")]
    pub poll_slice_ms: u64,

    /// How the live monitor decides the order list changed.
    #[serde(default)]
    pub detect: DetectMode,
}

fn default_orders_file() -> PathBuf {
    PathBuf::from(DEFAULT_ORDERS_FILE)
}

fn default_refresh_interval_secs() -> u64 {
    DEFAULT_REFRESH_INTERVAL_SECS
}

fn default_poll_slice_ms() -> u64 {
    DEFAULT_POLL_SLICE_MS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            orders_file: default_orders_file(),
            refresh_interval_secs: DEFAULT_REFRESH_INTERVAL_SECS,
            poll_slice_ms: DEFAULT_POLL_SLICE_MS,
            detect: DetectMode::default(),
        }
    }
}

impl Config {
    /// Monitor settings derived from this configuration.
    pub fn monitor_options(&self, title: &str) -> MonitorOptions {
        MonitorOptions {
            refresh_interval: Duration::from_secs(self.refresh_interval_secs),
            poll_slice: Duration::from_millis(self.poll_slice_ms),
            title: title.to_string(),
        }
    }
}

// ============================================================================
// Config Validation
// ============================================================================

use std::error::Error;
use std::fmt;

/// Error type for configuration validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A zero refresh interval would poll the file in a busy loop.
    ZeroRefreshInterval,
    /// A zero slice would never wait between cancellation checks.
    ZeroPollSlice,
    /// The order file path is empty.
    EmptyOrdersFile,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroRefreshInterval => {
                write!(f, "`refresh_interval_secs` must be at least 1")
            }
            ConfigError::ZeroPollSlice => write!(f, "`poll_slice_ms` must be at least 1"),
            ConfigError::EmptyOrdersFile => write!(f, "`orders_file` must not be empty"),
        }
    }
}

impl Error for ConfigError {}

/// Validate a configuration for logical consistency.
pub fn validate_config(config: &Config) -> std::result::Result<(), ConfigError> {
    if config.refresh_interval_secs == 0 {
        return Err(ConfigError::ZeroRefreshInterval);
    }
    if config.poll_slice_ms == 0 {
        return Err(ConfigError::ZeroPollSlice);
    }
    if config.orders_file.as_os_str().is_empty() {
        return Err(ConfigError::EmptyOrdersFile);
    }
    Ok(())
}

// ============================================================================
// Config File Management
// ============================================================================

/// Get the eats config directory path (~/.config/eats/).
///
/// Does not create the directory.
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| EatsError::Config("Could not determine home directory".to_string()))?;
    Ok(home.join(".config").join(CONFIG_DIR_NAME))
}

/// Get the default config file path (~/.config/eats/config.toml).
pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILENAME))
}

/// Load and validate the configuration at `path`.
///
/// If the file doesn't exist it is created with default values and
/// comments explaining each option.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        save_config(path, &Config::default())?;
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content).map_err(|e| {
        EatsError::Config(format!(
            "Failed to parse config file at {}: {}",
            path.display(),
            e
        ))
    })?;

    validate_config(&config).map_err(|e| EatsError::Config(e.to_string()))?;
    Ok(config)
}

/// Write `config` to `path` with explanatory comments, creating parent
/// directories as needed. Overwrites any user-added comments.
pub fn save_config(path: &Path, config: &Config) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, generate_config_with_comments(config))?;
    Ok(())
}

/// Generate config file content with explanatory comments.
fn generate_config_with_comments(config: &Config) -> String {
    format!(
        r#"# Eats & Treats kitchen configuration

# Kitchen order file shared by the order screens and the live monitor.
# Relative paths are resolved against the working directory.
orders_file = {}

# Live monitor: seconds between two reads of the order file.
refresh_interval_secs = {}

# Live monitor: milliseconds between two checks for the Enter key.
# Smaller values make leaving the monitor more responsive.
poll_slice_ms = {}

# Live monitor change detection:
# - "count": redraw only when the number of orders changes
# - "content": redraw when any order changes (status, items, ...)
detect = "{}"
"#,
        toml_string(&config.orders_file.to_string_lossy()),
        config.refresh_interval_secs,
        config.poll_slice_ms,
        config.detect
    )
}

/// Quote a value as a TOML basic string.
fn toml_string(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}
