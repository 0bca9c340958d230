pub mod model;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub use model::{CardConfig, ConfigError, HomePosition, LoggingConfig, SourceConfig};

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("fueldash")
        .join("config.toml")
}

/// Load and validate the card configuration. A missing or malformed
/// config is fatal: the card must not render without one.
pub fn load_config() -> Result<CardConfig> {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> Result<CardConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config from {}", path.display()))?;
    let config: CardConfig =
        toml::from_str(&contents).with_context(|| "failed to parse config file")?;
    config.validate()?;
    Ok(config)
}

/// Minimal config printed as a hint when none exists yet.
pub const EXAMPLE_CONFIG: &str = "\
# ~/.config/fueldash/config.toml
snapshot_path = \"/path/to/states.json\"

[[sources]]
entity = \"sensor.fuel_stations\"
name = \"Nearby\"
";
