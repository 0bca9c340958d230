//! Configuration data model.
//!
//! All structs derive `Deserialize` for TOML loading. Every field except
//! the source list has a sensible default so a minimal config works out
//! of the box; the source list itself is mandatory and checked by
//! [`CardConfig::validate`].

use crate::stations::SortMode;
use ratatui::style::Color;
use serde::{Deserialize, Deserializer};
use std::path::PathBuf;
use thiserror::Error;

/// Configuration problems that are fatal at setup time. Field-level data
/// problems inside a snapshot are not errors and degrade per-field
/// instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no station sources configured; add at least one [[sources]] entry")]
    NoSources,
    #[error("source #{index} has an empty entity id")]
    EmptyEntity { index: usize },
}

/// Root card configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CardConfig {
    #[serde(default)]
    pub sources: Vec<SourceConfig>,
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: PathBuf,
    /// Visible list rows before the card scrolls.
    #[serde(default = "default_max_height")]
    pub max_height: u16,
    #[serde(default)]
    pub initial_sort: SortMode,
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
    /// Reference location for the great-circle distance fallback.
    #[serde(default)]
    pub home: Option<HomePosition>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            snapshot_path: default_snapshot_path(),
            max_height: default_max_height(),
            initial_sort: SortMode::default(),
            poll_interval_secs: default_poll_interval(),
            home: None,
            logging: LoggingConfig::default(),
        }
    }
}

impl CardConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sources.is_empty() {
            return Err(ConfigError::NoSources);
        }
        for (index, source) in self.sources.iter().enumerate() {
            if source.entity.trim().is_empty() {
                return Err(ConfigError::EmptyEntity { index });
            }
        }
        Ok(())
    }
}

/// One configured data source with its display overrides.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// Entity id in the snapshot (e.g. `"sensor.fuel_stations_madrid"`).
    pub entity: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "deserialize_color_optional")]
    pub color: Option<Color>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct HomePosition {
    pub latitude: f64,
    pub longitude: f64,
}

/// Diagnostic log settings. The TUI owns the terminal, so logs go to a
/// file.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_file")]
    pub file: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            file: default_log_file(),
            level: default_log_level(),
        }
    }
}

fn default_snapshot_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("fueldash")
        .join("states.json")
}

fn default_max_height() -> u16 {
    12
}

fn default_poll_interval() -> u64 {
    2
}

fn default_log_file() -> String {
    "~/.local/share/fueldash/fueldash.log".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn deserialize_color_optional<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(color_str) => parse_color(&color_str)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid color: {}", color_str))),
        None => Ok(None),
    }
}

/// Parse a color string: a named terminal color or `#rrggbb` / `#rgb`
/// hex, as the dashboard config uses.
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_lowercase();

    match s.as_str() {
        "black" => return Some(Color::Black),
        "red" => return Some(Color::Red),
        "green" => return Some(Color::Green),
        "yellow" => return Some(Color::Yellow),
        "blue" => return Some(Color::Blue),
        "magenta" => return Some(Color::Magenta),
        "cyan" => return Some(Color::Cyan),
        "gray" | "grey" => return Some(Color::Gray),
        "darkgray" | "darkgrey" => return Some(Color::DarkGray),
        "white" => return Some(Color::White),
        "orange" => return Some(Color::Rgb(255, 165, 0)),
        _ => {}
    }

    let hex = s.strip_prefix('#')?;
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        3 => {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}
