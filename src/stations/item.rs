use ratatui::style::Color;
use serde::Deserialize;
use std::fmt;

/// Name shown when a record carries no station name at all.
pub const FALLBACK_NAME: &str = "Station";

/// Glyph used when a source has no icon override.
pub const DEFAULT_ICON: &str = "⛽";

/// Accent green of the original card (#4CAF50), also the default
/// per-source stripe color.
pub const DEFAULT_COLOR: Color = Color::Rgb(76, 175, 80);

/// Stable identity of one row: the source entity plus the entry's
/// position within that source. Survives rebuilds as long as the entry
/// keeps its slot, which is what per-row UI state (the expanded row) is
/// keyed on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemKey {
    pub source: String,
    pub index: usize,
}

impl ItemKey {
    pub fn new(source: impl Into<String>, index: usize) -> Self {
        Self {
            source: source.into(),
            index,
        }
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.source, self.index)
    }
}

/// User-selected ordering criterion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    #[default]
    Distance,
    Price,
}

impl SortMode {
    pub fn toggle(self) -> Self {
        match self {
            SortMode::Distance => SortMode::Price,
            SortMode::Price => SortMode::Distance,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortMode::Distance => "Distance",
            SortMode::Price => "Price",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortMode::Distance => write!(f, "distance"),
            SortMode::Price => write!(f, "price"),
        }
    }
}

/// One normalized, render-ready station row.
///
/// Missing numeric fields are NaN (never 0 — a free station at the
/// doorstep is a valid data point), missing coordinates are `None`.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    pub key: ItemKey,
    pub source_name: String,
    pub icon: String,
    pub color: Color,
    pub name: String,
    pub price: f64,
    pub distance_km: f64,
    pub address: Option<String>,
    pub locality: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl DisplayItem {
    /// Entity id of the source this row came from.
    pub fn source(&self) -> &str {
        &self.key.source
    }

    /// Sort key for the given mode. NaN means "no data".
    pub fn sort_value(&self, mode: SortMode) -> f64 {
        match mode {
            SortMode::Distance => self.distance_km,
            SortMode::Price => self.price,
        }
    }
}
