//! Deep links into external map applications.
//!
//! Pure string formatting over a coordinate pair, mirroring the targets
//! the original card offered (Google / Apple / Waze plus the generic
//! `geo:` scheme). No links exist without both coordinates.

use anyhow::{Context, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapLinks {
    pub google: String,
    pub apple: String,
    pub waze: String,
    pub geo: String,
}

pub fn resolve(latitude: Option<f64>, longitude: Option<f64>) -> Option<MapLinks> {
    let (lat, lon) = (latitude?, longitude?);
    Some(MapLinks {
        google: format!("https://www.google.com/maps?q={lat},{lon}"),
        apple: format!("https://maps.apple.com/?q={lat},{lon}"),
        waze: format!("https://waze.com/ul?ll={lat},{lon}&navigate=yes"),
        geo: format!("geo:{lat},{lon}?q={lat},{lon}"),
    })
}

/// Hand the URL to the platform's default handler.
pub fn open(url: &str) -> Result<()> {
    webbrowser::open(url).with_context(|| format!("failed to open {}", url))
}
