//! Map configuration.

use serde::Serialize;

use super::LatLng;

/// A raster tile provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileSource {
    /// URL template with `{s}`, `{z}`, `{x}`, `{y}` placeholders.
    pub url: String,
    pub attribution: String,
}

impl TileSource {
    pub fn new(url: &str, attribution: &str) -> Self {
        Self {
            url: url.to_string(),
            attribution: attribution.to_string(),
        }
    }

    /// Standard OpenStreetMap tiles.
    pub fn openstreetmap() -> Self {
        Self::new(
            "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
            "&copy; OpenStreetMap contributors",
        )
    }
}

impl Default for TileSource {
    fn default() -> Self {
        Self::openstreetmap()
    }
}

/// Initial view and chrome of a map.
#[derive(Debug, Clone)]
pub struct MapConfig {
    /// Initial map center.
    pub center: LatLng,

    /// Initial zoom level.
    pub zoom_start: u8,

    /// Base layer.
    pub tiles: TileSource,

    /// Page title of the rendered HTML.
    pub title: String,

    /// Whether to add a control for toggling feature groups.
    pub layer_control: bool,
}

impl MapConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        center: LatLng,
        zoom_start: u8,
        tiles: TileSource,
        title: &str,
        layer_control: bool,
    ) -> Self {
        Self {
            center,
            zoom_start,
            tiles,
            title: title.to_string(),
            layer_control,
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: LatLng::new(50.0, 10.0), // central Europe
            zoom_start: 5,
            tiles: TileSource::default(),
            title: "Rail Atlas".to_string(),
            layer_control: true,
        }
    }
}
