//! Interactive map model.
//!
//! A [`Map`] owns a list of [`FeatureGroup`]s, each holding visual
//! primitives (lines, markers, clusters, GeoJSON overlays). Groups are
//! appended once and never removed. The map renders to a standalone
//! Leaflet HTML page.

mod config;
mod error;
mod group;
mod location;
mod primitive;
mod render;

use std::path::Path;

use tracing::debug;

pub use config::{MapConfig, TileSource};
pub use error::MapError;
pub use group::FeatureGroup;
pub use location::{LatLng, validate, validate_all};
pub use primitive::{
    CircleMarker, FieldList, GeoJson, Icon, Marker, MarkerCluster, PolyLine, Primitive, Style,
};

/// Position of a feature group within its map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerId(pub usize);

/// A map under construction.
#[derive(Debug, Clone)]
pub struct Map {
    config: MapConfig,
    groups: Vec<FeatureGroup>,
}

impl Map {
    pub fn new(config: MapConfig) -> Self {
        Self {
            config,
            groups: Vec::new(),
        }
    }

    /// Attach a feature group. Groups keep their insertion order.
    pub fn add_child(&mut self, group: FeatureGroup) -> LayerId {
        let id = LayerId(self.groups.len());
        debug!(
            layer = id.0,
            name = %group.name,
            elements = group.element_count(),
            "attached feature group"
        );
        self.groups.push(group);
        id
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    pub fn groups(&self) -> &[FeatureGroup] {
        &self.groups
    }

    pub fn layer(&self, id: LayerId) -> Option<&FeatureGroup> {
        self.groups.get(id.0)
    }

    /// First group with the given name.
    pub fn group(&self, name: &str) -> Option<&FeatureGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Render the map as a standalone HTML page.
    pub fn render(&self) -> Result<String, MapError> {
        render::render_html(self)
    }

    /// Render the map and write it to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), MapError> {
        let html = self.render()?;
        std::fs::write(path.as_ref(), html)?;
        debug!(path = %path.as_ref().display(), "saved map");
        Ok(())
    }
}

impl Default for Map {
    fn default() -> Self {
        Self::new(MapConfig::default())
    }
}
