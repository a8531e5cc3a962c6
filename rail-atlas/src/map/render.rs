//! HTML rendering of a map.

use askama::Template;
use serde::Serialize;

use super::{FeatureGroup, LatLng, Map, MapError, TileSource};

/// Standalone Leaflet page.
#[derive(Template)]
#[template(path = "map.html")]
pub struct MapTemplate {
    pub title: String,
    /// JSON map document, already safe to embed in a `<script>` block.
    pub document: String,
}

/// Everything the page script needs to rebuild the map.
#[derive(Serialize)]
struct MapDocument<'a> {
    center: LatLng,
    zoom_start: u8,
    tiles: &'a TileSource,
    layer_control: bool,
    groups: &'a [FeatureGroup],
}

pub(super) fn render_html(map: &Map) -> Result<String, MapError> {
    let config = map.config();
    let document = MapDocument {
        center: config.center,
        zoom_start: config.zoom_start,
        tiles: &config.tiles,
        layer_control: config.layer_control,
        groups: map.groups(),
    };
    let template = MapTemplate {
        title: config.title.clone(),
        document: script_safe_json(&document)?,
    };
    Ok(template.render()?)
}

/// Serialize to JSON that cannot close or comment out the surrounding
/// script element. Every `<` becomes `\u003c`, which is the same string
/// to a JSON parser.
fn script_safe_json<T: Serialize>(value: &T) -> Result<String, MapError> {
    Ok(serde_json::to_string(value)?.replace('<', "\\u003c"))
}
