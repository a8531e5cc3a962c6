//! Visual primitives that can be placed in a feature group.

use geojson::{Feature, FeatureCollection};
use serde::Serialize;
use serde_json::{Map as JsonMap, Value};

use super::MapError;
use super::location::{LatLng, validate, validate_all};

/// A marker icon drawn from an icon font (Font Awesome by default).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Icon {
    /// Marker background color, one of the awesome-markers color names.
    pub color: String,
    /// Glyph name within the icon font.
    pub icon: String,
    /// Icon font prefix, e.g. `fa`.
    pub prefix: String,
}

impl Icon {
    /// A Font Awesome icon.
    pub fn fa(color: &str, icon: &str) -> Self {
        Self {
            color: color.to_string(),
            icon: icon.to_string(),
            prefix: "fa".to_string(),
        }
    }
}

/// A line through a sequence of points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolyLine {
    pub locations: Vec<LatLng>,
    pub color: String,
    pub weight: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash_array: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popup: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
}

impl PolyLine {
    /// Create a line. Fails if `locations` is empty or any point is invalid.
    pub fn new(locations: &[LatLng], color: &str) -> Result<Self, MapError> {
        Ok(Self {
            locations: validate_all(locations)?,
            color: color.to_string(),
            weight: 3,
            dash_array: None,
            popup: None,
            tooltip: None,
        })
    }

    pub fn weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    pub fn dash_array(mut self, dash: &str) -> Self {
        self.dash_array = Some(dash.to_string());
        self
    }

    pub fn popup(mut self, text: impl Into<String>) -> Self {
        self.popup = Some(text.into());
        self
    }

    pub fn tooltip(mut self, text: impl Into<String>) -> Self {
        self.tooltip = Some(text.into());
        self
    }
}

/// A circle with a fixed pixel radius.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircleMarker {
    pub location: LatLng,
    pub radius: u32,
    pub color: String,
    /// `None` leaves the circle unfilled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popup: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
}

impl CircleMarker {
    pub fn new(location: LatLng, radius: u32, color: &str) -> Result<Self, MapError> {
        Ok(Self {
            location: validate(location)?,
            radius,
            color: color.to_string(),
            fill_color: None,
            popup: None,
            tooltip: None,
        })
    }

    pub fn fill(mut self, color: &str) -> Self {
        self.fill_color = Some(color.to_string());
        self
    }

    pub fn popup(mut self, text: impl Into<String>) -> Self {
        self.popup = Some(text.into());
        self
    }

    pub fn tooltip(mut self, text: impl Into<String>) -> Self {
        self.tooltip = Some(text.into());
        self
    }
}

/// A pin marker, optionally with an icon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub location: LatLng,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popup: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
}

impl Marker {
    pub fn new(location: LatLng) -> Result<Self, MapError> {
        Ok(Self {
            location: validate(location)?,
            icon: None,
            popup: None,
            tooltip: None,
        })
    }

    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn popup(mut self, text: impl Into<String>) -> Self {
        self.popup = Some(text.into());
        self
    }

    pub fn tooltip(mut self, text: impl Into<String>) -> Self {
        self.tooltip = Some(text.into());
        self
    }
}

/// Markers that collapse into counted clusters when zoomed out.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MarkerCluster {
    pub markers: Vec<Marker>,
}

impl MarkerCluster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_child(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

/// Leaflet path options applied to every feature of a GeoJSON layer.
///
/// Field names follow Leaflet's camelCase option names.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_opacity: Option<f64>,
}

/// Property fields shown in a tooltip or popup, each with a label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldList {
    pub fields: Vec<String>,
    pub aliases: Vec<String>,
}

impl FieldList {
    /// Fields with matching aliases. Missing aliases default to the field
    /// name itself.
    pub fn new(fields: &[&str], aliases: &[&str]) -> Self {
        let fields: Vec<String> = fields.iter().map(|f| f.to_string()).collect();
        let aliases = fields
            .iter()
            .enumerate()
            .map(|(i, f)| aliases.get(i).map_or_else(|| f.clone(), |a| a.to_string()))
            .collect();
        Self { fields, aliases }
    }
}

/// A GeoJSON overlay: every feature of a collection drawn with one style.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoJson {
    pub data: FeatureCollection,
    pub style: Style,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<FieldList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popup: Option<FieldList>,
}

impl GeoJson {
    /// Wrap a set of features. Every feature must carry a geometry.
    pub fn new(features: Vec<Feature>, style: Style) -> Result<Self, MapError> {
        if let Some(index) = features.iter().position(|f| f.geometry.is_none()) {
            return Err(MapError::MissingGeometry { index });
        }
        Ok(Self {
            data: FeatureCollection {
                bbox: None,
                features,
                foreign_members: None,
            },
            style,
            tooltip: None,
            popup: None,
        })
    }

    /// Attach a tooltip. Every feature must have each listed property.
    pub fn tooltip(mut self, fields: FieldList) -> Result<Self, MapError> {
        self.check_fields(&fields)?;
        self.tooltip = Some(fields);
        Ok(self)
    }

    /// Attach a popup. Every feature must have each listed property.
    pub fn popup(mut self, fields: FieldList) -> Result<Self, MapError> {
        self.check_fields(&fields)?;
        self.popup = Some(fields);
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.data.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.features.is_empty()
    }

    fn check_fields(&self, list: &FieldList) -> Result<(), MapError> {
        let empty = JsonMap::<String, Value>::new();
        for (index, feature) in self.data.features.iter().enumerate() {
            let props = feature.properties.as_ref().unwrap_or(&empty);
            if let Some(missing) = list.fields.iter().find(|f| !props.contains_key(f.as_str())) {
                return Err(MapError::MissingField {
                    index,
                    field: missing.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Anything that can be added to a feature group.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    PolyLine(PolyLine),
    CircleMarker(CircleMarker),
    Marker(Marker),
    MarkerCluster(MarkerCluster),
    GeoJson(GeoJson),
}

impl Primitive {
    /// Number of visual elements drawn: one for simple shapes, one per
    /// member for clusters and GeoJSON layers.
    pub fn element_count(&self) -> usize {
        match self {
            Primitive::PolyLine(_) | Primitive::CircleMarker(_) | Primitive::Marker(_) => 1,
            Primitive::MarkerCluster(cluster) => cluster.len(),
            Primitive::GeoJson(layer) => layer.len(),
        }
    }
}

impl From<PolyLine> for Primitive {
    fn from(p: PolyLine) -> Self {
        Primitive::PolyLine(p)
    }
}

impl From<CircleMarker> for Primitive {
    fn from(p: CircleMarker) -> Self {
        Primitive::CircleMarker(p)
    }
}

impl From<Marker> for Primitive {
    fn from(p: Marker) -> Self {
        Primitive::Marker(p)
    }
}

impl From<MarkerCluster> for Primitive {
    fn from(p: MarkerCluster) -> Self {
        Primitive::MarkerCluster(p)
    }
}

impl From<GeoJson> for Primitive {
    fn from(p: GeoJson) -> Self {
        Primitive::GeoJson(p)
    }
}
