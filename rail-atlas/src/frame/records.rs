//! Typed rows.

use geojson::{Feature, Value};
use serde_json::Value as JsonValue;

use super::FrameError;
use crate::map::LatLng;

/// A record that can be read from one row of a [`GeoFrame`](super::GeoFrame).
pub trait FromFeature: Sized {
    /// Read the record from `feature`, found at position `row`.
    fn from_feature(row: usize, feature: &Feature) -> Result<Self, FrameError>;
}

/// One precomputed best route between two cities.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRecord {
    /// Rank of the route among the alternatives.
    pub order: u64,
    pub start_city: String,
    pub end_city: String,
    /// Points along the route, starting at `start_city`.
    pub path: Vec<LatLng>,
}

impl RouteRecord {
    /// First point of the route, if it has any.
    pub fn start(&self) -> Option<LatLng> {
        self.path.first().copied()
    }
}

impl FromFeature for RouteRecord {
    fn from_feature(row: usize, feature: &Feature) -> Result<Self, FrameError> {
        let order = whole_number(property(row, feature, "order")?)
            .ok_or(FrameError::WrongType {
                row,
                name: "order",
                expected: "a non-negative integer",
            })?;

        let path = match geometry(row, feature)? {
            Value::LineString(line) => line
                .iter()
                .map(|p| LatLng::from_position(p).ok_or(FrameError::MalformedPosition { row }))
                .collect::<Result<Vec<_>, _>>()?,
            other => {
                return Err(FrameError::UnexpectedGeometry {
                    row,
                    expected: "LineString",
                    found: geometry_name(other),
                });
            }
        };

        Ok(Self {
            order,
            start_city: string_property(row, feature, "start_city")?,
            end_city: string_property(row, feature, "end_city")?,
            path,
        })
    }
}

/// A named point: a city, heritage site or station.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceRecord {
    pub name: String,
    pub location: LatLng,
}

impl FromFeature for PlaceRecord {
    fn from_feature(row: usize, feature: &Feature) -> Result<Self, FrameError> {
        let name = string_property(row, feature, "name")?;
        let location = match geometry(row, feature)? {
            Value::Point(position) => {
                LatLng::from_position(position).ok_or(FrameError::MalformedPosition { row })?
            }
            other => {
                return Err(FrameError::UnexpectedGeometry {
                    row,
                    expected: "Point",
                    found: geometry_name(other),
                });
            }
        };
        Ok(Self { name, location })
    }
}

fn property<'a>(
    row: usize,
    feature: &'a Feature,
    name: &'static str,
) -> Result<&'a JsonValue, FrameError> {
    feature
        .property(name)
        .ok_or(FrameError::MissingProperty { row, name })
}

fn string_property(row: usize, feature: &Feature, name: &'static str) -> Result<String, FrameError> {
    property(row, feature, name)?
        .as_str()
        .map(str::to_string)
        .ok_or(FrameError::WrongType {
            row,
            name,
            expected: "a string",
        })
}

/// A non-negative integer, also accepted in float form such as `2.0`.
fn whole_number(value: &JsonValue) -> Option<u64> {
    value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f < u64::MAX as f64)
            .map(|f| f as u64)
    })
}

fn geometry(row: usize, feature: &Feature) -> Result<&Value, FrameError> {
    feature
        .geometry
        .as_ref()
        .map(|g| &g.value)
        .ok_or(FrameError::MissingGeometry { row })
}

fn geometry_name(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}
