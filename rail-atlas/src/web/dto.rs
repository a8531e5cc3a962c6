//! Data transfer objects for web requests and responses.

use geojson::FeatureCollection;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::frame::GeoFrame;
use crate::layers::{
    LayerError, add_close_cities_to_map, add_close_heris_to_map, add_nature_to_map,
    add_rails_to_map, add_route_to_map, add_starters_to_map, add_stations_to_map,
};
use crate::map::{LatLng, Map, MapConfig};

/// Dataset fields accepted by [`MapRequest`], in drawing order.
pub const MAP_LAYER_FIELDS: [&str; 6] = [
    "rails",
    "nature",
    "stations",
    "close_cities",
    "close_heritages",
    "routes",
];

/// Query string for `GET /query/:kind`.
#[derive(Debug, Deserialize)]
pub struct QueryParams {
    /// English country name; empty if omitted
    #[serde(default)]
    pub country: String,
}

/// Request to render a map.
///
/// Each dataset is an optional GeoJSON feature collection. Close cities
/// and heritage sites are read leniently: a value that is not a valid
/// feature collection skips its layer instead of failing the request.
#[derive(Debug, Default, Deserialize)]
pub struct MapRequest {
    /// Railway lines (LineString features)
    pub rails: Option<FeatureCollection>,

    /// Nature reserves (polygons with a `name` property)
    pub nature: Option<FeatureCollection>,

    /// Stations (Point features with a `name` property)
    pub stations: Option<FeatureCollection>,

    /// Cities near the destination (Point features with a `name` property)
    pub close_cities: Option<JsonValue>,

    /// Heritage sites near the destination (Point features with a `name` property)
    pub close_heritages: Option<JsonValue>,

    /// Best routes (LineString features with `order`, `start_city`, `end_city`)
    pub routes: Option<FeatureCollection>,

    /// Initial map center (defaults to the server's)
    pub center: Option<LatLng>,

    /// Initial zoom level (defaults to the server's)
    pub zoom: Option<u8>,

    /// Page title (defaults to the server's)
    pub title: Option<String>,
}

impl MapRequest {
    /// Build a map from the supplied datasets.
    ///
    /// Routes also get their start markers. Errors from every layer except
    /// the close cities and heritage sites are returned.
    pub fn compose(self, defaults: &MapConfig) -> Result<Map, LayerError> {
        let mut config = defaults.clone();
        if let Some(center) = self.center {
            config.center = center;
        }
        if let Some(zoom) = self.zoom {
            config.zoom_start = zoom;
        }
        if let Some(title) = self.title {
            config.title = title;
        }

        let frame = |c: Option<FeatureCollection>| c.map(GeoFrame::from);
        let mut map = Map::new(config);

        if let Some(rails) = frame(self.rails) {
            add_rails_to_map(&rails, &mut map)?;
        }
        if let Some(nature) = frame(self.nature) {
            add_nature_to_map(&nature, &mut map)?;
        }
        if let Some(stations) = frame(self.stations) {
            add_stations_to_map(&stations, &mut map)?;
        }
        let close_cities = lenient_frame("close_cities", self.close_cities);
        add_close_cities_to_map(close_cities.as_ref(), &mut map);
        let close_heritages = lenient_frame("close_heritages", self.close_heritages);
        add_close_heris_to_map(close_heritages.as_ref(), &mut map);
        if let Some(routes) = frame(self.routes) {
            add_route_to_map(&routes, &mut map)?;
            add_starters_to_map(&routes, &mut map)?;
        }

        Ok(map)
    }
}

/// Read an optional dataset, treating anything that is not a feature
/// collection as absent.
fn lenient_frame(field: &str, value: Option<JsonValue>) -> Option<GeoFrame> {
    match FeatureCollection::try_from(value?) {
        Ok(collection) => Some(GeoFrame::from(collection)),
        Err(e) => {
            debug!(field, error = %e, "ignoring unreadable dataset");
            None
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: &str) -> MapRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn empty_request_gives_bare_map() {
        let map = request("{}").compose(&MapConfig::default()).unwrap();
        assert!(map.groups().is_empty());
        assert_eq!(map.config().zoom_start, 5);
    }

    #[test]
    fn overrides_view() {
        let map = request(r#"{"center": {"lat": 41.9, "lng": 12.5}, "zoom": 6, "title": "Italia"}"#)
            .compose(&MapConfig::default())
            .unwrap();
        assert_eq!(map.config().center, LatLng::new(41.9, 12.5));
        assert_eq!(map.config().zoom_start, 6);
        assert_eq!(map.config().title, "Italia");
    }

    #[test]
    fn routes_add_lines_and_starters() {
        let map = request(
            r#"{"routes": {"type": "FeatureCollection", "features": [
                {"type": "Feature",
                 "properties": {"order": 1, "start_city": "Rome", "end_city": "Naples"},
                 "geometry": {"type": "LineString", "coordinates": [[12.5, 41.9], [14.27, 40.85]]}}
            ]}}"#,
        )
        .compose(&MapConfig::default())
        .unwrap();

        let names: Vec<&str> = map.groups().iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Route 1 from Rome to Naples", "Destination Cities"]);
    }

    #[test]
    fn malformed_close_cities_are_ignored() {
        let map = request(
            r#"{"close_cities": {"type": "FeatureCollection", "features": [
                {"type": "Feature", "properties": {},
                 "geometry": {"type": "Point", "coordinates": [12.5, 41.9]}}
            ]}}"#,
        )
        .compose(&MapConfig::default())
        .unwrap();
        assert!(map.groups().is_empty());
    }

    const STATIONS: &str = r#"{"type": "FeatureCollection", "features": [
        {"type": "Feature", "properties": {"name": "Roma Termini"},
         "geometry": {"type": "Point", "coordinates": [12.5, 41.9]}}
    ]}"#;

    #[test]
    fn non_collection_close_cities_are_ignored() {
        let map = request(&format!(r#"{{"close_cities": 5, "stations": {STATIONS}}}"#))
            .compose(&MapConfig::default())
            .unwrap();
        let names: Vec<&str> = map.groups().iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Railway Stations"]);
    }

    #[test]
    fn bare_feature_close_cities_are_ignored() {
        let map = request(
            r#"{"close_cities": {"type": "Feature", "properties": {"name": "Tivoli"},
                "geometry": {"type": "Point", "coordinates": [12.8, 41.96]}}}"#,
        )
        .compose(&MapConfig::default())
        .unwrap();
        assert!(map.groups().is_empty());
    }

    #[test]
    fn bad_heritage_coordinates_are_ignored() {
        let map = request(&format!(
            r#"{{"stations": {STATIONS},
                "close_heritages": {{"type": "FeatureCollection", "features": [
                    {{"type": "Feature", "properties": {{"name": "Colosseo"}},
                     "geometry": {{"type": "Point", "coordinates": "oops"}}}}
                ]}}}}"#
        ))
        .compose(&MapConfig::default())
        .unwrap();
        assert!(map.group("Close Heritages").is_none());
        assert!(map.group("Railway Stations").is_some());
    }

    #[test]
    fn valid_close_heritages_are_drawn() {
        let map = request(&format!(r#"{{"close_heritages": {STATIONS}}}"#))
            .compose(&MapConfig::default())
            .unwrap();
        assert_eq!(map.group("Close Heritages").unwrap().element_count(), 1);
    }

    #[test]
    fn malformed_stations_fail() {
        let err = request(
            r#"{"stations": {"type": "FeatureCollection", "features": [
                {"type": "Feature", "properties": {},
                 "geometry": {"type": "Point", "coordinates": [12.5, 41.9]}}
            ]}}"#,
        )
        .compose(&MapConfig::default())
        .unwrap_err();
        assert_eq!(err.to_string(), "row 0: missing property \"name\"");
    }
}
