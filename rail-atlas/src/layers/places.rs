//! Point layers: nearby cities, heritage sites and stations.

use tracing::debug;

use super::LayerError;
use crate::frame::{FrameError, GeoFrame, PlaceRecord};
use crate::map::{
    CircleMarker, FeatureGroup, Icon, LayerId, Map, MapError, Marker, MarkerCluster,
};

/// Add a hidden `Close Cities` group of dark red circles.
///
/// Returns `None`, leaving the map unchanged, if `cities` is absent or
/// any row cannot be drawn.
pub fn add_close_cities_to_map(cities: Option<&GeoFrame>, map: &mut Map) -> Option<LayerId> {
    attach_optional("Close Cities", map, || {
        let cities = cities.ok_or(Skipped::Absent)?;
        let mut group = FeatureGroup::hidden("Close Cities");
        for city in cities.records::<PlaceRecord>()? {
            let circle = CircleMarker::new(city.location, 6, "darkred")?
                .fill("black")
                .tooltip(city.name.clone())
                .popup(city.name);
            group.add_child(circle);
        }
        Ok(group)
    })
}

/// Add a hidden `Close Heritages` group holding one marker cluster of
/// heritage sites.
///
/// Returns `None`, leaving the map unchanged, if `heritages` is absent or
/// any row cannot be drawn.
pub fn add_close_heris_to_map(heritages: Option<&GeoFrame>, map: &mut Map) -> Option<LayerId> {
    attach_optional("Close Heritages", map, || {
        let heritages = heritages.ok_or(Skipped::Absent)?;
        let mut cluster = MarkerCluster::new();
        for site in heritages.records::<PlaceRecord>()? {
            let marker = Marker::new(site.location)?
                .popup(format!("{} (Heritage Class)", site.name))
                .icon(Icon::fa("beige", "university"));
            cluster.add_child(marker);
        }
        let mut group = FeatureGroup::hidden("Close Heritages");
        group.add_child(cluster);
        Ok(group)
    })
}

/// Add a hidden `Railway Stations` group of yellow circles.
pub fn add_stations_to_map(stations: &GeoFrame, map: &mut Map) -> Result<(), LayerError> {
    let mut group = FeatureGroup::hidden("Railway Stations");
    for station in stations.records::<PlaceRecord>()? {
        let circle = CircleMarker::new(station.location, 5, "#ffff00")?
            .fill("black")
            .tooltip(station.name.clone())
            .popup(station.name);
        group.add_child(circle);
    }
    map.add_child(group);
    Ok(())
}

/// Why an optional layer was skipped.
#[derive(Debug, thiserror::Error)]
enum Skipped {
    #[error("no dataset given")]
    Absent,
    #[error(transparent)]
    Failed(#[from] LayerError),
}

impl From<FrameError> for Skipped {
    fn from(e: FrameError) -> Self {
        Skipped::Failed(e.into())
    }
}

impl From<MapError> for Skipped {
    fn from(e: MapError) -> Self {
        Skipped::Failed(e.into())
    }
}

/// Build a group and attach it, or log why it was skipped.
fn attach_optional(
    name: &str,
    map: &mut Map,
    build: impl FnOnce() -> Result<FeatureGroup, Skipped>,
) -> Option<LayerId> {
    match build() {
        Ok(group) => Some(map.add_child(group)),
        Err(reason) => {
            debug!(layer = name, %reason, "skipped optional layer");
            None
        }
    }
}
