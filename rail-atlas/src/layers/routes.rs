//! Best-route lines and their start markers.

use tracing::trace;

use super::{LayerError, palette_color};
use crate::frame::{GeoFrame, RouteRecord};
use crate::map::{FeatureGroup, Icon, Map, MapError, Marker, PolyLine};

/// Add one shown group per route, each holding the route's dashed line.
///
/// Groups are named `Route {order} from {start} to {end}`. Nothing is
/// attached if any row fails.
pub fn add_route_to_map(routes: &GeoFrame, map: &mut Map) -> Result<(), LayerError> {
    let records: Vec<RouteRecord> = routes.records()?;

    let mut groups = Vec::with_capacity(records.len());
    for (i, route) in records.iter().enumerate() {
        let line = PolyLine::new(&route.path, palette_color(i))?
            .popup(format!("From {} to {}", route.start_city, route.end_city))
            .tooltip(format!("Route {}", route.order))
            .dash_array("10")
            .weight(4);
        trace!(row = i, points = line.locations.len(), "route line");

        let mut group = FeatureGroup::new(format!(
            "Route {} from {} to {}",
            route.order, route.start_city, route.end_city
        ));
        group.add_child(line);
        groups.push(group);
    }

    for group in groups {
        map.add_child(group);
    }
    Ok(())
}

/// Add a shown `Destination Cities` group with a train marker at the
/// start of every route, colored like the route itself.
pub fn add_starters_to_map(routes: &GeoFrame, map: &mut Map) -> Result<(), LayerError> {
    let records: Vec<RouteRecord> = routes.records()?;

    let mut group = FeatureGroup::new("Destination Cities");
    for (i, route) in records.iter().enumerate() {
        let start = route.start().ok_or(MapError::EmptyLocations)?;
        let marker = Marker::new(start)?
            .tooltip(route.start_city.clone())
            .icon(Icon::fa(palette_color(i), "train"));
        group.add_child(marker);
    }

    map.add_child(group);
    Ok(())
}
