//! Layer builders.
//!
//! Each builder reads a [`GeoFrame`](crate::frame::GeoFrame) row by row, in
//! order, turns every row into one map primitive, collects the primitives
//! in a named [`FeatureGroup`](crate::map::FeatureGroup) and attaches the
//! group to the map. A group is attached only once all of its primitives
//! were built.
//!
//! Two error policies apply:
//!
//! - Most builders return `Result<(), LayerError>` and pass dataset and map
//!   errors through unchanged.
//! - The optional context layers ([`add_close_cities_to_map`] and
//!   [`add_close_heris_to_map`]) never fail. They return the attached
//!   layer, or `None` when the dataset is absent or unusable, in which
//!   case the map is left untouched.

mod error;
mod overlays;
mod places;
mod routes;

pub use error::LayerError;
pub use overlays::{add_nature_to_map, add_rails_to_map};
pub use places::{add_close_cities_to_map, add_close_heris_to_map, add_stations_to_map};
pub use routes::{add_route_to_map, add_starters_to_map};

/// Colors assigned to routes and their start markers, cycled by row index.
///
/// Route `i` and the start marker of route `i` share a color.
pub const PALETTE: [&str; 7] = [
    "orange",
    "darkred",
    "darkblue",
    "purple",
    "darkgreen",
    "#364e4a",
    "cadetblue",
];

/// Palette color for row `index`.
pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}
