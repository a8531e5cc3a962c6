//! Area and network overlays drawn straight from GeoJSON.

use super::LayerError;
use crate::frame::GeoFrame;
use crate::map::{FeatureGroup, FieldList, GeoJson, Map, Style};

/// Add a hidden `Natural Parks` group: every reserve polygon filled light
/// green, with its name as tooltip and popup.
pub fn add_nature_to_map(reserves: &GeoFrame, map: &mut Map) -> Result<(), LayerError> {
    let style = Style {
        color: Some("darkgreen".into()),
        fill_color: Some("lightgreen".into()),
        fill_opacity: Some(0.5),
        ..Style::default()
    };
    let overlay = GeoJson::new(reserves.to_features(), style)?
        .tooltip(FieldList::new(&["name"], &[""]))?
        .popup(FieldList::new(&["name"], &[""]))?;

    let mut group = FeatureGroup::hidden("Natural Parks");
    group.add_child(overlay);
    map.add_child(group);
    Ok(())
}

/// Add a hidden `Railway Network` group with thin dark lines.
pub fn add_rails_to_map(rails: &GeoFrame, map: &mut Map) -> Result<(), LayerError> {
    let style = Style {
        color: Some("#1C1C1C".into()),
        weight: Some(1.0),
        opacity: Some(0.8),
        ..Style::default()
    };
    let overlay = GeoJson::new(rails.to_features(), style)?;

    let mut group = FeatureGroup::hidden("Railway Network");
    group.add_child(overlay);
    map.add_child(group);
    Ok(())
}
