//! Named, togglable layer groups.

use serde::Serialize;

use super::primitive::Primitive;

/// A named collection of primitives that the layer control can show or
/// hide as a unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureGroup {
    pub name: String,
    /// Whether the group is visible when the map first loads.
    pub show: bool,
    children: Vec<Primitive>,
}

impl FeatureGroup {
    /// Create an empty group that is shown on load.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            show: true,
            children: Vec::new(),
        }
    }

    /// Create an empty group that starts hidden.
    pub fn hidden(name: impl Into<String>) -> Self {
        Self {
            show: false,
            ..Self::new(name)
        }
    }

    pub fn add_child(&mut self, primitive: impl Into<Primitive>) {
        self.children.push(primitive.into());
    }

    pub fn children(&self) -> &[Primitive] {
        &self.children
    }

    /// Total visual elements across all children.
    pub fn element_count(&self) -> usize {
        self.children.iter().map(Primitive::element_count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{LatLng, Marker, MarkerCluster};

    #[test]
    fn visibility_defaults() {
        assert!(FeatureGroup::new("Routes").show);
        assert!(!FeatureGroup::hidden("Stations").show);
    }

    #[test]
    fn counts_nested_elements() {
        let mut cluster = MarkerCluster::new();
        for i in 0..4 {
            cluster.add_child(Marker::new(LatLng::new(i as f64, 0.0)).unwrap());
        }
        let mut group = FeatureGroup::hidden("Heritage");
        group.add_child(cluster);
        group.add_child(Marker::new(LatLng::new(10.0, 10.0)).unwrap());

        assert_eq!(group.children().len(), 2);
        assert_eq!(group.element_count(), 5);
        assert!(!group.is_empty());
    }
}
