//! Tabular geographic datasets.
//!
//! A [`GeoFrame`] is an ordered table of GeoJSON features: each row has a
//! property map and a geometry. Layer builders never mutate a frame; they
//! read it as a sequence of typed, immutable records via
//! [`GeoFrame::records`].

mod error;
mod records;

use std::str::FromStr;

use geojson::{Feature, FeatureCollection, GeoJson};

pub use error::FrameError;
pub use records::{FromFeature, PlaceRecord, RouteRecord};

/// An ordered collection of features.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeoFrame {
    features: Vec<Feature>,
}

impl GeoFrame {
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Rows in input order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &Feature> {
        self.features.iter()
    }

    /// Convert every row into a record, in order.
    ///
    /// Fails on the first row that does not fit the record shape.
    pub fn records<R: FromFeature>(&self) -> Result<Vec<R>, FrameError> {
        self.rows()
            .enumerate()
            .map(|(row, feature)| R::from_feature(row, feature))
            .collect()
    }

    /// The rows as owned features, e.g. for a GeoJSON overlay.
    pub fn to_features(&self) -> Vec<Feature> {
        self.features.clone()
    }
}

impl From<FeatureCollection> for GeoFrame {
    fn from(collection: FeatureCollection) -> Self {
        Self::new(collection.features)
    }
}

impl From<GeoFrame> for FeatureCollection {
    fn from(frame: GeoFrame) -> Self {
        FeatureCollection {
            bbox: None,
            features: frame.features,
            foreign_members: None,
        }
    }
}

impl FromStr for GeoFrame {
    type Err = FrameError;

    /// Parse a GeoJSON `FeatureCollection`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<GeoJson>()? {
            GeoJson::FeatureCollection(collection) => Ok(collection.into()),
            GeoJson::Feature(_) => Err(FrameError::NotACollection("Feature")),
            GeoJson::Geometry(_) => Err(FrameError::NotACollection("Geometry")),
        }
    }
}
