//! Askama templates for the web frontend.

use askama::Template;

use crate::query::FeatureKind;

/// Home page listing the endpoints.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub example_country: &'static str,
    pub kinds: Vec<&'static str>,
    pub layers: Vec<&'static str>,
}

impl Default for IndexTemplate {
    fn default() -> Self {
        Self {
            example_country: "Germany",
            kinds: [FeatureKind::Station, FeatureKind::Rail, FeatureKind::City]
                .iter()
                .map(FeatureKind::as_str)
                .collect(),
            layers: super::dto::MAP_LAYER_FIELDS.to_vec(),
        }
    }
}
