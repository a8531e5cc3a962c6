//! Dataset error types.

/// Errors raised when reading a dataset or one of its rows.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// Input is not valid GeoJSON
    #[error("GeoJSON parse error: {0}")]
    Parse(#[from] geojson::Error),

    /// GeoJSON was valid but not a feature collection
    #[error("expected a FeatureCollection, got {0}")]
    NotACollection(&'static str),

    /// A required property is absent
    #[error("row {row}: missing property {name:?}")]
    MissingProperty { row: usize, name: &'static str },

    /// A property has the wrong JSON type
    #[error("row {row}: property {name:?} must be {expected}")]
    WrongType {
        row: usize,
        name: &'static str,
        expected: &'static str,
    },

    /// A row has no geometry
    #[error("row {row}: missing geometry")]
    MissingGeometry { row: usize },

    /// A row's geometry is not of the kind the record needs
    #[error("row {row}: expected {expected} geometry, got {found}")]
    UnexpectedGeometry {
        row: usize,
        expected: &'static str,
        found: &'static str,
    },

    /// A geometry position has fewer than two components
    #[error("row {row}: malformed position")]
    MalformedPosition { row: usize },
}
