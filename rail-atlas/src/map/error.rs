//! Mapping error types.

/// Errors raised while building map primitives or writing a map out.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    /// Coordinate is not finite or outside the valid lat/lng range
    #[error("invalid location: ({lat}, {lng})")]
    InvalidLocation { lat: f64, lng: f64 },

    /// A line was given no points
    #[error("locations is empty")]
    EmptyLocations,

    /// A GeoJSON feature has no geometry
    #[error("feature {index} has no geometry")]
    MissingGeometry { index: usize },

    /// A tooltip or popup field is absent from a feature's properties
    #[error("feature {index} is missing field {field:?}")]
    MissingField { index: usize, field: String },

    /// Template rendering failed
    #[error("template error: {0}")]
    Template(#[from] askama::Error),

    /// Map document could not be serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing the rendered map failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = MapError::InvalidLocation {
            lat: 91.0,
            lng: 0.5,
        };
        assert_eq!(err.to_string(), "invalid location: (91, 0.5)");

        assert_eq!(MapError::EmptyLocations.to_string(), "locations is empty");

        let err = MapError::MissingGeometry { index: 4 };
        assert_eq!(err.to_string(), "feature 4 has no geometry");

        let err = MapError::MissingField {
            index: 2,
            field: "name".into(),
        };
        assert_eq!(err.to_string(), "feature 2 is missing field \"name\"");
    }
}
