//! Coordinate types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::MapError;

/// A latitude/longitude pair in degrees.
///
/// This is a plain value: any pair of floats can be stored. Map
/// primitives validate it when they are constructed, see [`validate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Build from a GeoJSON position, which is ordered `[lng, lat, ...]`.
    ///
    /// Returns `None` if the position has fewer than two components.
    pub fn from_position(position: &[f64]) -> Option<Self> {
        match position {
            [lng, lat, ..] => Some(Self::new(*lat, *lng)),
            _ => None,
        }
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lng)
    }
}

/// Check that a location can be placed on a map: both components finite,
/// latitude within ±90 and longitude within ±180.
pub fn validate(location: LatLng) -> Result<LatLng, MapError> {
    let LatLng { lat, lng } = location;
    if lat.is_finite() && lng.is_finite() && lat.abs() <= 90.0 && lng.abs() <= 180.0 {
        Ok(location)
    } else {
        Err(MapError::InvalidLocation { lat, lng })
    }
}

/// Validate a sequence of locations. An empty sequence is an error.
pub fn validate_all(locations: &[LatLng]) -> Result<Vec<LatLng>, MapError> {
    if locations.is_empty() {
        return Err(MapError::EmptyLocations);
    }
    locations.iter().copied().map(validate).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_position_swaps_axes() {
        let ll = LatLng::from_position(&[13.4, 52.5]).unwrap();
        assert_eq!(ll, LatLng::new(52.5, 13.4));

        let with_alt = LatLng::from_position(&[13.4, 52.5, 34.0]).unwrap();
        assert_eq!(with_alt, LatLng::new(52.5, 13.4));

        assert!(LatLng::from_position(&[13.4]).is_none());
        assert!(LatLng::from_position(&[]).is_none());
    }

    #[test]
    fn validate_accepts_bounds() {
        assert!(validate(LatLng::new(90.0, 180.0)).is_ok());
        assert!(validate(LatLng::new(-90.0, -180.0)).is_ok());
        assert!(validate(LatLng::new(0.0, 0.0)).is_ok());
    }

    #[test]
    fn validate_rejects_out_of_range() {
        assert!(validate(LatLng::new(90.1, 0.0)).is_err());
        assert!(validate(LatLng::new(0.0, -180.5)).is_err());
        assert!(validate(LatLng::new(f64::NAN, 0.0)).is_err());
        assert!(validate(LatLng::new(0.0, f64::INFINITY)).is_err());
    }

    #[test]
    fn validate_all_rejects_empty() {
        assert!(matches!(validate_all(&[]), Err(MapError::EmptyLocations)));
    }

    #[test]
    fn validate_all_reports_first_bad_point() {
        let points = [LatLng::new(1.0, 1.0), LatLng::new(200.0, 1.0)];
        let err = validate_all(&points).unwrap_err();
        assert_eq!(err.to_string(), "invalid location: (200, 1)");
    }

    #[test]
    fn serializes_as_object() {
        let json = serde_json::to_string(&LatLng::new(48.2, 16.37)).unwrap();
        assert_eq!(json, r#"{"lat":48.2,"lng":16.37}"#);
    }
}
