// src/geometry/point.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// A longitude/latitude pair in a flat coordinate space.
///
/// Serialized the GeoJSON way, as `[longitude, latitude]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinate {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Pythagorean distance in degrees. No geodesic correction.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        let dx = self.longitude - other.longitude;
        let dy = self.latitude - other.latitude;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn to_lng_lat(self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from(pair: [f64; 2]) -> Self {
        Coordinate::new(pair[0], pair[1])
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(coord: Coordinate) -> Self {
        coord.to_lng_lat()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.longitude, self.latitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_distance_to() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(3.0, 4.0);
        assert_approx_eq!(a.distance_to(&b), 5.0, 1e-12);
        assert_approx_eq!(b.distance_to(&a), 5.0, 1e-12);
    }

    #[test]
    fn test_serializes_as_lng_lat_pair() {
        let coord = Coordinate::new(-3.1869, 55.9445);
        let json = serde_json::to_string(&coord).unwrap();
        assert_eq!(json, "[-3.1869,55.9445]");

        let back: Coordinate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, coord);
    }
}
