// src/geometry/bounds.rs
use crate::geometry::Coordinate;
use serde::{Deserialize, Serialize};

/// Axis-aligned box in longitude/latitude space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_longitude: f64,
    pub min_latitude: f64,
    pub max_longitude: f64,
    pub max_latitude: f64,
}

impl BoundingBox {
    pub fn new_empty() -> Self {
        BoundingBox {
            min_longitude: f64::INFINITY,
            min_latitude: f64::INFINITY,
            max_longitude: f64::NEG_INFINITY,
            max_latitude: f64::NEG_INFINITY,
        }
    }

    pub fn new(min_longitude: f64, min_latitude: f64, max_longitude: f64, max_latitude: f64) -> Self {
        BoundingBox {
            min_longitude,
            min_latitude,
            max_longitude,
            max_latitude,
        }
    }

    pub fn from_points(points: &[Coordinate]) -> Self {
        let mut bbox = BoundingBox::new_empty();
        for point in points {
            bbox.expand_point(*point);
        }
        bbox
    }

    pub fn expand_point(&mut self, point: Coordinate) {
        self.min_longitude = self.min_longitude.min(point.longitude);
        self.min_latitude = self.min_latitude.min(point.latitude);
        self.max_longitude = self.max_longitude.max(point.longitude);
        self.max_latitude = self.max_latitude.max(point.latitude);
    }

    /// Strict containment: points on the border are outside.
    pub fn contains_strict(&self, point: &Coordinate) -> bool {
        point.latitude > self.min_latitude
            && point.latitude < self.max_latitude
            && point.longitude > self.min_longitude
            && point.longitude < self.max_longitude
    }

    // Inclusive, so boxes that only touch still overlap.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.max_longitude >= other.min_longitude
            && self.min_longitude <= other.max_longitude
            && self.max_latitude >= other.min_latitude
            && self.min_latitude <= other.max_latitude
    }

    pub fn is_well_formed(&self) -> bool {
        self.min_longitude < self.max_longitude && self.min_latitude < self.max_latitude
    }
}
