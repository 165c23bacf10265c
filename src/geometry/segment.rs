// src/geometry/segment.rs
// Closed line segments and the intersection test used to validate moves.

use crate::geometry::{BoundingBox, Coordinate};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Coordinate,
    pub end: Coordinate,
}

impl Segment {
    pub fn new(start: Coordinate, end: Coordinate) -> Self {
        Segment { start, end }
    }

    /// Same segment with its endpoints in lexicographic (longitude, latitude) order.
    pub fn canonical(self) -> Self {
        let start = (self.start.longitude, self.start.latitude);
        let end = (self.end.longitude, self.end.latitude);
        if end < start {
            Segment::new(self.end, self.start)
        } else {
            self
        }
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    pub fn bounds(&self) -> BoundingBox {
        let mut bbox = BoundingBox::new_empty();
        bbox.expand_point(self.start);
        bbox.expand_point(self.end);
        bbox
    }

    pub fn classify_point(&self, point: &Coordinate) -> f64 {
        // Positive on one side, negative on the other, zero on the line.
        let dx = self.end.longitude - self.start.longitude;
        let dy = self.end.latitude - self.start.latitude;
        (dy * (point.longitude - self.start.longitude))
            - (dx * (point.latitude - self.start.latitude))
    }

    /// Bounding-box check; only meaningful for points already known to be collinear.
    pub fn on_segment(&self, point: &Coordinate) -> bool {
        point.longitude <= self.start.longitude.max(self.end.longitude)
            && point.longitude >= self.start.longitude.min(self.end.longitude)
            && point.latitude <= self.start.latitude.max(self.end.latitude)
            && point.latitude >= self.start.latitude.min(self.end.latitude)
    }

    /// True when the two closed segments share at least one point.
    ///
    /// Touching at an endpoint and collinear overlap both count.
    pub fn intersects(&self, other: &Segment) -> bool {
        let d1 = self.classify_point(&other.start);
        let d2 = self.classify_point(&other.end);
        let d3 = other.classify_point(&self.start);
        let d4 = other.classify_point(&self.end);

        if straddles(d1, d2) && straddles(d3, d4) {
            return true;
        }

        (d1 == 0.0 && self.on_segment(&other.start))
            || (d2 == 0.0 && self.on_segment(&other.end))
            || (d3 == 0.0 && other.on_segment(&self.start))
            || (d4 == 0.0 && other.on_segment(&self.end))
    }
}

fn straddles(a: f64, b: f64) -> bool {
    (a > 0.0 && b < 0.0) || (a < 0.0 && b > 0.0)
}
