// src/map/polygon.rs
use crate::error::{NavError, Result};
use crate::geometry::{BoundingBox, Coordinate, Segment};
use serde::{Deserialize, Serialize};

/// A closed ring of vertices. The last vertex connects back to the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Coordinate>", into = "Vec<Coordinate>")]
pub struct Polygon {
    vertices: Vec<Coordinate>,
    bounds: BoundingBox,
}

impl Polygon {
    /// Builds a ring, dropping a repeated closing vertex (GeoJSON style).
    pub fn new(mut vertices: Vec<Coordinate>) -> Result<Self> {
        if vertices.len() > 1 && vertices.first() == vertices.last() {
            vertices.pop();
        }
        if vertices.len() < 3 {
            return Err(NavError::MalformedPolygon {
                vertices: vertices.len(),
            });
        }
        let bounds = BoundingBox::from_points(&vertices);
        Ok(Polygon { vertices, bounds })
    }

    /// Axis-aligned rectangle, counter-clockwise from the lower-left corner.
    pub fn rectangle(bounds: BoundingBox) -> Self {
        let vertices = vec![
            Coordinate::new(bounds.min_longitude, bounds.min_latitude),
            Coordinate::new(bounds.max_longitude, bounds.min_latitude),
            Coordinate::new(bounds.max_longitude, bounds.max_latitude),
            Coordinate::new(bounds.min_longitude, bounds.max_latitude),
        ];
        Polygon { vertices, bounds }
    }

    pub fn vertices(&self) -> &[Coordinate] {
        &self.vertices
    }

    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    /// Edge i runs from vertex i to vertex (i + 1) mod n.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Segment::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// True if `segment` touches any edge of the ring.
    pub fn intersects_segment(&self, segment: &Segment) -> bool {
        if !self.bounds.intersects(&segment.bounds()) {
            return false;
        }
        self.edges().any(|edge| segment.intersects(&edge))
    }
}

impl TryFrom<Vec<Coordinate>> for Polygon {
    type Error = NavError;

    fn try_from(vertices: Vec<Coordinate>) -> Result<Self> {
        Polygon::new(vertices)
    }
}

impl From<Polygon> for Vec<Coordinate> {
    fn from(polygon: Polygon) -> Self {
        polygon.vertices
    }
}
