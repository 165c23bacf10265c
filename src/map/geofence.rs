// src/map/geofence.rs
use crate::error::Result;
use crate::geometry::{BoundingBox, Segment};
use crate::map::Polygon;
use serde::{Deserialize, Serialize};
use std::io::Read;

/// The airspace the core validates moves against: one confinement ring and
/// any number of no-fly rings. Read-only once built.
///
/// JSON form:
///
/// ```json
/// { "confinement": [[lng, lat], ...], "no_fly_zones": [[[lng, lat], ...], ...] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geofence {
    confinement: Polygon,
    #[serde(default)]
    no_fly_zones: Vec<Polygon>,
}

impl Geofence {
    pub fn new(confinement: Polygon, no_fly_zones: Vec<Polygon>) -> Self {
        Geofence {
            confinement,
            no_fly_zones,
        }
    }

    /// Rectangular confinement with no no-fly zones.
    pub fn open(bounds: BoundingBox) -> Self {
        Geofence::new(Polygon::rectangle(bounds), Vec::new())
    }

    // Every polygon is validated while deserializing.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn confinement(&self) -> &Polygon {
        &self.confinement
    }

    pub fn no_fly_zones(&self) -> &[Polygon] {
        &self.no_fly_zones
    }

    pub fn crosses_confinement(&self, segment: &Segment) -> bool {
        self.confinement.intersects_segment(segment)
    }

    /// Stops at the first no-fly zone hit.
    pub fn crosses_no_fly_zone(&self, segment: &Segment) -> bool {
        self.no_fly_zones
            .iter()
            .any(|zone| zone.intersects_segment(segment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NavError;
    use crate::geometry::Coordinate;

    const FENCE_JSON: &str = r#"{
        "confinement": [[0, 0], [10, 0], [10, 10], [0, 10]],
        "no_fly_zones": [
            [[4, 4], [6, 4], [6, 6], [4, 6], [4, 4]]
        ]
    }"#;

    #[test]
    fn test_load_from_json() {
        let fence = Geofence::from_json_str(FENCE_JSON).unwrap();
        assert_eq!(fence.confinement().vertices().len(), 4);
        assert_eq!(fence.no_fly_zones().len(), 1);
        assert_eq!(fence.no_fly_zones()[0].vertices().len(), 4);
    }

    #[test]
    fn test_load_from_reader() {
        let fence = Geofence::from_reader(FENCE_JSON.as_bytes()).unwrap();
        assert_eq!(fence, Geofence::from_json_str(FENCE_JSON).unwrap());
        assert_eq!(fence.no_fly_zones().len(), 1);

        let truncated = &FENCE_JSON.as_bytes()[..20];
        assert!(matches!(Geofence::from_reader(truncated), Err(NavError::Json(_))));
    }

    #[test]
    fn test_no_fly_zones_default_to_empty() {
        let fence = Geofence::from_json_str(r#"{ "confinement": [[0,0],[1,0],[1,1]] }"#).unwrap();
        assert!(fence.no_fly_zones().is_empty());
    }

    #[test]
    fn test_malformed_polygon_rejected_at_load() {
        let json = r#"{ "confinement": [[0,0],[10,0],[10,10]], "no_fly_zones": [[[1,1],[2,2]]] }"#;
        assert!(matches!(Geofence::from_json_str(json), Err(NavError::Json(_))));
    }

    #[test]
    fn test_crossing_queries() {
        let fence = Geofence::from_json_str(FENCE_JSON).unwrap();
        let into_zone = Segment::new(Coordinate::new(3.0, 5.0), Coordinate::new(5.0, 5.0));
        let out_of_area = Segment::new(Coordinate::new(9.5, 1.0), Coordinate::new(10.5, 1.0));

        assert!(fence.crosses_no_fly_zone(&into_zone));
        assert!(!fence.crosses_confinement(&into_zone));
        assert!(fence.crosses_confinement(&out_of_area));
        assert!(!fence.crosses_no_fly_zone(&out_of_area));
    }
}
