// src/nav/fleet.rs

use crate::config::NavConfig;
use crate::error::Result;
use crate::geometry::Coordinate;
use crate::map::Geofence;
use crate::nav::search::HeadingSearch;
use crate::nav::Position;
use rayon::prelude::*;

/// One vehicle's current position and where it is heading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepRequest {
    pub position: Position,
    pub target: Coordinate,
}

/// Resolves one step per request in parallel. Results keep the input order.
pub fn step_fleet(
    requests: &[StepRequest],
    geofence: &Geofence,
    config: &NavConfig,
) -> Vec<Result<Position>> {
    let search = HeadingSearch::new(geofence, config);
    requests
        .par_iter()
        .map(|request| search.next_move(&request.position, &request.target))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NavError;
    use crate::geometry::BoundingBox;
    use crate::map::Polygon;
    use crate::nav::Heading;

    fn bearing(degrees: i32) -> Heading {
        Heading::bearing(degrees).unwrap()
    }

    #[test]
    fn test_step_fleet_keeps_order_and_isolates_failures() {
        let config = NavConfig {
            step_length: 1.0,
            ..NavConfig::default()
        };
        let cell = BoundingBox::new(-0.25, -0.25, 0.25, 0.25);
        let fence = Geofence::new(Polygon::rectangle(cell), vec![Polygon::rectangle(cell)]);

        let requests = vec![
            StepRequest {
                position: Position::new(5.0, 5.0),
                target: Coordinate::new(9.0, 5.0),
            },
            StepRequest {
                position: Position::new(0.0, 0.0),
                target: Coordinate::new(9.0, 0.0),
            },
            StepRequest {
                position: Position::new(5.0, 5.0),
                target: Coordinate::new(5.0, 9.0),
            },
        ];

        let results = step_fleet(&requests, &fence, &config);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().heading, Some(bearing(0)));
        assert!(matches!(results[1], Err(NavError::NoValidHeading { .. })));
        assert_eq!(results[2].as_ref().unwrap().heading, Some(bearing(90)));
    }

    #[test]
    fn test_matches_sequential_search() {
        let config = NavConfig::default();
        let fence = Geofence::open(config.confinement_bounds);
        let search = HeadingSearch::new(&fence, &config);

        let requests: Vec<StepRequest> = (0..64)
            .map(|i| StepRequest {
                position: Position::new(-3.19 + i as f64 * 0.00005, 55.944),
                target: Coordinate::new(-3.186874, 55.944494),
            })
            .collect();

        let parallel = step_fleet(&requests, &fence, &config);
        for (request, result) in requests.iter().zip(parallel) {
            let expected = search.next_move(&request.position, &request.target).unwrap();
            assert_eq!(result.unwrap(), expected);
        }
    }
}
