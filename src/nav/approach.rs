// src/nav/approach.rs

use crate::config::NavConfig;
use crate::error::{NavError, Result};
use crate::geometry::Coordinate;
use crate::map::Geofence;
use crate::nav::search::HeadingSearch;
use crate::nav::{Heading, Position};
use log::{debug, warn};

/// A single accepted step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Move {
    pub from: Coordinate,
    pub heading: Heading,
    pub to: Coordinate,
}

/// The moves flown from a start position, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightPath {
    start: Position,
    end: Position,
    moves: Vec<Move>,
}

impl FlightPath {
    pub fn new(start: Position) -> Self {
        FlightPath {
            start,
            end: start,
            moves: Vec::new(),
        }
    }

    /// Records a move flown along `heading` that ended at `next`.
    pub fn push(&mut self, heading: Heading, next: Position) {
        self.moves.push(Move {
            from: self.end.coordinate,
            heading,
            to: next.coordinate,
        });
        self.end = next.with_heading(heading);
    }

    pub fn start(&self) -> &Position {
        &self.start
    }

    pub fn end(&self) -> &Position {
        &self.end
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

/// Steps from `start` towards `target` until the two are close.
///
/// Gives up with `NavError::MoveLimitReached` after `max_moves` steps, and
/// passes through any heading search failure.
pub fn approach(
    start: Position,
    target: Coordinate,
    geofence: &Geofence,
    config: &NavConfig,
    max_moves: usize,
) -> Result<FlightPath> {
    let search = HeadingSearch::new(geofence, config);
    let goal = Position::at(target);
    let mut path = FlightPath::new(start);

    while !path.end().close_to(&goal, config) {
        if path.len() >= max_moves {
            warn!("Gave up on {} after {} moves", target, max_moves);
            return Err(NavError::MoveLimitReached { moves: max_moves });
        }
        let (heading, next) = search.next_step(path.end(), &target)?;
        path.push(heading, next);
    }

    debug!("Reached {} in {} moves", target, path.len());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::BoundingBox;
    use assert_approx_eq::assert_approx_eq;

    fn half_step_config() -> NavConfig {
        NavConfig {
            step_length: 0.5,
            distance_tolerance: 0.5,
            confinement_bounds: BoundingBox::new(0.0, 0.0, 10.0, 10.0),
            ..NavConfig::default()
        }
    }

    #[test]
    fn test_reaches_target_in_open_area() {
        let config = half_step_config();
        let fence = Geofence::open(config.confinement_bounds);
        let target = Coordinate::new(8.0, 6.0);

        let path = approach(Position::new(1.0, 1.0), target, &fence, &config, 100).unwrap();

        assert!(path.end().close_to(&Position::at(target), &config));
        assert!(!path.is_empty());
        for step in path.moves() {
            assert_approx_eq!(step.from.distance_to(&step.to), config.step_length, 1e-9);
        }
        assert_eq!(path.moves()[0].from, path.start().coordinate);
        assert_eq!(path.moves().last().unwrap().to, path.end().coordinate);
    }

    #[test]
    fn test_push_records_given_heading() {
        let config = half_step_config();
        let start = Position::new(5.0, 5.0);
        let mut path = FlightPath::new(start);

        let east = Heading::bearing(0).unwrap();
        path.push(east, start.step(east, &config));
        path.push(Heading::Hover, path.end().step(Heading::Hover, &config));

        assert_eq!(path.len(), 2);
        assert_eq!(path.moves()[0].heading, east);
        assert_eq!(path.moves()[1].heading, Heading::Hover);
        assert_eq!(path.moves()[1].from, path.moves()[1].to);
        assert_eq!(path.end().heading, Some(Heading::Hover));
        assert_approx_eq!(path.end().longitude(), 5.5);
    }

    #[test]
    fn test_already_there() {
        let config = half_step_config();
        let fence = Geofence::open(config.confinement_bounds);
        let path = approach(Position::new(5.0, 5.0), Coordinate::new(5.1, 5.0), &fence, &config, 10)
            .unwrap();
        assert!(path.is_empty());
        assert_eq!(path.end(), path.start());
    }

    #[test]
    fn test_move_limit() {
        let config = half_step_config();
        let fence = Geofence::open(config.confinement_bounds);
        let result = approach(Position::new(1.0, 1.0), Coordinate::new(9.0, 9.0), &fence, &config, 3);
        assert!(matches!(result, Err(NavError::MoveLimitReached { moves: 3 })));
    }

    #[test]
    fn test_default_config_reaches_nearby_shop() {
        // Appleton Tower to a point roughly ten steps north-east.
        let config = NavConfig::default();
        let fence = Geofence::open(config.confinement_bounds);
        let start = Position::new(-3.186874, 55.944494);
        let target = Coordinate::new(-3.185874, 55.945494);

        let path = approach(start, target, &fence, &config, 50).unwrap();
        assert!(path.end().close_to(&Position::at(target), &config));
        assert!(path.end().is_confined(&config));
    }
}
