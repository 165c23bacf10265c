// src/nav/position.rs

use crate::config::NavConfig;
use crate::error::Result;
use crate::geometry::Coordinate;
use crate::nav::Heading;

/// Where the drone is and the heading of the move that brought it there.
///
/// `heading` is `None` before the first move. Positions are values: stepping
/// returns a new one and never alters the original.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub coordinate: Coordinate,
    pub heading: Option<Heading>,
}

impl Position {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self::at(Coordinate::new(longitude, latitude))
    }

    pub fn at(coordinate: Coordinate) -> Self {
        Position {
            coordinate,
            heading: None,
        }
    }

    pub fn with_heading(self, heading: Heading) -> Self {
        Position {
            heading: Some(heading),
            ..self
        }
    }

    pub fn longitude(&self) -> f64 {
        self.coordinate.longitude
    }

    pub fn latitude(&self) -> f64 {
        self.coordinate.latitude
    }

    pub fn distance_to(&self, other: &Position) -> f64 {
        self.coordinate.distance_to(&other.coordinate)
    }

    /// True when `other` is strictly within the proximity tolerance.
    pub fn close_to(&self, other: &Position, config: &NavConfig) -> bool {
        self.distance_to(other) < config.distance_tolerance
    }

    /// Coarse check against the configured confinement rectangle.
    pub fn is_confined(&self, config: &NavConfig) -> bool {
        config.confinement_bounds.contains_strict(&self.coordinate)
    }

    /// Moves one step along a raw heading.
    ///
    /// The hover sentinel leaves the coordinate unchanged. Anything that is not
    /// a multiple of 10 in [0, 350] fails with `NavError::InvalidHeading`.
    pub fn next_position(&self, raw_heading: i32, config: &NavConfig) -> Result<Position> {
        let heading = Heading::from_raw(raw_heading, config.hover_sentinel)?;
        Ok(self.step(heading, config))
    }

    pub fn step(&self, heading: Heading, config: &NavConfig) -> Position {
        let coordinate = match heading {
            Heading::Hover => self.coordinate,
            Heading::Bearing(bearing) => {
                let radians = (bearing.degrees() as f64).to_radians();
                Coordinate::new(
                    self.coordinate.longitude + config.step_length * radians.cos(),
                    self.coordinate.latitude + config.step_length * radians.sin(),
                )
            }
        };
        Position {
            coordinate,
            heading: Some(heading),
        }
    }
}
