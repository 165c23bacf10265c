// src/nav/search.rs
//! Heading search: pick the discrete heading nearest to the bearing of the
//! target whose step the geofence allows.
//!
//! Candidates fan out from the initial bearing, alternating sides and widening
//! by ten degrees each time: `h, h+10, h-10, h+20, h-20, ...`. A candidate that
//! would reverse the previous move is nudged ten degrees further the same way.
//! Each of the 36 headings is tried at most once, so the search always ends.

use crate::config::NavConfig;
use crate::error::{NavError, Result};
use crate::geometry::Coordinate;
use crate::map::Geofence;
use crate::nav::heading::{HEADING_COUNT, HEADING_STEP};
use crate::nav::validator::check_move;
use crate::nav::{Heading, Position};
use log::{debug, warn};

/// Signed offsets from the initial bearing, in trial order.
fn spiral_offsets() -> impl Iterator<Item = i32> {
    let widest = (HEADING_COUNT / 2) as i32;
    std::iter::once(0).chain((1..=widest).flat_map(|k| [k * HEADING_STEP, -k * HEADING_STEP]))
}

/// Borrowed view of the airspace and tuning values, shareable across threads.
#[derive(Debug, Clone, Copy)]
pub struct HeadingSearch<'a> {
    geofence: &'a Geofence,
    config: &'a NavConfig,
}

impl<'a> HeadingSearch<'a> {
    pub fn new(geofence: &'a Geofence, config: &'a NavConfig) -> Self {
        HeadingSearch { geofence, config }
    }

    pub fn config(&self) -> &NavConfig {
        self.config
    }

    /// Candidate headings in the order they will be tried.
    pub fn candidates(&self, current: &Position, target: &Coordinate) -> Vec<Heading> {
        let initial = Heading::toward(&current.coordinate, target);
        let mut tried = [false; HEADING_COUNT];
        let mut order = Vec::with_capacity(HEADING_COUNT);

        for offset in spiral_offsets() {
            let direction = if offset >= 0 { HEADING_STEP } else { -HEADING_STEP };
            let mut heading = initial.rotated(offset);
            if let Some(previous) = current.heading {
                if heading.is_reversal_of(previous) {
                    heading = heading.rotated(direction);
                }
            }

            let Some(index) = heading.index() else {
                continue;
            };
            if tried[index] {
                continue;
            }
            tried[index] = true;
            order.push(heading);
        }
        order
    }

    /// Finds the next position on the way to `target`.
    ///
    /// Fails with `NavError::NoValidHeading` when every candidate step is
    /// rejected by the geofence.
    pub fn next_move(&self, current: &Position, target: &Coordinate) -> Result<Position> {
        self.next_step(current, target).map(|(_, next)| next)
    }

    /// Like [`HeadingSearch::next_move`], also returning the accepted heading.
    pub fn next_step(&self, current: &Position, target: &Coordinate) -> Result<(Heading, Position)> {
        let candidates = self.candidates(current, target);

        for (attempt, heading) in candidates.iter().enumerate() {
            let next = current.step(*heading, self.config);
            let check = check_move(&current.coordinate, &next.coordinate, self.geofence);
            if check.is_valid(self.config.rejection_policy) {
                debug!(
                    "Accepted heading {} from {} after {} attempts",
                    heading,
                    current.coordinate,
                    attempt + 1
                );
                return Ok((*heading, next));
            }
            debug!("Rejected heading {} from {}: {:?}", heading, current.coordinate, check);
        }

        warn!(
            "No safe heading from {} towards {}",
            current.coordinate, target
        );
        Err(NavError::NoValidHeading {
            from: current.coordinate,
            target: *target,
            attempts: candidates.len(),
        })
    }
}

/// One-shot form of [`HeadingSearch::next_move`].
pub fn move_towards(
    current: &Position,
    target: &Coordinate,
    geofence: &Geofence,
    config: &NavConfig,
) -> Result<Position> {
    HeadingSearch::new(geofence, config).next_move(current, target)
}
