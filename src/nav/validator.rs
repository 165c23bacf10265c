// src/nav/validator.rs
// Decides whether a single straight-line move is allowed by the geofence.

use crate::config::RejectionPolicy;
use crate::geometry::{Coordinate, Segment};
use crate::map::Geofence;
use crate::nav::Position;

/// Which boundaries a move touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveCheck {
    pub crosses_confinement: bool,
    pub crosses_no_fly_zone: bool,
}

impl MoveCheck {
    pub fn is_valid(&self, policy: RejectionPolicy) -> bool {
        match policy {
            RejectionPolicy::Conjunctive => !(self.crosses_confinement && self.crosses_no_fly_zone),
            RejectionPolicy::Disjunctive => !(self.crosses_confinement || self.crosses_no_fly_zone),
        }
    }
}

/// Tests the segment `from -> to` against every confinement edge and every
/// no-fly edge. Endpoints are ordered first so the answer does not depend on
/// the direction of travel.
pub fn check_move(from: &Coordinate, to: &Coordinate, geofence: &Geofence) -> MoveCheck {
    let segment = Segment::new(*from, *to).canonical();
    MoveCheck {
        crosses_confinement: geofence.crosses_confinement(&segment),
        crosses_no_fly_zone: geofence.crosses_no_fly_zone(&segment),
    }
}

/// Under the default conjunctive policy a move is rejected only when it crosses
/// the confinement boundary and a no-fly zone at once.
pub fn is_valid_move(
    from: &Position,
    to: &Position,
    geofence: &Geofence,
    policy: RejectionPolicy,
) -> bool {
    check_move(&from.coordinate, &to.coordinate, geofence).is_valid(policy)
}
