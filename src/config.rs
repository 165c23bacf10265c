// src/config.rs
//! Tunable values for the stepping core.
//!
//! Nothing in the core hard-codes these; every operation that needs one takes a
//! `&NavConfig`. Defaults describe the central Edinburgh campus operating area.

use crate::error::{NavError, Result};
use crate::geometry::BoundingBox;
use crate::nav::heading::is_bearing;
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Length of one move, in degrees.
pub const DEFAULT_STEP_LENGTH: f64 = 0.00015;
/// Distance under which two points count as the same place.
pub const DEFAULT_DISTANCE_TOLERANCE: f64 = 0.00015;
/// Raw heading value meaning "stay where you are".
pub const DEFAULT_HOVER_SENTINEL: i32 = -999;

// Forrest Hill to KFC (longitude), Buccleuch St bus stop to KFC (latitude).
pub const DEFAULT_CONFINEMENT: BoundingBox = BoundingBox {
    min_longitude: -3.192473,
    min_latitude: 55.942617,
    max_longitude: -3.184319,
    max_latitude: 55.946233,
};

/// How the segment validator combines its two crossing checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionPolicy {
    /// Reject only a move that crosses the confinement boundary and a no-fly edge.
    #[default]
    Conjunctive,
    /// Reject a move that crosses either.
    Disjunctive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub step_length: f64,
    pub distance_tolerance: f64,
    /// Coarse rectangle used by `Position::is_confined`.
    pub confinement_bounds: BoundingBox,
    pub hover_sentinel: i32,
    pub rejection_policy: RejectionPolicy,
}

impl Default for NavConfig {
    fn default() -> Self {
        NavConfig {
            step_length: DEFAULT_STEP_LENGTH,
            distance_tolerance: DEFAULT_DISTANCE_TOLERANCE,
            confinement_bounds: DEFAULT_CONFINEMENT,
            hover_sentinel: DEFAULT_HOVER_SENTINEL,
            rejection_policy: RejectionPolicy::default(),
        }
    }
}

impl NavConfig {
    /// Parses a JSON document; missing fields fall back to the defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: NavConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let config: NavConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.step_length.is_finite() && self.step_length > 0.0) {
            return Err(NavError::InvalidConfig(format!(
                "step_length must be positive, got {}",
                self.step_length
            )));
        }
        if !(self.distance_tolerance.is_finite() && self.distance_tolerance > 0.0) {
            return Err(NavError::InvalidConfig(format!(
                "distance_tolerance must be positive, got {}",
                self.distance_tolerance
            )));
        }
        if !self.confinement_bounds.is_well_formed() {
            return Err(NavError::InvalidConfig(
                "confinement_bounds must have min < max on both axes".to_string(),
            ));
        }
        if is_bearing(self.hover_sentinel) {
            return Err(NavError::InvalidConfig(format!(
                "hover_sentinel {} collides with a real heading",
                self.hover_sentinel
            )));
        }
        Ok(())
    }
}
