// src/error.rs

use crate::geometry::Coordinate;
use thiserror::Error;

/// Errors raised by the stepping core and the geofence/config loaders.
#[derive(Debug, Error)]
pub enum NavError {
    /// Raw heading that is neither the hover sentinel nor a multiple of 10 in [0, 350].
    #[error("{0} is not a valid heading")]
    InvalidHeading(i32),

    #[error("no safe heading from {from} towards {target} after {attempts} attempts")]
    NoValidHeading {
        from: Coordinate,
        target: Coordinate,
        attempts: usize,
    },

    #[error("target not reached within {moves} moves")]
    MoveLimitReached { moves: usize },

    #[error("polygon needs at least 3 distinct vertices, got {vertices}")]
    MalformedPolygon { vertices: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NavError>;
