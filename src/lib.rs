// src/lib.rs
//! Single-step navigation for a drone flying between points inside a geofenced
//! area. Each move has a fixed length and one of 36 compass headings; the core
//! finds the heading nearest the target whose move the geofence allows.

pub mod config;
pub mod error;
pub mod geometry;
pub mod map;
pub mod nav;

pub use config::{NavConfig, RejectionPolicy};
pub use error::{NavError, Result};
pub use geometry::{BoundingBox, Coordinate, Segment};
pub use map::{Geofence, GeofenceStore, Polygon};
pub use nav::{approach, move_towards, step_fleet, Heading, HeadingSearch, Position};
