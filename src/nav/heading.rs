// src/nav/heading.rs

use crate::error::{NavError, Result};
use crate::geometry::Coordinate;
use std::fmt;

/// Spacing between neighbouring discrete headings, in degrees.
pub const HEADING_STEP: i32 = 10;
/// Number of discrete compass headings.
pub const HEADING_COUNT: usize = 36;

/// A compass bearing in whole tens of degrees, 0 through 350.
///
/// The field is private, so every `Bearing` comes from [`Bearing::new`] or
/// from arithmetic inside this module that keeps it on the 10 degree grid.
///
/// ```compile_fail
/// use drone_step::nav::heading::Bearing;
/// let _ = Bearing(5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bearing(u16);

impl Bearing {
    pub fn new(degrees: i32) -> Result<Self> {
        if is_bearing(degrees) {
            Ok(Bearing(degrees as u16))
        } else {
            Err(NavError::InvalidHeading(degrees))
        }
    }

    pub fn degrees(self) -> i32 {
        self.0 as i32
    }

    fn wrapped(degrees: i32) -> Self {
        debug_assert_eq!(degrees % HEADING_STEP, 0);
        Bearing(valid_angle(degrees) as u16)
    }
}

/// Direction of one move: a compass bearing, or hover.
///
/// Bearings follow the mathematical convention: 0 points along +longitude and
/// angles grow counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    Bearing(Bearing),
    Hover,
}

/// True for 0, 10, ..., 350.
pub fn is_bearing(degrees: i32) -> bool {
    (0..=350).contains(&degrees) && degrees % HEADING_STEP == 0
}

/// Wraps any angle into [0, 360).
pub fn valid_angle(angle: i32) -> i32 {
    angle.rem_euclid(360)
}

impl Heading {
    pub fn bearing(degrees: i32) -> Result<Self> {
        Bearing::new(degrees).map(Heading::Bearing)
    }

    /// Interprets a raw heading as supplied by callers, where `hover_sentinel`
    /// stands for [`Heading::Hover`]. A real bearing always wins over the
    /// sentinel.
    pub fn from_raw(raw: i32, hover_sentinel: i32) -> Result<Self> {
        if is_bearing(raw) {
            Heading::bearing(raw)
        } else if raw == hover_sentinel {
            Ok(Heading::Hover)
        } else {
            Err(NavError::InvalidHeading(raw))
        }
    }

    /// Bearing from `from` to `to`, rounded to the nearest ten degrees (ties up).
    pub fn toward(from: &Coordinate, to: &Coordinate) -> Heading {
        let d_lng = to.longitude - from.longitude;
        let d_lat = to.latitude - from.latitude;

        let mut degrees = d_lat.atan2(d_lng).to_degrees();
        if degrees < 0.0 {
            degrees += 360.0;
        }
        let rounded = (degrees / HEADING_STEP as f64).round() as i32 * HEADING_STEP;
        Heading::Bearing(Bearing::wrapped(rounded))
    }

    pub fn degrees(self) -> Option<i32> {
        match self {
            Heading::Bearing(bearing) => Some(bearing.degrees()),
            Heading::Hover => None,
        }
    }

    /// Slot in 0..HEADING_COUNT, `None` for hover.
    pub fn index(self) -> Option<usize> {
        self.degrees().map(|d| (d / HEADING_STEP) as usize)
    }

    /// Exactly opposite bearings. Hover never reverses anything.
    pub fn is_reversal_of(self, other: Heading) -> bool {
        match (self.degrees(), other.degrees()) {
            (Some(a), Some(b)) => (a - b).abs() == 180,
            _ => false,
        }
    }

    // Only called with multiples of HEADING_STEP, so the result stays a bearing.
    pub(crate) fn rotated(self, delta: i32) -> Heading {
        match self {
            Heading::Bearing(bearing) => Heading::Bearing(Bearing::wrapped(bearing.degrees() + delta)),
            Heading::Hover => Heading::Hover,
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Heading::Bearing(bearing) => write!(f, "{}°", bearing.degrees()),
            Heading::Hover => write!(f, "hover"),
        }
    }
}
