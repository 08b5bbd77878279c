//! The four 90-degree clockwise rotations about the Y axis.

use super::Point;
use crate::error::{ComposerError, Result};
use serde::{Deserialize, Serialize};

/// A rotation about the Y axis, restricted to quarter turns.
///
/// No other angles exist in this system; anything else fails with
/// [`ComposerError::InvalidRotation`] at the point where it enters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum Rotation {
    #[default]
    None,
    Clockwise90,
    Clockwise180,
    Clockwise270,
}

impl Rotation {
    /// All four rotations in ascending degree order.
    pub const ALL: [Rotation; 4] = [
        Rotation::None,
        Rotation::Clockwise90,
        Rotation::Clockwise180,
        Rotation::Clockwise270,
    ];

    /// Parse a degree value from the closed set {0, 90, 180, 270}.
    pub fn from_degrees(degrees: i32) -> Result<Self> {
        match degrees {
            0 => Ok(Rotation::None),
            90 => Ok(Rotation::Clockwise90),
            180 => Ok(Rotation::Clockwise180),
            270 => Ok(Rotation::Clockwise270),
            other => Err(ComposerError::InvalidRotation(other)),
        }
    }

    /// Degree value of this rotation.
    pub fn degrees(self) -> i32 {
        match self {
            Rotation::None => 0,
            Rotation::Clockwise90 => 90,
            Rotation::Clockwise180 => 180,
            Rotation::Clockwise270 => 270,
        }
    }

    /// Combine two rotations: addition modulo 360, normalized back into
    /// the four-value set.
    pub fn compose(self, other: Rotation) -> Rotation {
        match (self.degrees() + other.degrees()) % 360 {
            0 => Rotation::None,
            90 => Rotation::Clockwise90,
            180 => Rotation::Clockwise180,
            _ => Rotation::Clockwise270,
        }
    }

    /// Frame-local offset after traveling `distance` steps along the
    /// forward axis turned by this rotation.
    pub fn advance(self, distance: i32) -> Point {
        match self {
            Rotation::None => Point::new(distance, 0, 0),
            Rotation::Clockwise90 => Point::new(0, 0, distance),
            Rotation::Clockwise180 => Point::new(-distance, 0, 0),
            Rotation::Clockwise270 => Point::new(0, 0, -distance),
        }
    }
}

impl TryFrom<i32> for Rotation {
    type Error = ComposerError;

    fn try_from(degrees: i32) -> Result<Self> {
        Rotation::from_degrees(degrees)
    }
}

impl From<Rotation> for i32 {
    fn from(rotation: Rotation) -> i32 {
        rotation.degrees()
    }
}
