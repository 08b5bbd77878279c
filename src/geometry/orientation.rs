//! Local coordinate frames.

use super::{Point, Rotation};

/// A local coordinate frame: an anchor point plus one of the four
/// rotations. Offsets expressed relative to the frame resolve to world
/// coordinates through [`Orientation::transform`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Orientation {
    pub anchor: Point,
    pub rotation: Rotation,
}

impl Orientation {
    pub fn new(anchor: Point, rotation: Rotation) -> Self {
        Self { anchor, rotation }
    }

    /// The frame at the origin with no rotation.
    pub fn identity() -> Self {
        Self::default()
    }

    /// Same anchor, rotation combined with `extra`.
    pub fn rotated(self, extra: Rotation) -> Self {
        Self::new(self.anchor, self.rotation.compose(extra))
    }

    /// Resolve a frame-local offset to world coordinates: rotate about
    /// the frame's Y axis, then translate by the anchor.
    ///
    /// The 90 and 270 rows swap the local x and z axes instead of
    /// negating through a proper rotation; placement data downstream
    /// depends on these exact rows, so they are a wire-level contract.
    pub fn transform(self, local: Point) -> Point {
        let Point { x, y, z } = local;
        let a = self.anchor;
        match self.rotation {
            Rotation::None => Point::new(a.x + x, a.y + y, a.z + z),
            Rotation::Clockwise90 => Point::new(a.x + z, a.y + y, a.z + x),
            Rotation::Clockwise180 => Point::new(a.x - x, a.y + y, a.z - z),
            Rotation::Clockwise270 => Point::new(a.x + z, a.y + y, a.z - x),
        }
    }
}
