//! Single-block doors.

use super::{Prefab, PutFn};
use crate::block::BlockId;
use crate::geometry::{Orientation, Point};

/// A door: exactly one block at the frame's own anchor. Unlike a wall,
/// a door paints its anchor cell and does not advance the frame.
#[derive(Debug)]
pub struct Door {
    pub(crate) orientation: Orientation,
    pub(crate) children: Vec<Prefab>,
    material: BlockId,
}

impl Door {
    pub fn new(orientation: Orientation, material: BlockId) -> Self {
        Self {
            orientation,
            children: Vec::new(),
            material,
        }
    }

    pub fn material(&self) -> BlockId {
        self.material
    }

    pub(crate) fn draw(&self, put: &mut PutFn) {
        put(self.orientation, Point::ZERO, self.material);
    }
}
