//! Straight runs of blocks.

use super::{Prefab, PutFn};
use crate::block::BlockId;
use crate::error::{ComposerError, Result};
use crate::geometry::{Orientation, Rotation};

/// A wall: `length` blocks along the frame's forward axis, starting one
/// step past the anchor. The anchor cell itself is never painted, which
/// is what lets chained walls share corners without overdraw.
#[derive(Debug)]
pub struct Wall {
    pub(crate) orientation: Orientation,
    pub(crate) children: Vec<Prefab>,
    material: BlockId,
    length: i32,
}

impl Wall {
    pub fn new(orientation: Orientation, material: BlockId, length: i32) -> Result<Self> {
        if length < 1 {
            return Err(ComposerError::Dimension(
                "Wall length must be at least 1 block".to_string(),
            ));
        }
        Ok(Self {
            orientation,
            children: Vec::new(),
            material,
            length,
        })
    }

    pub fn length(&self) -> i32 {
        self.length
    }

    pub fn material(&self) -> BlockId {
        self.material
    }

    pub(crate) fn draw(&self, put: &mut PutFn) {
        for offset in 1..=self.length {
            put(self.orientation, Rotation::None.advance(offset), self.material);
        }
    }

    /// Frame at the wall's far end, same rotation.
    pub(crate) fn child_orientation(&self) -> Orientation {
        let end = self.orientation.transform(Rotation::None.advance(self.length));
        Orientation::new(end, self.orientation.rotation)
    }
}
