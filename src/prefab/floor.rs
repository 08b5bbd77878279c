//! Rectangular floor slabs.

use super::{Prefab, PutFn};
use crate::block::BlockId;
use crate::error::{ComposerError, Result};
use crate::geometry::{Orientation, Point};

/// A flat `width x depth` rectangle at the frame's height 0. Width runs
/// along the frame's forward axis, depth along the perpendicular axis.
#[derive(Debug)]
pub struct Floor {
    pub(crate) orientation: Orientation,
    pub(crate) children: Vec<Prefab>,
    material: BlockId,
    width: i32,
    depth: i32,
}

impl Floor {
    pub fn new(orientation: Orientation, material: BlockId, width: i32, depth: i32) -> Result<Self> {
        if width < 1 {
            return Err(ComposerError::Dimension(
                "Floor width must be at least 1 block".to_string(),
            ));
        }
        if depth < 1 {
            return Err(ComposerError::Dimension(
                "Floor depth must be at least 1 block".to_string(),
            ));
        }
        Ok(Self {
            orientation,
            children: Vec::new(),
            material,
            width,
            depth,
        })
    }

    pub(crate) fn draw(&self, put: &mut PutFn) {
        for w in 0..self.width {
            for d in 0..self.depth {
                put(self.orientation, Point::new(w, 0, d), self.material);
            }
        }
    }

    /// Frame at the far corner of the slab, same rotation.
    pub(crate) fn child_orientation(&self) -> Orientation {
        let corner = self
            .orientation
            .transform(Point::new(self.width - 1, 0, self.depth - 1));
        Orientation::new(corner, self.orientation.rotation)
    }
}
