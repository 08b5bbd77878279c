//! Ascending staircases.

use super::{Prefab, PutFn};
use crate::block::BlockId;
use crate::error::{ComposerError, Result};
use crate::geometry::{Orientation, Point};

/// A staircase: each step is one block further forward and one block
/// higher, `width` blocks wide along the frame's lateral axis.
#[derive(Debug)]
pub struct Stairs {
    pub(crate) orientation: Orientation,
    pub(crate) children: Vec<Prefab>,
    material: BlockId,
    steps: i32,
    width: i32,
}

impl Stairs {
    pub fn new(orientation: Orientation, material: BlockId, steps: i32, width: i32) -> Result<Self> {
        if steps < 1 {
            return Err(ComposerError::Dimension(
                "Stairs must have at least 1 step".to_string(),
            ));
        }
        if width < 1 {
            return Err(ComposerError::Dimension(
                "Stairs width must be at least 1 block".to_string(),
            ));
        }
        Ok(Self {
            orientation,
            children: Vec::new(),
            material,
            steps,
            width,
        })
    }

    pub(crate) fn draw(&self, put: &mut PutFn) {
        for step in 0..self.steps {
            for lateral in 0..self.width {
                put(self.orientation, Point::new(step, step, lateral), self.material);
            }
        }
    }

    /// Frame at the top step, lateral 0, height `steps - 1`.
    pub(crate) fn child_orientation(&self) -> Orientation {
        let top = self.steps - 1;
        let landing = self.orientation.transform(Point::new(top, top, 0));
        Orientation::new(landing, self.orientation.rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rotation;

    fn positions(stairs: &Stairs) -> Vec<Point> {
        let mut out = Vec::new();
        stairs.draw(&mut |frame, local, _| out.push(frame.transform(local)));
        out
    }

    #[test]
    fn test_steps_rise_one_block_per_step() {
        let frame = Orientation::new(Point::new(0, 0, 0), Rotation::None);
        let stairs = Stairs::new(frame, BlockId::Cobblestone, 3, 1).unwrap();

        assert_eq!(
            positions(&stairs),
            vec![Point::new(0, 0, 0), Point::new(1, 1, 0), Point::new(2, 2, 0)]
        );
    }

    #[test]
    fn test_width_extends_laterally() {
        let frame = Orientation::new(Point::new(0, 0, 0), Rotation::None);
        let stairs = Stairs::new(frame, BlockId::Cobblestone, 2, 2).unwrap();

        let cells = positions(&stairs);
        assert_eq!(cells.len(), 4);
        assert!(cells.contains(&Point::new(0, 0, 1)));
        assert!(cells.contains(&Point::new(1, 1, 1)));
    }

    #[test]
    fn test_rotated_stairs_ascend_along_z() {
        let frame = Orientation::new(Point::new(0, 0, 0), Rotation::Clockwise90);
        let stairs = Stairs::new(frame, BlockId::Cobblestone, 2, 2).unwrap();

        let cells = positions(&stairs);
        // Forward maps to +Z, lateral to +X.
        assert!(cells.contains(&Point::new(0, 0, 0)));
        assert!(cells.contains(&Point::new(1, 0, 0)));
        assert!(cells.contains(&Point::new(0, 1, 1)));
        assert!(cells.contains(&Point::new(1, 1, 1)));
    }

    #[test]
    fn test_child_orientation_is_the_top_landing() {
        let frame = Orientation::new(Point::new(5, 1, 5), Rotation::None);
        let stairs = Stairs::new(frame, BlockId::Cobblestone, 4, 2).unwrap();

        assert_eq!(
            stairs.child_orientation(),
            Orientation::new(Point::new(8, 4, 5), Rotation::None)
        );
    }

    #[test]
    fn test_dimension_validation() {
        let frame = Orientation::identity();

        let err = Stairs::new(frame, BlockId::Cobblestone, 0, 1).unwrap_err();
        assert_eq!(err.to_string(), "Stairs must have at least 1 step");

        let err = Stairs::new(frame, BlockId::Cobblestone, 3, 0).unwrap_err();
        assert_eq!(err.to_string(), "Stairs width must be at least 1 block");
    }
}
