//! Flat glass panes.

use super::{Prefab, PutFn};
use crate::block::BlockId;
use crate::error::{ComposerError, Result};
use crate::geometry::{Orientation, Point, Rotation};

/// Window dimensions in blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub width: i32,
    pub height: i32,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: 2,
            height: 2,
        }
    }
}

/// Options for creating a window. Size defaults to 2x2, material to a
/// glass pane.
#[derive(Debug, Clone, Copy)]
pub struct WindowOptions {
    pub size: WindowSize,
    pub material: BlockId,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            size: WindowSize::default(),
            material: BlockId::GlassPane,
        }
    }
}

/// A window: a `width x height` rectangle standing in the frame's local
/// XY plane at local z = 0.
#[derive(Debug)]
pub struct Window {
    pub(crate) orientation: Orientation,
    pub(crate) children: Vec<Prefab>,
    size: WindowSize,
    material: BlockId,
}

impl Window {
    pub fn new(orientation: Orientation, options: WindowOptions) -> Result<Self> {
        if options.size.width < 1 {
            return Err(ComposerError::Dimension(
                "Window width must be at least 1".to_string(),
            ));
        }
        if options.size.height < 1 {
            return Err(ComposerError::Dimension(
                "Window height must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            orientation,
            children: Vec::new(),
            size: options.size,
            material: options.material,
        })
    }

    pub fn size(&self) -> WindowSize {
        self.size
    }

    pub fn material(&self) -> BlockId {
        self.material
    }

    /// Frame-local cells the pane covers.
    pub fn occupied_points(&self) -> Vec<Point> {
        let mut points = Vec::with_capacity((self.size.width * self.size.height) as usize);
        for x in 0..self.size.width {
            for y in 0..self.size.height {
                points.push(Point::new(x, y, 0));
            }
        }
        points
    }

    /// World-space cells, resolved through the window's frame. The
    /// anchor uses these for its occupancy check before accepting the
    /// window into the tree.
    pub fn world_points(&self) -> Vec<Point> {
        self.occupied_points()
            .into_iter()
            .map(|p| self.orientation.transform(p))
            .collect()
    }

    pub(crate) fn draw(&self, put: &mut PutFn) {
        for point in self.occupied_points() {
            put(self.orientation, point, self.material);
        }
    }

    /// Frame one step past the window's right edge, same rotation.
    pub(crate) fn child_orientation(&self) -> Orientation {
        let edge = self
            .orientation
            .transform(Rotation::None.advance(self.size.width));
        Orientation::new(edge, self.orientation.rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(window: &Window) -> Vec<(Point, BlockId)> {
        let mut out = Vec::new();
        window.draw(&mut |frame, local, material| {
            out.push((frame.transform(local), material));
        });
        out
    }

    #[test]
    fn test_default_window_is_a_2x2_glass_pane() {
        let frame = Orientation::new(Point::new(1, 2, 3), Rotation::None);
        let window = Window::new(frame, WindowOptions::default()).unwrap();

        let placed = cells(&window);
        assert_eq!(placed.len(), 4);
        for expected in [
            Point::new(1, 2, 3),
            Point::new(1, 3, 3),
            Point::new(2, 2, 3),
            Point::new(2, 3, 3),
        ] {
            assert!(placed.contains(&(expected, BlockId::GlassPane)));
        }
    }

    #[test]
    fn test_custom_size_and_material() {
        let frame = Orientation::new(Point::new(1, 2, 3), Rotation::None);
        let options = WindowOptions {
            size: WindowSize {
                width: 3,
                height: 4,
            },
            material: BlockId::WhiteStainedGlass,
        };
        let window = Window::new(frame, options).unwrap();

        let placed = cells(&window);
        assert_eq!(placed.len(), 12);
        for x in 0..3 {
            for y in 0..4 {
                assert!(placed.contains(&(Point::new(1 + x, 2 + y, 3), BlockId::WhiteStainedGlass)));
            }
        }
    }

    #[test]
    fn test_rotated_window_stands_along_z() {
        let frame = Orientation::new(Point::new(1, 2, 3), Rotation::Clockwise90);
        let window = Window::new(frame, WindowOptions::default()).unwrap();

        let placed: Vec<Point> = cells(&window).into_iter().map(|(p, _)| p).collect();
        for expected in [
            Point::new(1, 2, 3),
            Point::new(1, 3, 3),
            Point::new(1, 2, 4),
            Point::new(1, 3, 4),
        ] {
            assert!(placed.contains(&expected));
        }
    }

    #[test]
    fn test_block_count_is_rotation_independent() {
        for rotation in Rotation::ALL {
            let frame = Orientation::new(Point::new(1, 2, 3), rotation);
            let window = Window::new(frame, WindowOptions::default()).unwrap();
            assert_eq!(cells(&window).len(), 4);
        }
    }

    #[test]
    fn test_dimension_validation_messages() {
        let frame = Orientation::identity();

        let zero_width = WindowOptions {
            size: WindowSize {
                width: 0,
                height: 2,
            },
            ..WindowOptions::default()
        };
        let err = Window::new(frame, zero_width).unwrap_err();
        assert_eq!(err.to_string(), "Window width must be at least 1");

        let zero_height = WindowOptions {
            size: WindowSize {
                width: 2,
                height: 0,
            },
            ..WindowOptions::default()
        };
        let err = Window::new(frame, zero_height).unwrap_err();
        assert_eq!(err.to_string(), "Window height must be at least 1");

        let negative_width = WindowOptions {
            size: WindowSize {
                width: -1,
                height: 2,
            },
            ..WindowOptions::default()
        };
        let err = Window::new(frame, negative_width).unwrap_err();
        assert_eq!(err.to_string(), "Window width must be at least 1");
    }

    #[test]
    fn test_child_orientation_passes_the_right_edge() {
        let frame = Orientation::new(Point::new(1, 2, 3), Rotation::None);
        let window = Window::new(frame, WindowOptions::default()).unwrap();
        assert_eq!(
            window.child_orientation(),
            Orientation::new(Point::new(3, 2, 3), Rotation::None)
        );
    }

    #[test]
    fn test_world_points_match_draw() {
        let frame = Orientation::new(Point::new(5, 0, -2), Rotation::Clockwise180);
        let window = Window::new(frame, WindowOptions::default()).unwrap();

        let drawn: Vec<Point> = cells(&window).into_iter().map(|(p, _)| p).collect();
        assert_eq!(window.world_points(), drawn);
    }
}
