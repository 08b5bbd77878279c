//! Rectangular rooms assembled from the primitive prefabs.

use super::{Prefab, PrefabFactory, RoofStyle, WindowOptions};
use crate::block::BlockId;
use crate::error::{ComposerError, Result};
use crate::geometry::{Orientation, Point, Rotation};
use std::fmt;
use std::sync::Arc;

/// Wall side of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Front,
    Back,
    Left,
    Right,
}

/// Corner placement for staircases inside a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StairCorner {
    FrontLeft,
    FrontRight,
    BackLeft,
    BackRight,
}

/// A room: a logical container translating room-level parameters
/// (side, corner, offsets) into positioned primitives. Draws nothing
/// itself.
///
/// Side geometry, before the room's own rotation: front is the depth-0
/// edge, back the depth-(depth-1) edge, left the width-0 edge, right
/// the width-(width-1) edge. Each wall is `dimension - 1` long and the
/// four sides chain corner to corner (0°, 90°, 180°, 270°), so together
/// they tile the perimeter exactly once. Corner offsets are added to
/// the room anchor unrotated; only rotations compose.
pub struct Room {
    pub(crate) orientation: Orientation,
    pub(crate) children: Vec<Prefab>,
    width: i32,
    depth: i32,
    height: i32,
    factory: Arc<dyn PrefabFactory>,
}

impl Room {
    pub fn new(
        orientation: Orientation,
        width: i32,
        depth: i32,
        height: i32,
        factory: Arc<dyn PrefabFactory>,
    ) -> Result<Self> {
        if width < 1 {
            return Err(ComposerError::Dimension(
                "Room width must be at least 1 block".to_string(),
            ));
        }
        if depth < 1 {
            return Err(ComposerError::Dimension(
                "Room depth must be at least 1 block".to_string(),
            ));
        }
        if height < 1 {
            return Err(ComposerError::Dimension(
                "Room height must be at least 1 block".to_string(),
            ));
        }
        Ok(Self {
            orientation,
            children: Vec::new(),
            width,
            depth,
            height,
            factory,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn depth(&self) -> i32 {
        self.depth
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Corner offset, wall rotation and wall length for a side.
    fn side_config(&self, side: Side) -> (Point, Rotation, i32) {
        match side {
            Side::Front => (Point::ZERO, Rotation::None, self.width - 1),
            Side::Right => (
                Point::new(self.width - 1, 0, 0),
                Rotation::Clockwise90,
                self.depth - 1,
            ),
            Side::Back => (
                Point::new(self.width - 1, 0, self.depth - 1),
                Rotation::Clockwise180,
                self.width - 1,
            ),
            Side::Left => (
                Point::new(0, 0, self.depth - 1),
                Rotation::Clockwise270,
                self.depth - 1,
            ),
        }
    }

    /// Corner offset and ascent rotation for a staircase; stairs hug
    /// the walls clockwise so they climb inside the footprint.
    fn corner_config(&self, corner: StairCorner) -> (Point, Rotation) {
        match corner {
            StairCorner::FrontLeft => (Point::ZERO, Rotation::None),
            StairCorner::FrontRight => (Point::new(self.width - 1, 0, 0), Rotation::Clockwise90),
            StairCorner::BackRight => (
                Point::new(self.width - 1, 0, self.depth - 1),
                Rotation::Clockwise180,
            ),
            StairCorner::BackLeft => (Point::new(0, 0, self.depth - 1), Rotation::Clockwise270),
        }
    }

    /// Frame of a side at wall layer `y`.
    fn side_orientation(&self, side: Side, y: i32) -> Orientation {
        let (offset, rotation, _) = self.side_config(side);
        let anchor = self.orientation.anchor + offset + Point::new(0, y, 0);
        Orientation::new(anchor, self.orientation.rotation.compose(rotation))
    }

    /// Add a floor slab at `y_offset` above the room's base.
    pub fn add_floor(&mut self, material: BlockId, y_offset: i32) -> Result<&mut Self> {
        let anchor = self.orientation.anchor + Point::new(0, y_offset, 0);
        let frame = Orientation::new(anchor, self.orientation.rotation);
        let floor = self
            .factory
            .create_floor(frame, material, self.width, self.depth)?;
        self.children.push(Prefab::Floor(floor));
        Ok(self)
    }

    /// Add a ceiling: a floor slab at the room's height.
    pub fn add_ceiling(&mut self, material: BlockId) -> Result<&mut Self> {
        let height = self.height;
        self.add_floor(material, height)
    }

    /// Add a full-height wall on `side`: one wall per layer from y = 1
    /// up to the room height.
    pub fn add_wall(&mut self, side: Side, material: BlockId) -> Result<&mut Self> {
        let height = self.height;
        self.add_wall_span(side, material, 1, height)
    }

    /// Add a partial wall on `side`, spanning `wall_height` layers
    /// starting at `start_height`.
    pub fn add_wall_span(
        &mut self,
        side: Side,
        material: BlockId,
        start_height: i32,
        wall_height: i32,
    ) -> Result<&mut Self> {
        if wall_height < 1 {
            return Err(ComposerError::Dimension(
                "Wall height must be at least 1 block".to_string(),
            ));
        }
        let (_, _, length) = self.side_config(side);
        for y in start_height..start_height + wall_height {
            let frame = self.side_orientation(side, y);
            let wall = self.factory.create_wall(frame, material, length)?;
            self.children.push(Prefab::Wall(wall));
        }
        Ok(self)
    }

    /// Add a window on `side`, `offset_along` steps along the wall's
    /// run and `offset_height` above the room's base.
    pub fn add_window(
        &mut self,
        side: Side,
        offset_along: i32,
        offset_height: i32,
        options: WindowOptions,
    ) -> Result<&mut Self> {
        let base = self.side_orientation(side, offset_height);
        let anchor = base.anchor + base.rotation.advance(offset_along);
        let window = self
            .factory
            .create_window(Orientation::new(anchor, base.rotation), options)?;
        self.children.push(Prefab::Window(window));
        Ok(self)
    }

    /// Add a door on `side`, `offset_along` steps along the wall's run,
    /// one block above the room's base.
    pub fn add_door(
        &mut self,
        side: Side,
        offset_along: i32,
        material: BlockId,
    ) -> Result<&mut Self> {
        let base = self.side_orientation(side, 1);
        let anchor = base.anchor + base.rotation.advance(offset_along);
        let door = self
            .factory
            .create_door(Orientation::new(anchor, base.rotation), material)?;
        self.children.push(Prefab::Door(door));
        Ok(self)
    }

    /// Add a staircase rising from `corner`, one block above the room's
    /// base.
    pub fn add_stairs(
        &mut self,
        corner: StairCorner,
        material: BlockId,
        steps: i32,
        width: i32,
    ) -> Result<&mut Self> {
        let (offset, rotation) = self.corner_config(corner);
        let anchor = self.orientation.anchor + offset + Point::new(0, 1, 0);
        let frame = Orientation::new(anchor, self.orientation.rotation.compose(rotation));
        let stairs = self.factory.create_stairs(frame, material, steps, width)?;
        self.children.push(Prefab::Stairs(stairs));
        Ok(self)
    }

    /// Add a roof covering the room's footprint, sitting at the room
    /// height.
    pub fn add_roof(&mut self, material: BlockId, style: RoofStyle) -> Result<&mut Self> {
        let anchor = self.orientation.anchor + Point::new(0, self.height, 0);
        let frame = Orientation::new(anchor, self.orientation.rotation);
        let roof = self
            .factory
            .create_roof(frame, material, self.width, self.depth, style)?;
        self.children.push(Prefab::Roof(roof));
        Ok(self)
    }
}

impl fmt::Debug for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Room")
            .field("orientation", &self.orientation)
            .field("width", &self.width)
            .field("depth", &self.depth)
            .field("height", &self.height)
            .field("children", &self.children)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefab::DefaultPrefabFactory;

    fn room(width: i32, depth: i32, height: i32) -> Room {
        let frame = Orientation::new(Point::new(10, 0, 10), Rotation::None);
        Room::new(frame, width, depth, height, Arc::new(DefaultPrefabFactory)).unwrap()
    }

    fn build(room: Room) -> Vec<(Point, BlockId)> {
        let mut cells = Vec::new();
        Prefab::Room(room).build(&mut |frame, local, material| {
            cells.push((frame.transform(local), material));
        });
        cells
    }

    #[test]
    fn test_dimension_validation() {
        let frame = Orientation::identity();
        let factory: Arc<dyn PrefabFactory> = Arc::new(DefaultPrefabFactory);

        for (w, d, h, message) in [
            (0, 3, 2, "Room width must be at least 1 block"),
            (3, 0, 2, "Room depth must be at least 1 block"),
            (3, 3, 0, "Room height must be at least 1 block"),
        ] {
            let err = Room::new(frame, w, d, h, Arc::clone(&factory)).unwrap_err();
            assert_eq!(err.to_string(), message);
        }
    }

    #[test]
    fn test_floor_covers_the_footprint() {
        let mut r = room(4, 3, 2);
        r.add_floor(BlockId::OakPlanks, 0).unwrap();

        let cells = build(r);
        assert_eq!(cells.len(), 12);
        assert!(cells.contains(&(Point::new(10, 0, 10), BlockId::OakPlanks)));
        assert!(cells.contains(&(Point::new(13, 0, 12), BlockId::OakPlanks)));
    }

    #[test]
    fn test_ceiling_sits_at_the_room_height() {
        let mut r = room(2, 2, 3);
        r.add_ceiling(BlockId::SprucePlanks).unwrap();

        let cells = build(r);
        assert!(cells.iter().all(|(p, _)| p.y == 3));
    }

    #[test]
    fn test_four_walls_tile_the_perimeter_exactly_once() {
        let mut r = room(4, 3, 2);
        r.add_wall(Side::Front, BlockId::StoneBricks)
            .unwrap()
            .add_wall(Side::Right, BlockId::StoneBricks)
            .unwrap()
            .add_wall(Side::Back, BlockId::StoneBricks)
            .unwrap()
            .add_wall(Side::Left, BlockId::StoneBricks)
            .unwrap();

        let cells = build(r);
        // Perimeter of a 4x3 footprint is 10 cells, over 2 layers.
        assert_eq!(cells.len(), 20);

        let unique: std::collections::HashSet<Point> =
            cells.iter().map(|(p, _)| *p).collect();
        assert_eq!(unique.len(), 20, "walls must not overlap");

        for (p, _) in &cells {
            assert!(p.y == 1 || p.y == 2);
            let on_x_edge = p.x == 10 || p.x == 13;
            let on_z_edge = p.z == 10 || p.z == 12;
            assert!(on_x_edge || on_z_edge, "cell {} is inside the room", p);
        }

        // All four corners are present.
        for corner in [
            Point::new(10, 1, 10),
            Point::new(13, 1, 10),
            Point::new(13, 1, 12),
            Point::new(10, 1, 12),
        ] {
            assert!(unique.contains(&corner), "missing corner {}", corner);
        }
    }

    #[test]
    fn test_wall_span_covers_the_requested_layers() {
        let mut r = room(4, 3, 5);
        r.add_wall_span(Side::Front, BlockId::BrickBlock, 2, 2).unwrap();

        let cells = build(r);
        assert_eq!(cells.len(), 6);
        assert!(cells.iter().all(|(p, _)| p.y == 2 || p.y == 3));
    }

    #[test]
    fn test_wall_span_validates_height() {
        let mut r = room(4, 3, 2);
        let err = r.add_wall_span(Side::Front, BlockId::BrickBlock, 1, 0).unwrap_err();
        assert_eq!(err.to_string(), "Wall height must be at least 1 block");
    }

    #[test]
    fn test_window_lands_on_the_front_wall() {
        let mut r = room(5, 4, 3);
        r.add_window(Side::Front, 2, 1, WindowOptions::default()).unwrap();

        let cells = build(r);
        assert_eq!(cells.len(), 4);
        for expected in [
            Point::new(12, 1, 10),
            Point::new(12, 2, 10),
            Point::new(13, 1, 10),
            Point::new(13, 2, 10),
        ] {
            assert!(cells.contains(&(expected, BlockId::GlassPane)));
        }
    }

    #[test]
    fn test_window_on_the_right_wall_walks_along_z() {
        let mut r = room(5, 4, 3);
        r.add_window(Side::Right, 1, 1, WindowOptions::default()).unwrap();

        let cells = build(r);
        // Right side runs +Z from (14, y, 10); one step along is z = 11.
        assert!(cells.contains(&(Point::new(14, 1, 11), BlockId::GlassPane)));
        assert!(cells.contains(&(Point::new(14, 2, 12), BlockId::GlassPane)));
    }

    #[test]
    fn test_door_sits_one_above_the_base() {
        let mut r = room(5, 4, 3);
        r.add_door(Side::Front, 2, BlockId::OakDoor).unwrap();

        let cells = build(r);
        assert_eq!(cells, vec![(Point::new(12, 1, 10), BlockId::OakDoor)]);
    }

    #[test]
    fn test_stairs_climb_inside_the_footprint() {
        let mut r = room(4, 4, 3);
        r.add_stairs(StairCorner::FrontRight, BlockId::Cobblestone, 3, 1)
            .unwrap();

        let cells = build(r);
        // Front-right corner ascends +Z along the x = 13 edge.
        assert_eq!(
            cells.iter().map(|(p, _)| *p).collect::<Vec<_>>(),
            vec![Point::new(13, 1, 10), Point::new(13, 2, 11), Point::new(13, 3, 12)]
        );
    }

    #[test]
    fn test_roof_covers_the_footprint_at_the_room_height() {
        let mut r = room(4, 3, 2);
        r.add_roof(BlockId::SprucePlanks, RoofStyle::Flat).unwrap();

        let cells = build(r);
        assert_eq!(cells.len(), 12);
        assert!(cells.iter().all(|(p, _)| p.y == 2));
    }

    #[test]
    fn test_room_rotation_composes_into_side_frames() {
        let frame = Orientation::new(Point::new(0, 0, 0), Rotation::Clockwise90);
        let mut r = Room::new(frame, 4, 3, 2, Arc::new(DefaultPrefabFactory)).unwrap();
        r.add_wall(Side::Front, BlockId::Stone).unwrap();

        let r = Prefab::Room(r);
        assert_eq!(
            r.children()[0].orientation().rotation,
            Rotation::Clockwise90
        );
    }
}
