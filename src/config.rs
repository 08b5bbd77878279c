//! JSON structure configuration: schema and loader.
//!
//! Material names stay strings in the schema and resolve to [`BlockId`]
//! exactly once here, at the load boundary; nothing downstream of this
//! module sees a string. Unresolvable names fail with
//! [`UnknownMaterial`](crate::error::ComposerError::UnknownMaterial),
//! unrecognized roof styles with
//! [`UnknownRoofStyle`](crate::error::ComposerError::UnknownRoofStyle).

use crate::block::BlockId;
use crate::buffer::BlockBuffer;
use crate::error::Result;
use crate::geometry::{Orientation, Point, Rotation};
use crate::prefab::{
    DefaultPrefabFactory, Prefab, PrefabFactory, Room, RoofStyle, Side, StairCorner,
    WindowOptions, WindowSize,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// Position triple in a configuration file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PositionConfig {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl From<PositionConfig> for Point {
    fn from(position: PositionConfig) -> Point {
        Point::new(position.x, position.y, position.z)
    }
}

/// Complete structure configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub rooms: Vec<RoomConfig>,
}

/// One room of a structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomConfig {
    pub position: PositionConfig,
    /// Degrees; anything outside {0, 90, 180, 270} is rejected.
    pub rotation: Rotation,
    pub width: i32,
    pub depth: i32,
    pub height: i32,
    #[serde(default)]
    pub floor: Option<FloorConfig>,
    #[serde(default)]
    pub ceiling: Option<FloorConfig>,
    #[serde(default)]
    pub walls: Vec<WallConfig>,
    #[serde(default)]
    pub windows: Vec<WindowConfig>,
    #[serde(default)]
    pub doors: Vec<DoorConfig>,
    #[serde(default)]
    pub stairs: Vec<StairsConfig>,
    #[serde(default)]
    pub roof: Option<RoofConfig>,
    #[serde(default)]
    pub objects: Vec<ObjectConfig>,
    /// Optional label, carried for tooling; placement ignores it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorConfig {
    pub material: String,
    #[serde(default)]
    pub y_offset: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WallConfig {
    pub side: Side,
    pub material: String,
    #[serde(default = "default_wall_start")]
    pub start_height: i32,
    /// Layers to cover; defaults to the room height.
    #[serde(default)]
    pub wall_height: Option<i32>,
}

fn default_wall_start() -> i32 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowConfig {
    pub side: Side,
    pub offset_along: i32,
    pub offset_height: i32,
    #[serde(default)]
    pub width: Option<i32>,
    #[serde(default)]
    pub height: Option<i32>,
    #[serde(default)]
    pub material: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoorConfig {
    pub side: Side,
    pub offset_along: i32,
    pub material: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StairsConfig {
    pub corner: StairCorner,
    pub material: String,
    pub steps: i32,
    #[serde(default = "default_stairs_width")]
    pub width: i32,
}

fn default_stairs_width() -> i32 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoofConfig {
    pub material: String,
    /// Style tag, defaults to "flat".
    #[serde(default)]
    pub style: Option<String>,
}

/// A single free-standing block placement (furniture, decoration).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectConfig {
    #[serde(rename = "type")]
    pub material: String,
    pub position: PositionConfig,
    /// What the object represents; placement ignores it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Read and parse a configuration file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<StructureConfig> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Parse a configuration from a JSON string and build it.
pub fn from_json(json: &str) -> Result<BlockBuffer> {
    let config: StructureConfig = serde_json::from_str(json)?;
    build_structure(&config)
}

/// Build every room of a configuration into one buffer.
pub fn build_structure(config: &StructureConfig) -> Result<BlockBuffer> {
    let factory: Arc<dyn PrefabFactory> = Arc::new(DefaultPrefabFactory);
    let mut buffer = BlockBuffer::new();
    for room in &config.rooms {
        build_room(room, &factory, &mut buffer)?;
    }
    Ok(buffer)
}

fn build_room(
    config: &RoomConfig,
    factory: &Arc<dyn PrefabFactory>,
    buffer: &mut BlockBuffer,
) -> Result<()> {
    let orientation = Orientation::new(config.position.into(), config.rotation);
    let mut room = Room::new(
        orientation,
        config.width,
        config.depth,
        config.height,
        Arc::clone(factory),
    )?;

    if let Some(floor) = &config.floor {
        room.add_floor(BlockId::from_name(&floor.material)?, floor.y_offset)?;
    }

    for wall in &config.walls {
        let material = BlockId::from_name(&wall.material)?;
        let wall_height = wall.wall_height.unwrap_or(config.height);
        room.add_wall_span(wall.side, material, wall.start_height, wall_height)?;
    }

    for window in &config.windows {
        let mut options = WindowOptions::default();
        if let (Some(width), Some(height)) = (window.width, window.height) {
            options.size = WindowSize { width, height };
        }
        if let Some(material) = &window.material {
            options.material = BlockId::from_name(material)?;
        }
        room.add_window(window.side, window.offset_along, window.offset_height, options)?;
    }

    for door in &config.doors {
        room.add_door(door.side, door.offset_along, BlockId::from_name(&door.material)?)?;
    }

    for stairs in &config.stairs {
        room.add_stairs(
            stairs.corner,
            BlockId::from_name(&stairs.material)?,
            stairs.steps,
            stairs.width,
        )?;
    }

    if let Some(ceiling) = &config.ceiling {
        room.add_ceiling(BlockId::from_name(&ceiling.material)?)?;
    }

    if let Some(roof) = &config.roof {
        let style = match &roof.style {
            Some(tag) => tag.parse::<RoofStyle>()?,
            None => RoofStyle::Flat,
        };
        room.add_roof(BlockId::from_name(&roof.material)?, style)?;
    }

    // Objects land before the room's own blocks, so structural geometry
    // wins where they collide.
    for object in &config.objects {
        buffer.put(object.position.into(), BlockId::from_name(&object.material)?);
    }

    Prefab::Room(room).build(&mut |frame, local, material| {
        buffer.put_offset(local, frame, material);
    });

    Ok(())
}
