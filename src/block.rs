//! Block material identifiers.

use crate::error::{ComposerError, Result};
use std::fmt;

/// Closed set of placeable material tags.
///
/// Door and glass variants are ordinary materials here; door and window
/// sub-typing is carried by the tag itself, not by extra fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockId {
    Air,
    Stone,
    Cobblestone,
    StoneBricks,
    BrickBlock,
    OakPlanks,
    SprucePlanks,
    OakLog,
    SpruceWood,
    Glass,
    GlassPane,
    RedStainedGlass,
    OrangeStainedGlass,
    YellowStainedGlass,
    LimeStainedGlass,
    GreenStainedGlass,
    CyanStainedGlass,
    LightBlueStainedGlass,
    BlueStainedGlass,
    PurpleStainedGlass,
    MagentaStainedGlass,
    PinkStainedGlass,
    WhiteStainedGlass,
    OakDoor,
    SpruceDoor,
    AcaciaDoor,
}

impl BlockId {
    /// Tag used in text output and configuration files.
    pub fn name(self) -> &'static str {
        match self {
            BlockId::Air => "Air",
            BlockId::Stone => "Stone",
            BlockId::Cobblestone => "Cobblestone",
            BlockId::StoneBricks => "StoneBricks",
            BlockId::BrickBlock => "BrickBlock",
            BlockId::OakPlanks => "OakPlanks",
            BlockId::SprucePlanks => "SprucePlanks",
            BlockId::OakLog => "OakLog",
            BlockId::SpruceWood => "SpruceWood",
            BlockId::Glass => "Glass",
            BlockId::GlassPane => "GlassPane",
            BlockId::RedStainedGlass => "RedStainedGlass",
            BlockId::OrangeStainedGlass => "OrangeStainedGlass",
            BlockId::YellowStainedGlass => "YellowStainedGlass",
            BlockId::LimeStainedGlass => "LimeStainedGlass",
            BlockId::GreenStainedGlass => "GreenStainedGlass",
            BlockId::CyanStainedGlass => "CyanStainedGlass",
            BlockId::LightBlueStainedGlass => "LightBlueStainedGlass",
            BlockId::BlueStainedGlass => "BlueStainedGlass",
            BlockId::PurpleStainedGlass => "PurpleStainedGlass",
            BlockId::MagentaStainedGlass => "MagentaStainedGlass",
            BlockId::PinkStainedGlass => "PinkStainedGlass",
            BlockId::WhiteStainedGlass => "WhiteStainedGlass",
            BlockId::OakDoor => "OakDoor",
            BlockId::SpruceDoor => "SpruceDoor",
            BlockId::AcaciaDoor => "AcaciaDoor",
        }
    }

    /// Resolve a configuration material name.
    ///
    /// This is the only string-to-material crossing in the crate;
    /// everything downstream of the configuration boundary deals in
    /// `BlockId` values.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "Air" => Ok(BlockId::Air),
            "Stone" => Ok(BlockId::Stone),
            "Cobblestone" => Ok(BlockId::Cobblestone),
            "StoneBricks" => Ok(BlockId::StoneBricks),
            "BrickBlock" => Ok(BlockId::BrickBlock),
            "OakPlanks" => Ok(BlockId::OakPlanks),
            "SprucePlanks" => Ok(BlockId::SprucePlanks),
            "OakLog" => Ok(BlockId::OakLog),
            "SpruceWood" => Ok(BlockId::SpruceWood),
            "Glass" => Ok(BlockId::Glass),
            "GlassPane" => Ok(BlockId::GlassPane),
            "RedStainedGlass" => Ok(BlockId::RedStainedGlass),
            "OrangeStainedGlass" => Ok(BlockId::OrangeStainedGlass),
            "YellowStainedGlass" => Ok(BlockId::YellowStainedGlass),
            "LimeStainedGlass" => Ok(BlockId::LimeStainedGlass),
            "GreenStainedGlass" => Ok(BlockId::GreenStainedGlass),
            "CyanStainedGlass" => Ok(BlockId::CyanStainedGlass),
            "LightBlueStainedGlass" => Ok(BlockId::LightBlueStainedGlass),
            "BlueStainedGlass" => Ok(BlockId::BlueStainedGlass),
            "PurpleStainedGlass" => Ok(BlockId::PurpleStainedGlass),
            "MagentaStainedGlass" => Ok(BlockId::MagentaStainedGlass),
            "PinkStainedGlass" => Ok(BlockId::PinkStainedGlass),
            "WhiteStainedGlass" => Ok(BlockId::WhiteStainedGlass),
            "OakDoor" => Ok(BlockId::OakDoor),
            "SpruceDoor" => Ok(BlockId::SpruceDoor),
            "AcaciaDoor" => Ok(BlockId::AcaciaDoor),
            other => Err(ComposerError::UnknownMaterial(other.to_string())),
        }
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A placed block. Only the material id is load-bearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub id: BlockId,
}

impl Block {
    pub fn new(id: BlockId) -> Self {
        Self { id }
    }
}
