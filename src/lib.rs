//! # Prefab Composer
//!
//! A Rust library for composing prefab structures (walls, floors,
//! doors, windows, staircases and roofs) into Minecraft block
//! placements.
//!
//! ## Overview
//!
//! Structures are trees of prefabs. Every node carries an
//! [`Orientation`] (an anchor point plus one of four quarter-turn
//! rotations) fixed at construction, and emits frame-local offsets that
//! the orientation resolves into world coordinates. An [`Anchor`] roots
//! the tree and offers a fluent composition API: each appended
//! primitive starts where the previous one ended, and extra rotations
//! compose into the new primitive's frame. Building the tree is a
//! single pre-order traversal that writes `(position, material)` pairs
//! into a [`BlockBuffer`], where the last write to a cell wins.
//!
//! ## Quick Start
//!
//! ```
//! use prefab_composer::{BlockId, Orientation, Point, Rotation, StructureBuilder};
//!
//! let start = Orientation::new(Point::new(1, 2, 3), Rotation::None);
//! let mut builder = StructureBuilder::new(start);
//! builder
//!     .anchor_mut()
//!     .add_wall(BlockId::StoneBricks, 3, Rotation::None)?;
//!
//! let buffer = builder.build();
//! assert_eq!(buffer.len(), 3);
//! assert!(buffer.get(Point::new(4, 2, 3)).is_some());
//! # Ok::<(), prefab_composer::ComposerError>(())
//! ```
//!
//! ## Configuration
//!
//! Whole structures can also be described as JSON (rooms with floors,
//! walls, windows, doors, stairs and a roof) and built through the
//! [`config`] module, which resolves material names at the boundary and
//! never lets strings into the core.

pub mod block;
pub mod buffer;
pub mod builder;
pub mod config;
pub mod error;
pub mod export;
pub mod geometry;
pub mod prefab;

// Re-export main types for convenience
pub use block::{Block, BlockId};
pub use buffer::{BlockBuffer, BlockSink};
pub use builder::StructureBuilder;
pub use config::{build_structure, from_json, load_config, StructureConfig};
pub use error::{ComposerError, Result};
pub use export::{export_text, TextExport};
pub use geometry::{Orientation, Point, Rotation};
pub use prefab::{
    Anchor, DefaultPrefabFactory, Door, Floor, GradientGlassFactory, Prefab, PrefabFactory, Roof,
    RoofStyle, Room, Side, StairCorner, Stairs, Wall, Window, WindowOptions, WindowSize,
};
