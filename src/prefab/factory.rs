//! Construction indirection for the primitive prefabs.

use super::{Door, Floor, Roof, RoofStyle, Stairs, Wall, Window, WindowOptions};
use crate::block::BlockId;
use crate::error::Result;
use crate::geometry::Orientation;

/// Creates primitive prefabs on behalf of the composition surfaces
/// (anchor and room).
///
/// The factory is constructed once and injected explicitly wherever
/// prefabs spawn children, so tests and alternate material-resolution
/// strategies can intercept construction. The default methods build
/// each primitive exactly as requested; an implementation overrides
/// only what it wants to change.
pub trait PrefabFactory {
    fn create_wall(&self, orientation: Orientation, material: BlockId, length: i32) -> Result<Wall> {
        Wall::new(orientation, material, length)
    }

    fn create_floor(
        &self,
        orientation: Orientation,
        material: BlockId,
        width: i32,
        depth: i32,
    ) -> Result<Floor> {
        Floor::new(orientation, material, width, depth)
    }

    fn create_door(&self, orientation: Orientation, material: BlockId) -> Result<Door> {
        Ok(Door::new(orientation, material))
    }

    fn create_window(&self, orientation: Orientation, options: WindowOptions) -> Result<Window> {
        Window::new(orientation, options)
    }

    fn create_stairs(
        &self,
        orientation: Orientation,
        material: BlockId,
        steps: i32,
        width: i32,
    ) -> Result<Stairs> {
        Stairs::new(orientation, material, steps, width)
    }

    fn create_roof(
        &self,
        orientation: Orientation,
        material: BlockId,
        width: i32,
        depth: i32,
        style: RoofStyle,
    ) -> Result<Roof> {
        Roof::new(orientation, material, width, depth, style)
    }
}

/// Builds every primitive exactly as requested.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultPrefabFactory;

impl PrefabFactory for DefaultPrefabFactory {}

/// Stained-glass palette cycled by [`GradientGlassFactory`], warm to
/// cold.
const GRADIENT_PALETTE: [BlockId; 12] = [
    BlockId::RedStainedGlass,
    BlockId::OrangeStainedGlass,
    BlockId::YellowStainedGlass,
    BlockId::LimeStainedGlass,
    BlockId::GreenStainedGlass,
    BlockId::CyanStainedGlass,
    BlockId::LightBlueStainedGlass,
    BlockId::BlueStainedGlass,
    BlockId::PurpleStainedGlass,
    BlockId::MagentaStainedGlass,
    BlockId::PinkStainedGlass,
    BlockId::WhiteStainedGlass,
];

/// Swaps every window's material for a stained-glass color picked by a
/// gradient over the window's anchor coordinates. Deterministic: the
/// same anchor always yields the same color.
#[derive(Debug, Default, Clone, Copy)]
pub struct GradientGlassFactory;

impl PrefabFactory for GradientGlassFactory {
    fn create_window(&self, orientation: Orientation, options: WindowOptions) -> Result<Window> {
        let anchor = orientation.anchor;
        let index = (anchor.x + anchor.y + anchor.z).rem_euclid(GRADIENT_PALETTE.len() as i32);
        let material = GRADIENT_PALETTE[index as usize];
        Window::new(orientation, WindowOptions { material, ..options })
    }
}
