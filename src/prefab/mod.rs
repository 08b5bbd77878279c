//! Prefab tree nodes and the recursive build protocol.
//!
//! A prefab tree is composed once (orientations are fixed at
//! construction) and then built exactly once: a pre-order, depth-first
//! traversal in which every node emits its own blocks through a put
//! callback before its children do. The closed [`Prefab`] sum type
//! replaces the class hierarchy such engines usually grow; the set of
//! structural kinds is part of the contract and the compiler checks it.

mod anchor;
mod door;
mod factory;
mod floor;
mod roof;
mod room;
mod stairs;
mod wall;
mod window;

pub use anchor::Anchor;
pub use door::Door;
pub use factory::{DefaultPrefabFactory, GradientGlassFactory, PrefabFactory};
pub use floor::Floor;
pub use roof::{Roof, RoofStyle};
pub use room::{Room, Side, StairCorner};
pub use stairs::Stairs;
pub use wall::Wall;
pub use window::{Window, WindowOptions, WindowSize};

use crate::block::BlockId;
use crate::geometry::{Orientation, Point};

/// Callback through which prefabs emit blocks: the node's own frame, a
/// frame-local offset, and the material to place.
///
/// Never fails; rejection happens before the build starts, the way the
/// anchor rejects overlapping windows.
pub type PutFn<'a> = dyn FnMut(Orientation, Point, BlockId) + 'a;

/// A node in the prefab tree.
#[derive(Debug)]
pub enum Prefab {
    Wall(Wall),
    Floor(Floor),
    Door(Door),
    Window(Window),
    Stairs(Stairs),
    Roof(Roof),
    Room(Room),
    Anchor(Anchor),
}

impl Prefab {
    /// The node's own coordinate frame, fixed at construction.
    pub fn orientation(&self) -> Orientation {
        match self {
            Prefab::Wall(p) => p.orientation,
            Prefab::Floor(p) => p.orientation,
            Prefab::Door(p) => p.orientation,
            Prefab::Window(p) => p.orientation,
            Prefab::Stairs(p) => p.orientation,
            Prefab::Roof(p) => p.orientation,
            Prefab::Room(p) => p.orientation,
            Prefab::Anchor(p) => p.orientation(),
        }
    }

    /// Emit this node's own blocks, children excluded.
    pub fn draw(&self, put: &mut PutFn) {
        match self {
            Prefab::Wall(p) => p.draw(put),
            Prefab::Floor(p) => p.draw(put),
            Prefab::Door(p) => p.draw(put),
            Prefab::Window(p) => p.draw(put),
            Prefab::Stairs(p) => p.draw(put),
            Prefab::Roof(p) => p.draw(put),
            // Pure containers.
            Prefab::Room(_) | Prefab::Anchor(_) => {}
        }
    }

    /// The frame where geometrically-subsequent content continues.
    pub fn child_orientation(&self) -> Orientation {
        match self {
            Prefab::Wall(p) => p.child_orientation(),
            Prefab::Floor(p) => p.child_orientation(),
            Prefab::Door(p) => p.orientation,
            Prefab::Window(p) => p.child_orientation(),
            Prefab::Stairs(p) => p.child_orientation(),
            Prefab::Roof(p) => p.child_orientation(),
            Prefab::Room(p) => p.orientation,
            Prefab::Anchor(p) => p.orientation(),
        }
    }

    /// Children in insertion order.
    pub fn children(&self) -> &[Prefab] {
        match self {
            Prefab::Wall(p) => &p.children,
            Prefab::Floor(p) => &p.children,
            Prefab::Door(p) => &p.children,
            Prefab::Window(p) => &p.children,
            Prefab::Stairs(p) => &p.children,
            Prefab::Roof(p) => &p.children,
            Prefab::Room(p) => &p.children,
            Prefab::Anchor(p) => p.children(),
        }
    }

    /// Append an owned child node.
    pub fn add_child(&mut self, child: Prefab) {
        let children = match self {
            Prefab::Wall(p) => &mut p.children,
            Prefab::Floor(p) => &mut p.children,
            Prefab::Door(p) => &mut p.children,
            Prefab::Window(p) => &mut p.children,
            Prefab::Stairs(p) => &mut p.children,
            Prefab::Roof(p) => &mut p.children,
            Prefab::Room(p) => &mut p.children,
            Prefab::Anchor(p) => p.children_mut(),
        };
        children.push(child);
    }

    /// Pre-order, depth-first build: draw this node, then build every
    /// child in insertion order.
    pub fn build(&self, put: &mut PutFn) {
        self.draw(put);
        for child in self.children() {
            child.build(put);
        }
    }
}
