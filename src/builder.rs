//! One-shot build sessions.

use crate::buffer::BlockBuffer;
use crate::geometry::Orientation;
use crate::prefab::{Anchor, PrefabFactory};
use std::sync::Arc;

/// A single composition session: an anchor rooted at a starting frame,
/// plus the buffer its build writes into.
///
/// Sessions are construct, compose, build, discard. [`Self::build`]
/// consumes the builder, so a session can only run once.
#[derive(Debug)]
pub struct StructureBuilder {
    anchor: Anchor,
    buffer: BlockBuffer,
}

impl StructureBuilder {
    /// Start a session at `start` with the default prefab factory.
    pub fn new(start: Orientation) -> Self {
        Self {
            anchor: Anchor::new(start),
            buffer: BlockBuffer::new(),
        }
    }

    /// Start a session with an injected prefab factory.
    pub fn with_factory(start: Orientation, factory: Arc<dyn PrefabFactory>) -> Self {
        Self {
            anchor: Anchor::with_factory(start, factory),
            buffer: BlockBuffer::new(),
        }
    }

    /// The composition surface.
    pub fn anchor_mut(&mut self) -> &mut Anchor {
        &mut self.anchor
    }

    pub fn anchor(&self) -> &Anchor {
        &self.anchor
    }

    /// Run the pre-order traversal, resolving every emitted
    /// `(frame, local, material)` triple into the buffer, and hand the
    /// filled buffer back.
    pub fn build(self) -> BlockBuffer {
        let Self { anchor, mut buffer } = self;
        anchor.build(&mut |frame, local, material| {
            buffer.put_offset(local, frame, material);
        });
        buffer
    }
}
