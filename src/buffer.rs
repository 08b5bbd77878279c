//! Sparse world-space block storage.

use crate::block::{Block, BlockId};
use crate::geometry::{Orientation, Point};
use std::collections::BTreeMap;

/// Sink receiving rendered `(position, block)` pairs.
///
/// Implementations turn placements into console text, files or live
/// world edits; the buffer guarantees ascending packed-key order and
/// nothing else.
pub trait BlockSink {
    fn put(&mut self, position: Point, block: &Block);
}

/// A sparse mapping from world position to placed block.
///
/// Keys are packed points. For any position the most recently inserted
/// block wins; no history is kept.
#[derive(Debug, Default)]
pub struct BlockBuffer {
    blocks: BTreeMap<u64, Block>,
}

impl BlockBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the block at `position`.
    pub fn put(&mut self, position: Point, material: BlockId) {
        self.blocks.insert(position.packed(), Block::new(material));
    }

    /// Resolve `local` through `frame` and insert at the resulting
    /// world position.
    pub fn put_offset(&mut self, local: Point, frame: Orientation, material: BlockId) {
        self.put(frame.transform(local), material);
    }

    pub fn get(&self, position: Point) -> Option<&Block> {
        self.blocks.get(&position.packed())
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// All stored blocks in ascending packed-key order.
    pub fn all_blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.values()
    }

    /// All `(position, block)` entries in ascending packed-key order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &Block)> {
        self.blocks
            .iter()
            .map(|(key, block)| (Point::unpacked(*key), block))
    }

    pub fn clear(&mut self) {
        self.blocks.clear();
    }

    /// Forward every stored entry to `sink`, unpacking each key back to
    /// its point, in ascending packed-key order.
    pub fn render(&self, sink: &mut dyn BlockSink) {
        for (position, block) in self.iter() {
            sink.put(position, block);
        }
    }
}
