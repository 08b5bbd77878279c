//! Plain-text placement listing.
//!
//! One line per block, `Material:x,y,z`, in the buffer's render order.

use crate::block::Block;
use crate::buffer::{BlockBuffer, BlockSink};
use crate::geometry::Point;
use std::fmt::Write;

/// Collects rendered blocks as text lines.
#[derive(Debug, Default)]
pub struct TextExport {
    text: String,
}

impl TextExport {
    pub fn new() -> Self {
        Self::default()
    }

    /// The accumulated listing, without a trailing newline.
    pub fn as_text(&self) -> &str {
        self.text.trim_end_matches('\n')
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}

impl BlockSink for TextExport {
    fn put(&mut self, position: Point, block: &Block) {
        writeln!(self.text, "{}:{}", block.id, position).unwrap();
    }
}

/// Render a buffer to its text listing.
pub fn export_text(buffer: &BlockBuffer) -> String {
    let mut sink = TextExport::new();
    buffer.render(&mut sink);
    sink.as_text().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockId;

    #[test]
    fn test_listing_format_and_order() {
        let mut buffer = BlockBuffer::new();
        buffer.put(Point::new(1, 2, 3), BlockId::Stone);
        buffer.put(Point::new(2, 2, 3), BlockId::BrickBlock);

        assert_eq!(export_text(&buffer), "Stone:1,2,3\nBrickBlock:2,2,3");
    }

    #[test]
    fn test_empty_buffer_renders_empty_text() {
        assert_eq!(export_text(&BlockBuffer::new()), "");
    }

    #[test]
    fn test_sink_can_be_reused_after_clear() {
        let mut buffer = BlockBuffer::new();
        buffer.put(Point::new(0, 0, 0), BlockId::Glass);

        let mut sink = TextExport::new();
        buffer.render(&mut sink);
        sink.clear();
        buffer.render(&mut sink);

        assert_eq!(sink.as_text(), "Glass:0,0,0");
    }
}
