//! Output adapters for rendered block buffers.

pub mod text;

pub use text::{export_text, TextExport};
