//! Error types for the prefab composer.

use thiserror::Error;

/// Result type alias using ComposerError.
pub type Result<T> = std::result::Result<T, ComposerError>;

/// Main error type for prefab composition operations.
#[derive(Error, Debug)]
pub enum ComposerError {
    /// A structural dimension (length, width, depth, height, steps) is
    /// below the minimum of 1. Raised at construction, never at draw
    /// time.
    #[error("{0}")]
    Dimension(String),

    /// Rotation value outside the supported set {0, 90, 180, 270}.
    #[error("Invalid rotation: {0}")]
    InvalidRotation(i32),

    /// Window placement collides with a previously accepted window.
    #[error("Cannot place window: space is occupied")]
    OccupiedSpace,

    /// Unrecognized roof style tag.
    #[error("Unknown roof style: {0}")]
    UnknownRoofStyle(String),

    /// Material name that does not resolve to a block id.
    #[error("Unknown material: {0}")]
    UnknownMaterial(String),

    /// Failed to parse a JSON configuration.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error while reading a configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
