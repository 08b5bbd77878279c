//! Roof generation in four styles.

use super::{Prefab, PutFn};
use crate::block::BlockId;
use crate::error::{ComposerError, Result};
use crate::geometry::{Orientation, Point};
use std::fmt;
use std::str::FromStr;

/// The supported roof shapes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RoofStyle {
    #[default]
    Flat,
    Gabled,
    Hipped,
    Pyramidal,
}

impl RoofStyle {
    pub const ALL: [RoofStyle; 4] = [
        RoofStyle::Flat,
        RoofStyle::Gabled,
        RoofStyle::Hipped,
        RoofStyle::Pyramidal,
    ];

    /// Lowercase tag used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            RoofStyle::Flat => "flat",
            RoofStyle::Gabled => "gabled",
            RoofStyle::Hipped => "hipped",
            RoofStyle::Pyramidal => "pyramidal",
        }
    }
}

impl FromStr for RoofStyle {
    type Err = ComposerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "flat" => Ok(RoofStyle::Flat),
            "gabled" => Ok(RoofStyle::Gabled),
            "hipped" => Ok(RoofStyle::Hipped),
            "pyramidal" => Ok(RoofStyle::Pyramidal),
            other => Err(ComposerError::UnknownRoofStyle(other.to_string())),
        }
    }
}

impl fmt::Display for RoofStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A roof covering a `width x depth` footprint in one of four styles.
///
/// Local coordinates are `(w, height, d)`: width along the frame's
/// forward axis, depth along the perpendicular axis, height up.
#[derive(Debug)]
pub struct Roof {
    pub(crate) orientation: Orientation,
    pub(crate) children: Vec<Prefab>,
    material: BlockId,
    width: i32,
    depth: i32,
    style: RoofStyle,
}

impl Roof {
    pub fn new(
        orientation: Orientation,
        material: BlockId,
        width: i32,
        depth: i32,
        style: RoofStyle,
    ) -> Result<Self> {
        if width < 1 {
            return Err(ComposerError::Dimension(
                "Roof width must be at least 1 block".to_string(),
            ));
        }
        if depth < 1 {
            return Err(ComposerError::Dimension(
                "Roof depth must be at least 1 block".to_string(),
            ));
        }
        Ok(Self {
            orientation,
            children: Vec::new(),
            material,
            width,
            depth,
            style,
        })
    }

    pub fn style(&self) -> RoofStyle {
        self.style
    }

    pub(crate) fn draw(&self, put: &mut PutFn) {
        match self.style {
            RoofStyle::Flat => self.draw_flat(put),
            RoofStyle::Gabled => self.draw_gabled(put),
            RoofStyle::Hipped => self.draw_hipped(put),
            RoofStyle::Pyramidal => self.draw_pyramidal(put),
        }
    }

    fn draw_flat(&self, put: &mut PutFn) {
        for w in 0..self.width {
            for d in 0..self.depth {
                put(self.orientation, Point::new(w, 0, d), self.material);
            }
        }
    }

    /// Triangular ridge along the depth axis: height falls off linearly
    /// with distance from the half-depth line, so the ridge runs
    /// parallel to the width.
    fn draw_gabled(&self, put: &mut PutFn) {
        let half_depth = self.depth / 2;
        for w in 0..self.width {
            for d in 0..self.depth {
                let height = half_depth - (d - half_depth).abs();
                if height >= 0 {
                    put(self.orientation, Point::new(w, height, d), self.material);
                }
            }
        }
    }

    /// Concentric full rectangles, each ring inset by one on every side
    /// and one block higher, until the inset rectangle vanishes.
    fn draw_hipped(&self, put: &mut PutFn) {
        let max_height = (self.width / 2).min(self.depth / 2);
        for y in 0..=max_height {
            let inset = y;
            let (start_w, end_w) = (inset, self.width - inset - 1);
            let (start_d, end_d) = (inset, self.depth - inset - 1);
            if start_w > end_w || start_d > end_d {
                break;
            }
            for w in start_w..=end_w {
                for d in start_d..=end_d {
                    put(self.orientation, Point::new(w, y, d), self.material);
                }
            }
        }
    }

    /// At each height, keep the cells whose distance to the nearest
    /// footprint edge is at least that height.
    fn draw_pyramidal(&self, put: &mut PutFn) {
        let max_height = self.width.max(self.depth) / 2;
        for y in 0..=max_height {
            for w in 0..self.width {
                for d in 0..self.depth {
                    let edge_distance = w.min(self.width - 1 - w).min(d.min(self.depth - 1 - d));
                    if edge_distance >= y {
                        put(self.orientation, Point::new(w, y, d), self.material);
                    }
                }
            }
        }
    }

    /// Peak height reached by this roof's style.
    fn max_height(&self) -> i32 {
        match self.style {
            RoofStyle::Flat => 0,
            RoofStyle::Gabled => self.depth / 2,
            RoofStyle::Hipped | RoofStyle::Pyramidal => (self.width / 2).min(self.depth / 2),
        }
    }

    /// Frame at the footprint center, at the style's peak height.
    pub(crate) fn child_orientation(&self) -> Orientation {
        let center = self.orientation.transform(Point::new(
            self.width / 2,
            self.max_height(),
            self.depth / 2,
        ));
        Orientation::new(center, self.orientation.rotation)
    }
}
