//! Canvas geometry: positions, distances, and bounds clamping.
//!
//! Positions are top-left anchors of a plant's square footprint, in the
//! same linear unit as plant spacing (inches). The canvas is a fixed-size
//! bounded rectangle; every stored position satisfies
//! `0 <= x <= width - spacing` and `0 <= y <= height - spacing`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A 2-D anchor position in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal offset from the canvas origin.
    pub x: f64,
    /// Vertical offset from the canvas origin.
    pub y: f64,
}

impl Position {
    /// Creates a position.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between two anchors.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Fixed-size bounded design canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    /// Canvas width in linear units.
    pub width: f64,
    /// Canvas height in linear units.
    pub height: f64,
}

impl Canvas {
    /// Creates a canvas with the given dimensions.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Clamps an anchor so a footprint of the given spacing stays in bounds.
    ///
    /// A footprint wider than the canvas pins to the origin on that axis.
    #[must_use]
    pub fn clamp(&self, position: Position, spacing: f64) -> Position {
        Position {
            x: position.x.clamp(0.0, (self.width - spacing).max(0.0)),
            y: position.y.clamp(0.0, (self.height - spacing).max(0.0)),
        }
    }

    /// Returns true if an anchor with the given spacing is in bounds.
    #[must_use]
    pub fn contains(&self, position: Position, spacing: f64) -> bool {
        position.x >= 0.0
            && position.y >= 0.0
            && position.x <= self.width - spacing
            && position.y <= self.height - spacing
    }
}

impl Default for Canvas {
    /// The standard 1000x800 design area.
    fn default() -> Self {
        Self::new(1000.0, 800.0)
    }
}
