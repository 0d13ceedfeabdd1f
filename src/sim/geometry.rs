//! Axis-aligned rectangle geometry
//!
//! A rectangle is a float position plus integer extents. The position is the
//! corner with the smallest x and y (bottom-left in the y-up playfield).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle with fixed integer dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Panics on negative dimensions; entity constructors are the only callers.
    pub fn new(pos: Vec2, width: i32, height: i32) -> Self {
        assert!(
            width >= 0 && height >= 0,
            "rectangle dimensions must be non-negative, got {width}x{height}"
        );
        Self { pos, width, height }
    }

    /// Right edge (x + width)
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.width as f32
    }

    /// Top edge (y + height)
    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y + self.height as f32
    }

    /// Inclusive AABB overlap: touching edges count as overlapping
    pub fn overlaps(&self, other: &Rect) -> bool {
        if self.right() < other.pos.x {
            return false;
        }
        if self.pos.x > other.right() {
            return false;
        }
        if self.top() < other.pos.y {
            return false;
        }
        if self.pos.y > other.top() {
            return false;
        }
        true
    }
}
