//! Axis-aligned bounding rectangles
//!
//! Entities are fixed-size boxes positioned by their top-left corner, with
//! anchor setters for the placements the game actually uses (feet on the
//! ground, corners at the screen edges).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A screen-space rectangle (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// A rect of the given size at the origin
    pub fn sized(w: f32, h: f32) -> Self {
        Self::new(0.0, 0.0, w, h)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    /// Move the rect so its bottom edge sits at `y`
    pub fn set_bottom(&mut self, y: f32) {
        self.pos.y = y - self.size.y;
    }

    /// Move the rect so its bottom-center sits at (x, y)
    pub fn set_midbottom(&mut self, x: f32, y: f32) {
        self.pos.x = x - self.size.x / 2.0;
        self.pos.y = y - self.size.y;
    }

    /// Move the rect so its bottom-left corner sits at (x, y)
    pub fn set_bottomleft(&mut self, x: f32, y: f32) {
        self.pos.x = x;
        self.pos.y = y - self.size.y;
    }

    /// Move the rect so its bottom-right corner sits at (x, y)
    pub fn set_bottomright(&mut self, x: f32, y: f32) {
        self.pos.x = x - self.size.x;
        self.pos.y = y - self.size.y;
    }

    /// Overlap test. Rects that merely share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}
