//! Collision predicates over axis-aligned boxes
//!
//! Both checks are pure. Which one an entity uses is decided by the session's
//! collision pass, not here.

use glam::Vec2;

/// Axis-aligned rectangle, `pos` is the top-left corner (screen space, y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// Anything with a collision footprint
pub trait Bounds {
    fn bounds(&self) -> Rect;
}

/// Strict interval overlap on both axes (touching edges do not count)
pub fn boxes_overlap(a: &Rect, b: &Rect) -> bool {
    a.pos.x < b.right() && a.right() > b.pos.x && a.pos.y < b.bottom() && a.bottom() > b.pos.y
}

/// Treat each box as the circle inscribed in its width.
///
/// Only meaningful for roughly square footprints; height is ignored for the radius.
pub fn circles_overlap(a: &Rect, b: &Rect) -> bool {
    let distance = a.center().distance(b.center());
    distance < a.size.x / 2.0 + b.size.x / 2.0
}
