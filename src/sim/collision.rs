//! Impact classification between the ball and a stationary rectangle
//!
//! Decides which face of the obstacle the ball struck from the shape of the
//! overlap region, plus which way the ball is travelling. The bounce
//! resolvers combine the two so a ball already separating is never
//! reflected a second time.

use glam::Vec2;

use super::geometry::Rect;

/// Result of classifying one ball/obstacle overlap
///
/// Only lives for the duration of a single bounce resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactState {
    /// Overlap region; width/height truncated toward zero like the entity extents
    pub overlap: Rect,
    /// Right edge of the overlap
    pub overlap_right: f32,
    /// Top edge of the overlap
    pub overlap_top: f32,
    /// Overlap is taller than wide: a side-face hit
    pub left_right: bool,
    /// Overlap is at least as wide as tall: a top/bottom-face hit
    pub top_bottom: bool,
    /// Ball struck the obstacle's left face
    pub left: bool,
    /// Ball struck the obstacle's right face
    pub right: bool,
    /// Ball struck the obstacle's top face
    pub top: bool,
    /// Ball struck the obstacle's bottom face
    pub bottom: bool,
    pub moving_left: bool,
    pub moving_right: bool,
    pub moving_up: bool,
    pub moving_down: bool,
}

impl ImpactState {
    /// Classify an overlap between the moving `ball` and a stationary `obstacle`
    ///
    /// Face detection compares the stored rectangle coordinates against the
    /// overlap origin with exact equality. The origin is the `max` of those
    /// same stored values, so the matching side is bit-identical.
    pub fn classify(ball: &Rect, obstacle: &Rect, velocity: Vec2) -> Self {
        let origin = Vec2::new(ball.pos.x.max(obstacle.pos.x), ball.pos.y.max(obstacle.pos.y));
        let overlap_right = ball.right().min(obstacle.right());
        let overlap_top = ball.top().min(obstacle.top());

        // Float extents land in integer fields: truncation is part of the behaviour
        let overlap = Rect {
            pos: origin,
            width: (overlap_right - origin.x) as i32,
            height: (overlap_top - origin.y) as i32,
        };

        let left_right = overlap.height > overlap.width;
        // Ties go to the top/bottom faces
        let top_bottom = overlap.width >= overlap.height;

        Self {
            overlap,
            overlap_right,
            overlap_top,
            left_right,
            top_bottom,
            left: left_right && obstacle.pos.x == origin.x,
            right: left_right && ball.pos.x == origin.x,
            top: top_bottom && ball.pos.y == origin.y,
            bottom: top_bottom && obstacle.pos.y == origin.y,
            moving_left: velocity.x < 0.0,
            moving_right: velocity.x > 0.0,
            moving_up: velocity.y > 0.0,
            moving_down: velocity.y < 0.0,
        }
    }
}
