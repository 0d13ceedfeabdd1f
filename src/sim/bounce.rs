//! Ball reflection policies for the paddle and bricks
//!
//! Both resolvers only reflect when the ball is moving into the struck face.
//! A ball already separating from an obstacle is left alone.

use super::collision::ImpactState;
use super::geometry::Rect;
use super::state::Ball;
use crate::consts::*;
use crate::degrees_to_radians;

/// Paddle reflection angle in degrees for a ball at `ball_x` over a paddle at `paddle_x`
///
/// The offset is measured from the paddle's right end across
/// `[0, PADDLE_WIDTH + BALL_WIDTH]`, so the right end sends the ball out at
/// 45 degrees and the left end at 135. Offsets strictly inside the dead zone
/// are pushed out by its radius, so nothing leaves near vertical.
pub fn paddle_reflection_angle(ball_x: f32, paddle_x: f32) -> f32 {
    let span = (PADDLE_WIDTH + BALL_WIDTH) as f32;
    let mut offset = span - (ball_x - (paddle_x - BALL_WIDTH as f32));

    if offset > PADDLE_DEAD_ZONE_LEFT as f32 && offset < PADDLE_DEAD_ZONE_RIGHT as f32 {
        if offset < PADDLE_DEAD_ZONE_CENTER as f32 {
            offset -= PADDLE_DEAD_ZONE_RADIUS as f32;
        } else {
            offset += PADDLE_DEAD_ZONE_RADIUS as f32;
        }
    }

    let ratio = offset / span;
    ratio * (BALL_REFLECT_ANGLE_MAX - BALL_REFLECT_ANGLE_MIN) + BALL_REFLECT_ANGLE_MIN
}

/// Reflect the ball off the paddle
///
/// Top hits while falling get a new angle from the strike position. Side
/// hits into the face flip the horizontal velocity.
pub fn bounce_paddle(ball: &mut Ball, ball_rect: &Rect, paddle_rect: &Rect) {
    let impact = ImpactState::classify(ball_rect, paddle_rect, ball.vel);

    if impact.top && impact.moving_down {
        let degrees = paddle_reflection_angle(ball_rect.pos.x, paddle_rect.pos.x);
        ball.set_angle(degrees_to_radians(degrees as f64));
    } else if (impact.left && impact.moving_right) || (impact.right && impact.moving_left) {
        ball.vel.x = -ball.vel.x;
    }
}

/// Reflect the ball off a brick: pure elastic flip of one axis
pub fn bounce_brick(ball: &mut Ball, ball_rect: &Rect, brick_rect: &Rect) {
    let impact = ImpactState::classify(ball_rect, brick_rect, ball.vel);

    if (impact.left && impact.moving_right) || (impact.right && impact.moving_left) {
        ball.vel.x = -ball.vel.x;
    } else if (impact.top && impact.moving_down) || (impact.bottom && impact.moving_up) {
        ball.vel.y = -ball.vel.y;
    }
}
