//! Demo/attract mode - the computer steers the paddle
//!
//! Drives the same key levels a player would, so the simulation cannot tell
//! the difference.

use crate::consts::*;
use crate::sim::{GameState, LogicalKey};

/// Keys are released when the paddle is this close to its target
const DEADBAND: f32 = 2.0;

#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    frames: u64,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Horizontal aim offset from the ball center for the current frame
    ///
    /// Oscillates so the ball meets different parts of the paddle instead
    /// of looping on one trajectory.
    pub fn aim_offset(&self) -> f32 {
        let t = self.frames as f32 * 0.01;
        let wobble = t.sin() * 0.3 + (t * 0.7).sin() * 0.15;
        wobble * PADDLE_WIDTH as f32 / 2.0
    }

    /// Set the Left/Right key levels to chase the ball
    pub fn drive(&mut self, state: &mut GameState) {
        self.frames += 1;

        let ball = &state.ball;
        let mut ball_center = ball.rect.pos.x + BALL_WIDTH as f32 / 2.0;
        // Lead a falling ball slightly
        if ball.vel.y < 0.0 {
            ball_center += ball.vel.x * 0.1;
        }
        let target = ball_center + self.aim_offset();
        let paddle_center = state.paddle.rect.pos.x + PADDLE_WIDTH as f32 / 2.0;
        let delta = target - paddle_center;

        state.set_key(LogicalKey::Left, delta < -DEADBAND);
        state.set_key(LogicalKey::Right, delta > DEADBAND);
    }
}
