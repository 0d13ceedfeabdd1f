//! Game state and core simulation types
//!
//! Everything the tick mutates lives in `GameState`. The driver owns the one
//! instance and passes it by reference to `tick`, `set_key` and `render`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::colors;
use crate::consts::*;
use crate::degrees_to_radians;

/// Current phase of gameplay, derived from the two pause flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Player toggled pause; nothing advances, not even the countdown
    UserPaused,
    /// Round countdown running (new game or just lost a life)
    Countdown,
    /// Active gameplay
    Playing,
}

/// Keys the simulation understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicalKey {
    Left,
    Right,
    /// Rising edge flips the user pause
    TogglePauseUser,
}

impl LogicalKey {
    pub const COUNT: usize = 3;

    #[inline]
    fn index(self) -> usize {
        match self {
            LogicalKey::Left => 0,
            LogicalKey::Right => 1,
            LogicalKey::TogglePauseUser => 2,
        }
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
    pub color: u32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            rect: Rect::new(
                Vec2::new(PADDLE_INIT_X, PADDLE_INIT_Y),
                PADDLE_WIDTH,
                PADDLE_HEIGHT,
            ),
            color: colors::WHITE,
        }
    }
}

impl Paddle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slide left by `speed * secs`, stopping at the field's left edge
    pub fn move_left(&mut self, secs: f32) {
        self.rect.pos.x -= PADDLE_SPEED * secs;
        self.rect.pos.x = self.rect.pos.x.max(0.0);
    }

    /// Slide right by `speed * secs`, stopping at the field's right edge
    pub fn move_right(&mut self, secs: f32) {
        self.rect.pos.x += PADDLE_SPEED * secs;
        self.rect.pos.x = self.rect.pos.x.min((FIELD_WIDTH - PADDLE_WIDTH) as f32);
    }
}

/// The ball
///
/// Speed is always `BALL_SPEED`; only `set_angle` writes the velocity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect,
    pub vel: Vec2,
    pub color: u32,
}

impl Default for Ball {
    fn default() -> Self {
        let mut ball = Self {
            rect: Rect::new(Vec2::new(BALL_INIT_X, BALL_INIT_Y), BALL_WIDTH, BALL_HEIGHT),
            vel: Vec2::ZERO,
            color: colors::WHITE,
        };
        ball.set_angle(degrees_to_radians(BALL_INIT_ANGLE_DEGREES));
        ball
    }
}

impl Ball {
    /// Point the ball along `angle` (radians, 0 = +x, counter-clockwise)
    pub fn set_angle(&mut self, angle: f64) {
        self.vel = Vec2::new(
            BALL_SPEED * angle.cos() as f32,
            BALL_SPEED * angle.sin() as f32,
        );
    }

    /// Back to the launch position and angle
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Advance by `vel * secs`, clamping each axis inside the field
    pub fn integrate(&mut self, secs: f32) {
        let pos = &mut self.rect.pos;
        pos.x += self.vel.x * secs;
        pos.x = pos.x.max(0.0).min((FIELD_WIDTH - BALL_WIDTH) as f32);
        pos.y += self.vel.y * secs;
        pos.y = pos.y.max(0.0).min((FIELD_HEIGHT - BALL_HEIGHT) as f32);
    }
}

/// A single brick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    pub color: u32,
    /// Set once per round, never cleared until the grid is rebuilt
    pub broken: bool,
}

/// The fixed brick wall
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrickGrid {
    pub rows: [[Brick; BRICK_COLUMNS]; BRICK_ROWS],
}

impl Default for BrickGrid {
    fn default() -> Self {
        let mut y = BRICK_FIRST_ROW_Y;
        let rows = std::array::from_fn(|row| {
            let mut x = 0.0;
            let bricks = std::array::from_fn(|_| {
                let brick = Brick {
                    rect: Rect::new(Vec2::new(x, y), BRICK_WIDTH, BRICK_HEIGHT),
                    color: colors::BRICK_ROWS[row],
                    broken: false,
                };
                x += BRICK_WIDTH as f32;
                brick
            });
            y += BRICK_HEIGHT as f32;
            bricks
        });
        Self { rows }
    }
}

impl BrickGrid {
    /// Full grid, every brick intact
    pub fn new() -> Self {
        Self::default()
    }

    /// Row-major iteration
    pub fn iter(&self) -> impl Iterator<Item = &Brick> + Clone {
        self.rows.iter().flatten()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Brick> {
        self.rows.iter_mut().flatten()
    }

    /// Number of unbroken bricks
    pub fn remaining(&self) -> usize {
        self.iter().filter(|b| !b.broken).count()
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Round-internal pause (countdown running)
    pub paused: bool,
    /// Player pause toggle, overrides everything
    pub paused_user: bool,
    /// Seconds left before play (re)starts, never negative
    pub countdown: f32,
    /// Key levels, indexed by `LogicalKey`
    pub keyboard: [bool; LogicalKey::COUNT],
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: BrickGrid,
    pub lives: u32,
    /// Capped at `SCORE_MAX`
    pub score: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// A fresh game: full wall, three lives, countdown running
    pub fn new() -> Self {
        Self {
            paused: true,
            paused_user: false,
            countdown: COUNTDOWN_SECONDS,
            keyboard: [false; LogicalKey::COUNT],
            paddle: Paddle::new(),
            ball: Ball::default(),
            bricks: BrickGrid::new(),
            lives: LIVES_INIT,
            score: 0,
        }
    }

    /// Full reinitialisation
    ///
    /// Key levels survive so a key held across the reset is still held.
    pub fn reset(&mut self) {
        let keyboard = self.keyboard;
        *self = Self::new();
        self.keyboard = keyboard;
    }

    /// Ball back to launch and a fresh countdown, after a lost life
    pub fn restart_round(&mut self) {
        self.ball.reset();
        self.paused = true;
        self.countdown = COUNTDOWN_SECONDS;
    }

    /// Record a key level; a rising edge on `TogglePauseUser` flips the user pause
    pub fn set_key(&mut self, key: LogicalKey, is_down: bool) {
        let idx = key.index();
        if key == LogicalKey::TogglePauseUser && is_down && !self.keyboard[idx] {
            self.paused_user = !self.paused_user;
            log::debug!("User pause {}", if self.paused_user { "on" } else { "off" });
        }
        self.keyboard[idx] = is_down;
    }

    #[inline]
    pub fn is_key_down(&self, key: LogicalKey) -> bool {
        self.keyboard[key.index()]
    }

    pub fn phase(&self) -> GamePhase {
        if self.paused_user {
            GamePhase::UserPaused
        } else if self.paused {
            GamePhase::Countdown
        } else {
            GamePhase::Playing
        }
    }

    /// Add one brick's worth of points, saturating at `SCORE_MAX`
    pub fn award_brick(&mut self) {
        if self.score < SCORE_MAX {
            self.score = (self.score + SCORE_PER_BRICK).min(SCORE_MAX);
        }
    }

    pub fn bricks_remaining(&self) -> usize {
        self.bricks.remaining()
    }
}
