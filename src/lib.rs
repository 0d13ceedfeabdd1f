//! QVGA Breakout - a fixed-timestep paddle/ball/brick arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, impacts, game state, tick)
//! - `renderer`: Draw-request stream and a software framebuffer
//! - `platform`: Driver-side helpers (fixed timestep, autopilot)
//! - `settings`: Driver configuration

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
///
/// The playfield is y-up: (0, 0) is the bottom-left corner.
pub mod consts {
    /// Playfield dimensions (QVGA)
    pub const FIELD_WIDTH: i32 = 320;
    pub const FIELD_HEIGHT: i32 = 240;

    pub const MS_PER_SECOND: f32 = 1000.0;
    /// Fixed simulation rate
    pub const UPDATES_PER_SECOND: u32 = 60;
    pub const MS_PER_UPDATE: f32 = MS_PER_SECOND / UPDATES_PER_SECOND as f32;

    /// Paddle defaults
    pub const PADDLE_INIT_X: f32 = 128.0;
    pub const PADDLE_INIT_Y: f32 = 16.0;
    pub const PADDLE_WIDTH: i32 = 64;
    pub const PADDLE_HEIGHT: i32 = 8;
    pub const PADDLE_SPEED: f32 = 90.0; // px/s

    /// Half-width of the no-vertical-bounce zone around the paddle center
    pub const PADDLE_DEAD_ZONE_RADIUS: i32 = 16;
    pub const PADDLE_DEAD_ZONE_CENTER: i32 = (PADDLE_WIDTH + BALL_WIDTH) / 2;
    pub const PADDLE_DEAD_ZONE_LEFT: i32 = PADDLE_DEAD_ZONE_CENTER - PADDLE_DEAD_ZONE_RADIUS;
    pub const PADDLE_DEAD_ZONE_RIGHT: i32 = PADDLE_DEAD_ZONE_CENTER + PADDLE_DEAD_ZONE_RADIUS;

    /// Ball defaults
    pub const BALL_INIT_X: f32 = 0.0;
    pub const BALL_INIT_Y: f32 = 115.0;
    pub const BALL_INIT_ANGLE_DEGREES: f64 = 330.0;
    pub const BALL_WIDTH: i32 = 8;
    pub const BALL_HEIGHT: i32 = 8;
    pub const BALL_SPEED: f32 = 90.0; // px/s

    /// Paddle reflection range, 90 is straight up
    pub const BALL_REFLECT_ANGLE_MIN: f32 = 45.0;
    pub const BALL_REFLECT_ANGLE_MAX: f32 = 135.0;

    /// Brick grid
    pub const BRICK_WIDTH: i32 = 16;
    pub const BRICK_HEIGHT: i32 = 8;
    pub const BRICK_ROWS: usize = 7;
    pub const BRICK_COLUMNS: usize = 20;
    pub const BRICK_FIRST_ROW_Y: f32 = 140.0;

    pub const LIVES_INIT: u32 = 3;

    pub const SCORE_PER_BRICK: u32 = 1;
    pub const SCORE_MAX: u32 = 999;
    pub const SCORE_DIGITS: usize = 3;

    /// Seconds before play starts (and resumes after a lost life)
    pub const COUNTDOWN_SECONDS: f32 = 3.5;

    /// HUD anchors (bottom-left of the first glyph)
    pub const COUNTDOWN_LABEL: &str = "GET READY";
    pub const COUNTDOWN_LABEL_POS: (i32, i32) = (124, 82);
    pub const COUNTDOWN_NUM_POS: (i32, i32) = (156, 66);
    pub const LIVES_POS: (i32, i32) = (0, 231);
    pub const SCORE_POS: (i32, i32) = (295, 231);
}

/// Colors as 0x00RRGGBB
pub mod colors {
    pub const BLACK: u32 = 0x0000_0000;
    pub const WHITE: u32 = 0x00FF_FFFF;
    pub const RED: u32 = 0x00FF_0000;
    pub const ORANGE: u32 = 0x00FF_A500;
    pub const YELLOW: u32 = 0x00FF_FF00;
    pub const GREEN: u32 = 0x0000_FF00;
    pub const BLUE: u32 = 0x0000_00FF;
    pub const INDIGO: u32 = 0x004B_0082;
    pub const VIOLET: u32 = 0x008D_38C9;

    /// Brick color by grid row
    pub const BRICK_ROWS: [u32; crate::consts::BRICK_ROWS] =
        [RED, ORANGE, YELLOW, GREEN, BLUE, INDIGO, VIOLET];
}

/// Convert degrees to radians in double precision
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * (std::f64::consts::PI / 180.0)
}
