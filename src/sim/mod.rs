//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only, supplied by the driver
//! - Stable iteration order (paddle, then bricks row-major)
//! - No rendering or platform dependencies

pub mod bounce;
pub mod collision;
pub mod geometry;
pub mod state;
pub mod tick;

pub use bounce::{bounce_brick, bounce_paddle, paddle_reflection_angle};
pub use collision::ImpactState;
pub use geometry::Rect;
pub use state::{Ball, Brick, BrickGrid, GamePhase, GameState, LogicalKey, Paddle};
pub use tick::tick;
