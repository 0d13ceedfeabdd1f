//! Driver-side helpers
//!
//! Nothing in here is required by the simulation; a driver uses these to:
//! - Turn wall-clock frame times into fixed ticks
//! - Play the game unattended (demo mode)

pub mod autopilot;
pub mod timestep;

pub use autopilot::Autopilot;
pub use timestep::FixedTimestep;
