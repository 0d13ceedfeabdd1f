//! Driver settings
//!
//! How the headless driver paces and runs the game. Physics constants are
//! fixed in `consts` and are not configurable.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{MS_PER_SECOND, UPDATES_PER_SECOND};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Simulation rate
    pub updates_per_second: u32,
    /// Maximum ticks run in one frame
    pub max_substeps: u32,
    /// Frames longer than this are clamped before catch-up (ms)
    pub max_frame_ms: f32,

    // === Headless demo ===
    /// Simulated wall-clock length of the run
    pub demo_seconds: f32,
    /// Nominal frame length
    pub frame_ms: f32,
    /// Frame lengths vary uniformly by up to this much either way
    pub frame_jitter_ms: f32,
    /// Seed for the frame-time jitter
    pub seed: u64,
    /// Let the computer steer the paddle
    pub autopilot: bool,
    /// Write the final frame here as a PPM image
    pub frame_dump: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            updates_per_second: UPDATES_PER_SECOND,
            max_substeps: 8,
            max_frame_ms: 100.0,

            demo_seconds: 30.0,
            frame_ms: 1000.0 / 60.0,
            frame_jitter_ms: 4.0,
            seed: 12345,
            autopilot: true,
            frame_dump: None,
        }
    }
}

impl Settings {
    /// Tick length in milliseconds
    pub fn ms_per_update(&self) -> f32 {
        MS_PER_SECOND / self.updates_per_second.max(1) as f32
    }

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::validated)
    }

    /// Replace out-of-range values with their defaults
    fn validated(mut self) -> Self {
        let defaults = Self::default();
        if !self.max_frame_ms.is_finite() || self.max_frame_ms < 0.0 {
            log::warn!(
                "Invalid max_frame_ms {}, using {}",
                self.max_frame_ms,
                defaults.max_frame_ms
            );
            self.max_frame_ms = defaults.max_frame_ms;
        }
        if self.updates_per_second == 0 {
            log::warn!(
                "Invalid updates_per_second 0, using {}",
                defaults.updates_per_second
            );
            self.updates_per_second = defaults.updates_per_second;
        }
        self
    }

    /// Load settings from a JSON file, falling back to defaults on any problem
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read settings {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
