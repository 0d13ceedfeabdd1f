//! Fixed timestep accumulator
//!
//! Converts variable wall-clock frame times into a whole number of
//! simulation ticks, carrying the remainder to the next frame.

use crate::settings::Settings;

#[derive(Debug, Clone)]
pub struct FixedTimestep {
    ms_per_update: f32,
    /// Maximum ticks per frame to prevent a spiral of death
    max_substeps: u32,
    /// Longest frame we are willing to catch up on
    max_frame_ms: f32,
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(ms_per_update: f32, max_substeps: u32, max_frame_ms: f32) -> Self {
        assert!(ms_per_update > 0.0, "tick length must be positive");
        assert!(
            max_frame_ms >= 0.0,
            "frame clamp must be non-negative, got {max_frame_ms}"
        );
        Self {
            ms_per_update,
            max_substeps,
            max_frame_ms,
            accumulator: 0.0,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.ms_per_update(),
            settings.max_substeps,
            settings.max_frame_ms,
        )
    }

    #[inline]
    pub fn ms_per_update(&self) -> f32 {
        self.ms_per_update
    }

    /// Time carried over to the next frame
    #[inline]
    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    /// Add a frame's elapsed time; returns how many ticks to run now
    pub fn advance(&mut self, frame_ms: f32) -> u32 {
        self.accumulator += frame_ms.clamp(0.0, self.max_frame_ms);

        let mut steps = 0;
        while self.accumulator >= self.ms_per_update && steps < self.max_substeps {
            self.accumulator -= self.ms_per_update;
            steps += 1;
        }

        if steps == self.max_substeps && self.accumulator >= self.ms_per_update {
            log::debug!(
                "Dropping {:.2}ms of simulation after {} substeps",
                self.accumulator,
                steps
            );
            self.accumulator %= self.ms_per_update;
        }

        steps
    }
}
