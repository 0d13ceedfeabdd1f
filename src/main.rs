//! QVGA Breakout headless driver
//!
//! Feeds the simulation jittered wall-clock frames through a fixed-timestep
//! accumulator, renders every frame into a software framebuffer, and prints
//! the final game state as JSON.
//!
//! Usage: `qvga-breakout [settings.json]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::fs::File;
    use std::io::BufWriter;
    use std::path::Path;

    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    use qvga_breakout::Settings;
    use qvga_breakout::colors;
    use qvga_breakout::consts::*;
    use qvga_breakout::platform::{Autopilot, FixedTimestep};
    use qvga_breakout::renderer::{Framebuffer, render};
    use qvga_breakout::sim::{GameState, tick};

    env_logger::init();

    let settings = std::env::args()
        .nth(1)
        .map(|path| Settings::load(Path::new(&path)))
        .unwrap_or_default();
    log::info!("QVGA Breakout (headless) starting: {:?}", settings);

    let mut rng = Pcg32::seed_from_u64(settings.seed);
    let mut state = GameState::new();
    let mut timestep = FixedTimestep::from_settings(&settings);
    let mut pilot = Autopilot::new();
    let mut framebuffer = Framebuffer::new(FIELD_WIDTH as usize, FIELD_HEIGHT as usize);

    let tick_ms = timestep.ms_per_update();
    let base_frame_ms = settings.frame_ms.max(1.0);
    let jitter = settings.frame_jitter_ms.abs().min(base_frame_ms);
    let total_ms = settings.demo_seconds.max(0.0) * MS_PER_SECOND;

    let mut elapsed_ms = 0.0f32;
    let mut next_report_ms = MS_PER_SECOND;
    let mut frames = 0u64;
    let mut ticks = 0u64;

    while elapsed_ms < total_ms {
        let frame_ms = if jitter > 0.0 {
            base_frame_ms + rng.random_range(-jitter..=jitter)
        } else {
            base_frame_ms
        };
        elapsed_ms += frame_ms;

        if settings.autopilot {
            pilot.drive(&mut state);
        }

        for _ in 0..timestep.advance(frame_ms) {
            tick(&mut state, tick_ms);
            ticks += 1;
        }

        framebuffer.clear(colors::BLACK);
        framebuffer.draw_all(render(&state), &mut ());
        frames += 1;

        if elapsed_ms >= next_report_ms {
            log::info!(
                "t={:.1}s phase={:?} lives={} score={} bricks={}",
                elapsed_ms / MS_PER_SECOND,
                state.phase(),
                state.lives,
                state.score,
                state.bricks_remaining()
            );
            next_report_ms += MS_PER_SECOND;
        }
    }

    log::info!(
        "Finished: {} frames, {} ticks, score {}, lives {}",
        frames,
        ticks,
        state.score,
        state.lives
    );

    if let Some(path) = &settings.frame_dump {
        match File::create(path) {
            Ok(file) => match framebuffer.write_ppm(BufWriter::new(file)) {
                Ok(()) => log::info!("Wrote final frame to {}", path),
                Err(e) => log::warn!("Failed to write frame {}: {}", path, e),
            },
            Err(e) => log::warn!("Failed to create {}: {}", path, e),
        }
    }

    match serde_json::to_string_pretty(&state) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize final state: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No headless driver on the web
}
