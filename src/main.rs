//! Hyperspin - rotating 4D hypersphere
//!
//! Headless driver: samples the hypersphere, spins it for the configured
//! number of frames and logs what a renderer would be handed each frame.

use std::process::ExitCode;
use std::time::Duration;

use hyperspin::config::AppConfig;
use hyperspin::systems::SimulationSystem;
use hyperspin_core::AnimationState;

fn main() -> ExitCode {
    // Load configuration before logging so the configured level applies
    let loaded = AppConfig::load();
    let log_level = loaded
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    // RUST_LOG still wins over the configured level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
    log::info!("Starting Hyperspin");

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let mut animation = AnimationState::with_display(config.display.clone());
    if let Err(e) = animation.initialize(&config.hypersphere) {
        log::error!("Cannot start animation: {}", e);
        return ExitCode::FAILURE;
    }
    log::info!(
        "Sampled {} points at resolution {} (radius {})",
        animation.point_count(),
        config.hypersphere.resolution,
        config.hypersphere.radius
    );

    let settings = &config.simulation;
    let mut simulation = SimulationSystem::new();
    let mut failed = 0u32;

    for frame_index in 0..settings.frames {
        let dt = simulation.next_delta(settings);

        match simulation.update(&mut animation, &config.hypersphere, dt) {
            Ok(result) => {
                let report = settings.report_interval > 0
                    && (frame_index + 1) % settings.report_interval == 0;
                if report {
                    let s = result.summary;
                    log::info!(
                        "Frame {}: {} points, extent {:.3}, mean depth {:.3}, vector tip [{:.3}, {:.3}, {:.3}]",
                        frame_index + 1,
                        s.point_count,
                        s.extent,
                        s.mean_depth,
                        s.vector_end[0],
                        s.vector_end[1],
                        s.vector_end[2],
                    );
                }
                if result.summary.clamped > 0 {
                    log::debug!(
                        "Frame {}: {} projections clamped",
                        frame_index + 1,
                        result.summary.clamped
                    );
                }
            }
            Err(e) => {
                // Skip this frame; the next one gets a fresh attempt
                failed += 1;
                log::error!("Frame {} failed: {}", frame_index + 1, e);
            }
        }

        if settings.realtime {
            std::thread::sleep(Duration::try_from_secs_f32(settings.fixed_timestep).unwrap_or_default());
        }
    }

    log::info!(
        "Finished {} frames ({} failed, {} ticks applied)",
        settings.frames,
        failed,
        animation.tick_count()
    );

    if failed == settings.frames && settings.frames > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
