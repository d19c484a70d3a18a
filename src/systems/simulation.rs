//! Animation simulation system
//!
//! Stands in for a rendering backend's frame loop:
//! - Delta time calculation (fixed step or wall clock)
//! - Resampling when the configured resolution changes
//! - Ticking the animation
//! - Summarizing the produced frame for logging

use std::time::Instant;
use hyperspin_core::{AnimationState, Frame, HypersphereConfig, TickError};

use crate::config::SimulationConfig;

/// Condensed view of one tick's output
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSummary {
    /// Number of projected points
    pub point_count: usize,
    /// Largest distance of any projected point from the origin
    pub extent: f32,
    /// Mean color interpolation factor across the cloud
    pub mean_depth: f32,
    /// Projected tip of the tracked vector
    pub vector_end: [f32; 3],
    /// Projections clamped at the singularity
    pub clamped: usize,
}

impl FrameSummary {
    pub fn from_frame(frame: &Frame) -> Self {
        let point_count = frame.points.len();
        let extent = frame
            .points
            .iter()
            .map(|p| {
                let [x, y, z] = p.position;
                (x * x + y * y + z * z).sqrt()
            })
            .fold(0.0f32, f32::max);
        let mean_depth = if point_count > 0 {
            frame.points.iter().map(|p| p.depth).sum::<f32>() / point_count as f32
        } else {
            0.0
        };

        Self {
            point_count,
            extent,
            mean_depth,
            vector_end: frame.vector.end,
            clamped: frame.clamped_projections,
        }
    }
}

/// Result of a simulation update
#[derive(Debug, Clone, Copy)]
pub struct SimulationResult {
    /// Whether the cloud was resampled before this tick
    pub rebuilt: bool,
    /// Summary of the frame produced by the tick
    pub summary: FrameSummary,
}

/// Drives the animation once per frame
pub struct SimulationSystem {
    last_frame: Instant,
}

impl SimulationSystem {
    /// Create a new simulation system
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
        }
    }

    /// Elapsed time to feed the next tick
    pub fn next_delta(&mut self, settings: &SimulationConfig) -> f32 {
        let now = Instant::now();
        let raw_dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;

        if settings.realtime {
            // Cap dt so a stall doesn't spin the cloud by a huge angle
            raw_dt.min(settings.max_delta)
        } else {
            settings.fixed_timestep
        }
    }

    /// Run one simulation frame
    ///
    /// # Arguments
    /// * `animation` - Animation state owning the point cloud
    /// * `config` - Current geometry configuration (may have changed since the last frame)
    /// * `dt` - Elapsed time since the previous frame
    ///
    /// # Returns
    /// SimulationResult with the rebuild flag and frame summary
    pub fn update(
        &mut self,
        animation: &mut AnimationState,
        config: &HypersphereConfig,
        dt: f32,
    ) -> Result<SimulationResult, TickError> {
        // 1. Resample if the resolution changed
        let rebuilt = animation.needs_rebuild(config);
        if rebuilt {
            log::info!(
                "Sampling hypersphere at resolution {} (radius {})",
                config.resolution,
                config.radius
            );
            animation.initialize(config)?;
        }

        // 2. Rotate, renormalize and project
        let frame = animation.tick(config, dt)?;

        Ok(SimulationResult {
            rebuilt,
            summary: FrameSummary::from_frame(frame),
        })
    }
}

impl Default for SimulationSystem {
    fn default() -> Self {
        Self::new()
    }
}
