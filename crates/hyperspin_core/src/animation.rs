//! Animation state and the per-tick update
//!
//! The state starts uninitialized. [`AnimationState::initialize`] samples the
//! hypersphere and seeds the tracked vector; from then on every
//! [`AnimationState::tick`]:
//!
//! 1. Builds the composite rotation from the current config and elapsed time
//! 2. Rotates every point and rescales it back to the configured radius
//! 3. Does the same for the tracked vector
//! 4. Derives size and color from each point's w coordinate
//! 5. Projects points and vector to 3D into the reusable [`Frame`]
//!
//! A tick that fails leaves the point cloud and vector untouched.

use hyperspin_math::mat4::{self, Mat4};
use hyperspin_math::Vec4;

use crate::{
    composer, projector, sampler, ConfigError, DisplayConfig, Frame, HypersphereConfig,
    ProjectedPoint, TickError, VectorSegment,
};

/// Collapse threshold for a rotated point after it was scaled so its largest
/// component is 1; relative to the input length, independent of radius
const MIN_RELATIVE_LENGTH: f32 = 1.0e-6;

/// Geometry owned once the animation is running
#[derive(Debug, Clone)]
struct Running {
    /// Sampled resolution; the cloud is never resized
    resolution: u32,
    points: Vec<Vec4>,
    /// Double buffer so a failed tick never commits a partial update
    scratch: Vec<Vec4>,
    vector: Vec4,
    transform: Mat4,
    ticks: u64,
}

#[derive(Debug, Clone)]
enum Lifecycle {
    Uninitialized,
    Running(Running),
}

/// Owns the rotating point cloud and tracked vector
#[derive(Debug, Clone)]
pub struct AnimationState {
    lifecycle: Lifecycle,
    display: DisplayConfig,
    frame: Frame,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationState {
    /// Create an uninitialized animation with default display ramps
    pub fn new() -> Self {
        Self::with_display(DisplayConfig::default())
    }

    /// Create an uninitialized animation with the given display ramps
    pub fn with_display(display: DisplayConfig) -> Self {
        Self {
            lifecycle: Lifecycle::Uninitialized,
            display,
            frame: Frame::default(),
        }
    }

    /// Sample the hypersphere and start running.
    ///
    /// Calling this again discards the current cloud and samples afresh.
    pub fn initialize(&mut self, config: &HypersphereConfig) -> Result<(), ConfigError> {
        config.validate()?;

        let points = sampler::sample_hypersphere(config.resolution, config.radius);
        let vector = Vec4::ONE.normalized() * config.radius;

        log::debug!(
            "Animation running with {} points, radius {}",
            points.len(),
            config.radius
        );

        self.frame.points.clear();
        self.frame.points.reserve(points.len());
        self.lifecycle = Lifecycle::Running(Running {
            resolution: config.resolution,
            scratch: Vec::with_capacity(points.len()),
            points,
            vector,
            transform: mat4::IDENTITY,
            ticks: 0,
        });

        Ok(())
    }

    /// Advance the animation by `elapsed` seconds.
    ///
    /// `config` is read fresh on every call. A changed radius takes effect
    /// immediately through renormalization; a changed resolution needs
    /// [`AnimationState::initialize`] (see [`AnimationState::needs_rebuild`]).
    pub fn tick(&mut self, config: &HypersphereConfig, elapsed: f32) -> Result<&Frame, TickError> {
        let Lifecycle::Running(running) = &mut self.lifecycle else {
            return Err(TickError::NotInitialized);
        };

        config.validate()?;
        let radius = config.radius;
        let transform = composer::composite_rotation(config, elapsed)?;

        running.scratch.clear();
        for (index, &point) in running.points.iter().enumerate() {
            let rotated = rotate_onto_sphere(transform, point, radius)
                .ok_or(TickError::ZeroNorm { index: Some(index) })?;
            running.scratch.push(rotated);
        }
        let vector = rotate_onto_sphere(transform, running.vector, radius)
            .ok_or(TickError::ZeroNorm { index: None })?;

        std::mem::swap(&mut running.points, &mut running.scratch);
        running.vector = vector;
        running.transform = transform;
        running.ticks += 1;

        let frame = &mut self.frame;
        frame.points.clear();
        frame.clamped_projections = 0;
        for &point in &running.points {
            let (projected, clamped) = ProjectedPoint::from_point(point, radius, &self.display);
            frame.clamped_projections += clamped as usize;
            frame.points.push(projected);
        }

        let start = projector::project(Vec4::ZERO, radius);
        let end = projector::project(running.vector, radius);
        frame.clamped_projections += end.clamped as usize;
        frame.vector = VectorSegment {
            start: start.position,
            end: end.position,
            color: self.display.vector_color,
        };

        if frame.clamped_projections > 0 {
            log::debug!(
                "Tick {}: {} projections clamped at the w = -r singularity",
                running.ticks,
                frame.clamped_projections
            );
        }
        log::trace!("Tick {} advanced by {}s", running.ticks, elapsed);

        Ok(&self.frame)
    }

    /// True once [`AnimationState::initialize`] has succeeded
    pub fn is_running(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Running(_))
    }

    /// True when `config` asks for a different resolution than was sampled
    pub fn needs_rebuild(&self, config: &HypersphereConfig) -> bool {
        match &self.lifecycle {
            Lifecycle::Uninitialized => true,
            Lifecycle::Running(running) => running.resolution != config.resolution,
        }
    }

    /// Current 4D point cloud (empty before initialization)
    pub fn points(&self) -> &[Vec4] {
        match &self.lifecycle {
            Lifecycle::Uninitialized => &[],
            Lifecycle::Running(running) => &running.points,
        }
    }

    /// Number of points in the cloud
    pub fn point_count(&self) -> usize {
        self.points().len()
    }

    /// Current tracked vector in 4D
    pub fn tracked_vector(&self) -> Option<Vec4> {
        match &self.lifecycle {
            Lifecycle::Uninitialized => None,
            Lifecycle::Running(running) => Some(running.vector),
        }
    }

    /// Composite transform applied by the most recent successful tick
    pub fn last_transform(&self) -> Option<Mat4> {
        match &self.lifecycle {
            Lifecycle::Uninitialized => None,
            Lifecycle::Running(running) => Some(running.transform),
        }
    }

    /// Number of successful ticks since the last initialization
    pub fn tick_count(&self) -> u64 {
        match &self.lifecycle {
            Lifecycle::Uninitialized => 0,
            Lifecycle::Running(running) => running.ticks,
        }
    }

    /// Output of the most recent successful tick
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }

    /// Replace the display ramps; applies from the next tick
    pub fn set_display(&mut self, display: DisplayConfig) {
        self.display = display;
    }
}

/// Apply `transform` and rescale the result to length `radius`.
///
/// The point is divided by its largest component first, so the squared
/// length can neither overflow for huge radii nor underflow for tiny ones.
fn rotate_onto_sphere(transform: Mat4, point: Vec4, radius: f32) -> Option<Vec4> {
    let scale = point.max_abs();
    if !(scale.is_finite() && scale > 0.0) {
        return None;
    }

    let rotated = mat4::transform(transform, point / scale);
    let length = rotated.length();
    if !(rotated.is_finite() && length > MIN_RELATIVE_LENGTH) {
        return None;
    }
    Some(rotated * (radius / length))
}
