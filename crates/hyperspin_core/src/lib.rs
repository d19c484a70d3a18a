//! Core geometry engine for Hyperspin
//!
//! Samples a 4D hypersphere into a point cloud, spins it through the six
//! coordinate planes every tick and projects it down to 3D:
//!
//! - [`HypersphereConfig`] - Resolution, radius and per-plane angular speeds
//! - [`sampler`] - Deterministic hypersphere point generation
//! - [`composer`] - Six plane rotations folded into one composite transform
//! - [`projector`] - Perspective divide along the w axis
//! - [`DisplayConfig`] - Size and color ramps derived from w
//! - [`AnimationState`] - Owns the cloud and tracked vector, runs the tick
//! - [`Frame`] - Per-tick output consumed by a rendering backend

mod error;
mod config;
mod display;
mod animation;
pub mod composer;
pub mod sampler;
pub mod projector;

pub use error::{ConfigError, TickError};
pub use config::HypersphereConfig;
pub use display::{DisplayConfig, Frame, ProjectedPoint, VectorSegment, depth_factor};
pub use animation::AnimationState;

// Re-export commonly used types from hyperspin_math for convenience
pub use hyperspin_math::{Mat4, RotationPlane, Vec4};
