//! Geometry configuration
//!
//! The configuration is plain data owned by the caller. It may be changed
//! between ticks; every tick reads it fresh.

use serde::{Serialize, Deserialize};
use hyperspin_math::RotationPlane;

use crate::ConfigError;

/// Hypersphere sampling and rotation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HypersphereConfig {
    /// Sample density along each angular sweep
    pub resolution: u32,
    /// Hypersphere radius
    pub radius: f32,
    /// Multiplier applied to all six plane speeds
    pub rotation_speed: f32,
    /// XY plane speed (radians per second)
    pub rotation_xy: f32,
    /// XZ plane speed (radians per second)
    pub rotation_xz: f32,
    /// XW plane speed (radians per second)
    pub rotation_xw: f32,
    /// YZ plane speed (radians per second)
    pub rotation_yz: f32,
    /// YW plane speed (radians per second)
    pub rotation_yw: f32,
    /// ZW plane speed (radians per second)
    pub rotation_zw: f32,
}

impl Default for HypersphereConfig {
    fn default() -> Self {
        Self {
            resolution: 32,
            radius: 5.0,
            rotation_speed: 1.0,
            rotation_xy: 1.0,
            rotation_xz: 1.0,
            rotation_xw: 1.0,
            rotation_yz: 1.0,
            rotation_yw: 1.0,
            rotation_zw: 1.0,
        }
    }
}

impl HypersphereConfig {
    /// Create a config with the given resolution and radius and default speeds
    pub fn new(resolution: u32, radius: f32) -> Self {
        Self {
            resolution,
            radius,
            ..Self::default()
        }
    }

    /// Set the global speed multiplier
    pub fn with_rotation_speed(mut self, speed: f32) -> Self {
        self.rotation_speed = speed;
        self
    }

    /// Set the angular speed of a single plane
    pub fn with_plane_speed(mut self, plane: RotationPlane, speed: f32) -> Self {
        self.set_plane_speed(plane, speed);
        self
    }

    /// Set every plane to the same angular speed
    pub fn with_uniform_speed(mut self, speed: f32) -> Self {
        for plane in RotationPlane::ALL {
            self.set_plane_speed(plane, speed);
        }
        self
    }

    /// Angular speed of a single plane, before the multiplier
    pub fn plane_speed(&self, plane: RotationPlane) -> f32 {
        match plane {
            RotationPlane::XY => self.rotation_xy,
            RotationPlane::XZ => self.rotation_xz,
            RotationPlane::XW => self.rotation_xw,
            RotationPlane::YZ => self.rotation_yz,
            RotationPlane::YW => self.rotation_yw,
            RotationPlane::ZW => self.rotation_zw,
        }
    }

    pub fn set_plane_speed(&mut self, plane: RotationPlane, speed: f32) {
        let slot = match plane {
            RotationPlane::XY => &mut self.rotation_xy,
            RotationPlane::XZ => &mut self.rotation_xz,
            RotationPlane::XW => &mut self.rotation_xw,
            RotationPlane::YZ => &mut self.rotation_yz,
            RotationPlane::YW => &mut self.rotation_yw,
            RotationPlane::ZW => &mut self.rotation_zw,
        };
        *slot = speed;
    }

    /// Check the sampling parameters.
    ///
    /// Speeds are checked per tick instead, since they only matter once
    /// multiplied by an elapsed time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolution < 1 {
            return Err(ConfigError::InvalidResolution(self.resolution));
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(ConfigError::InvalidRadius(self.radius));
        }
        Ok(())
    }
}
