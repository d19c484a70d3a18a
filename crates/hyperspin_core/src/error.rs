//! Error types
//!
//! Configuration errors abort initialization. Tick errors abort only the
//! tick that raised them; the point cloud is left as it was before the tick.

use std::fmt;
use hyperspin_math::RotationPlane;

/// Rejected geometry configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Resolution must be at least 1
    InvalidResolution(u32),
    /// Radius must be finite and strictly positive
    InvalidRadius(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidResolution(r) => {
                write!(f, "Invalid resolution {}: must be at least 1", r)
            }
            ConfigError::InvalidRadius(r) => {
                write!(f, "Invalid radius {}: must be finite and greater than zero", r)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Fatal error for a single tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickError {
    /// `tick` called before `initialize`
    NotInitialized,
    /// Elapsed time was NaN, infinite or negative
    InvalidElapsed(f32),
    /// A speed setting was NaN or infinite
    NonFiniteSpeed { name: &'static str, value: f32 },
    /// speed * elapsed * multiplier overflowed for a plane
    NonFiniteAngle { plane: RotationPlane, value: f32 },
    /// The configuration changed to something invalid since initialization
    InvalidConfig(ConfigError),
    /// A rotated point collapsed to (numerically) zero length.
    /// `index` is `None` for the tracked vector.
    ZeroNorm { index: Option<usize> },
}

impl fmt::Display for TickError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TickError::NotInitialized => write!(f, "Animation ticked before initialization"),
            TickError::InvalidElapsed(dt) => {
                write!(f, "Invalid elapsed time {}: must be finite and non-negative", dt)
            }
            TickError::NonFiniteSpeed { name, value } => {
                write!(f, "Speed '{}' is not finite: {}", name, value)
            }
            TickError::NonFiniteAngle { plane, value } => {
                write!(f, "Rotation angle for plane {} is not finite: {}", plane, value)
            }
            TickError::InvalidConfig(e) => write!(f, "Invalid configuration: {}", e),
            TickError::ZeroNorm { index: Some(i) } => {
                write!(f, "Point {} collapsed to zero length after rotation", i)
            }
            TickError::ZeroNorm { index: None } => {
                write!(f, "Tracked vector collapsed to zero length after rotation")
            }
        }
    }
}

impl std::error::Error for TickError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TickError::InvalidConfig(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for TickError {
    fn from(e: ConfigError) -> Self {
        TickError::InvalidConfig(e)
    }
}
