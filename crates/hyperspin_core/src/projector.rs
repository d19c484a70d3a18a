//! Perspective projection from 4D to 3D along the w axis
//!
//! `factor = 1 / (1 + w / r)` scales x, y and z. Points at `w = 0` keep
//! their xyz; points toward `w = +r` shrink by up to half; points toward
//! `w = -r` blow up.
//!
//! At `w = -r` the divide is singular. The denominator is floored at
//! [`MIN_PERSPECTIVE_DENOMINATOR`], which caps the factor at
//! [`MAX_PERSPECTIVE_FACTOR`] and keeps it positive, so every finite input
//! projects to a finite output.

use hyperspin_math::Vec4;

/// Smallest denominator allowed in the perspective divide
pub const MIN_PERSPECTIVE_DENOMINATOR: f32 = 1.0e-3;

/// Largest perspective factor the projector will produce
pub const MAX_PERSPECTIVE_FACTOR: f32 = 1.0 / MIN_PERSPECTIVE_DENOMINATOR;

/// Result of projecting a single point
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    /// Projected 3D coordinate
    pub position: [f32; 3],
    /// Perspective factor that was applied
    pub factor: f32,
    /// True when the denominator hit the floor
    pub clamped: bool,
}

/// Perspective factor for depth `w` on a sphere of radius `radius`.
///
/// Returns the factor and whether it was clamped.
#[inline]
pub fn perspective_factor(w: f32, radius: f32) -> (f32, bool) {
    let denominator = 1.0 + w / radius;
    if denominator >= MIN_PERSPECTIVE_DENOMINATOR {
        (1.0 / denominator, false)
    } else {
        (MAX_PERSPECTIVE_FACTOR, true)
    }
}

/// Project a 4D point to 3D
pub fn project(point: Vec4, radius: f32) -> Projection {
    let (factor, clamped) = perspective_factor(point.w, radius);
    Projection {
        position: [point.x * factor, point.y * factor, point.z * factor],
        factor,
        clamped,
    }
}
