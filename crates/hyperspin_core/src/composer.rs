//! Composite rotation for one tick
//!
//! Each plane turns by `speed * elapsed * rotation_speed` radians. The six
//! elementary rotations are multiplied in [`RotationPlane::ALL`] order, so
//! the composite is `XY * XZ * XW * YZ * YW * ZW`.

use hyperspin_math::mat4::{self, Mat4};
use hyperspin_math::RotationPlane;

use crate::{HypersphereConfig, TickError};

/// Per-plane angles for this tick, indexed by [`RotationPlane::index`].
///
/// Fails on a non-finite or negative elapsed time, a non-finite speed, or an
/// angle that overflowed.
pub fn plane_angles(config: &HypersphereConfig, elapsed: f32) -> Result<[f32; 6], TickError> {
    if !(elapsed.is_finite() && elapsed >= 0.0) {
        return Err(TickError::InvalidElapsed(elapsed));
    }
    if !config.rotation_speed.is_finite() {
        return Err(TickError::NonFiniteSpeed {
            name: "rotation_speed",
            value: config.rotation_speed,
        });
    }

    let mut angles = [0.0f32; 6];
    for plane in RotationPlane::ALL {
        let speed = config.plane_speed(plane);
        if !speed.is_finite() {
            return Err(TickError::NonFiniteSpeed {
                name: speed_name(plane),
                value: speed,
            });
        }

        let angle = speed * elapsed * config.rotation_speed;
        if !angle.is_finite() {
            return Err(TickError::NonFiniteAngle { plane, value: angle });
        }
        angles[plane.index()] = angle;
    }

    Ok(angles)
}

/// Multiply the six plane rotations in composition order
pub fn compose(angles: &[f32; 6]) -> Mat4 {
    RotationPlane::ALL
        .iter()
        .zip(angles)
        .fold(mat4::IDENTITY, |acc, (&plane, &angle)| {
            mat4::mul(acc, mat4::plane_rotation(plane, angle))
        })
}

/// Composite transform for a tick of length `elapsed`
pub fn composite_rotation(config: &HypersphereConfig, elapsed: f32) -> Result<Mat4, TickError> {
    let angles = plane_angles(config, elapsed)?;
    Ok(compose(&angles))
}

fn speed_name(plane: RotationPlane) -> &'static str {
    match plane {
        RotationPlane::XY => "rotation_xy",
        RotationPlane::XZ => "rotation_xz",
        RotationPlane::XW => "rotation_xw",
        RotationPlane::YZ => "rotation_yz",
        RotationPlane::YW => "rotation_yw",
        RotationPlane::ZW => "rotation_zw",
    }
}
