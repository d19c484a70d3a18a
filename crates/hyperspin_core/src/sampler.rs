//! Hypersphere point sampling
//!
//! Three nested angular sweeps cover the 3-sphere of radius `r`:
//!
//! - θ over `[0, 2π)` in `R` steps (XY longitude)
//! - φ over `[0, π)` in `R / 2` steps (latitude)
//! - ψ over `[0, 2π)` in `R` steps (ZW longitude)
//!
//! ```text
//! x = r cos θ sin φ    z = r cos φ cos ψ
//! y = r sin θ sin φ    w = r cos φ sin ψ
//! ```
//!
//! so `x² + y² + z² + w² = r² sin² φ + r² cos² φ = r²`. Latitude gets half
//! the steps to keep the poles from crowding; the sampling is not uniform
//! by area and clusters near φ = 0.

use std::f32::consts::{PI, TAU};
use hyperspin_math::Vec4;

/// Below this resolution the sample set is too sparse to read as a sphere
pub const MIN_RECOMMENDED_RESOLUTION: u32 = 4;

/// Number of points produced for `resolution`: `R * (R / 2) * R`
pub fn point_count(resolution: u32) -> usize {
    let r = resolution as usize;
    r * (r / 2) * r
}

/// Generate the hypersphere point cloud.
///
/// Output order is θ-major, then φ, then ψ. Callers validate `radius > 0`
/// and `resolution >= 1` beforehand.
pub fn sample_hypersphere(resolution: u32, radius: f32) -> Vec<Vec4> {
    if resolution < MIN_RECOMMENDED_RESOLUTION {
        log::warn!(
            "Hypersphere resolution {} is below {}; sample set is degenerate",
            resolution,
            MIN_RECOMMENDED_RESOLUTION
        );
    }

    let latitude_steps = resolution / 2;
    let mut points = Vec::with_capacity(point_count(resolution));

    for i in 0..resolution {
        let theta = TAU * i as f32 / resolution as f32;
        let (sin_theta, cos_theta) = theta.sin_cos();

        for j in 0..latitude_steps {
            let phi = PI * j as f32 / latitude_steps as f32;
            let (sin_phi, cos_phi) = phi.sin_cos();

            for k in 0..resolution {
                let psi = TAU * k as f32 / resolution as f32;
                let (sin_psi, cos_psi) = psi.sin_cos();

                points.push(Vec4::new(
                    radius * cos_theta * sin_phi,
                    radius * sin_theta * sin_phi,
                    radius * cos_phi * cos_psi,
                    radius * cos_phi * sin_psi,
                ));
            }
        }
    }

    log::debug!(
        "Sampled {} hypersphere points (resolution {}, radius {})",
        points.len(),
        resolution,
        radius
    );

    points
}
