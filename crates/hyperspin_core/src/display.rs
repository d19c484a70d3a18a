//! Per-tick output for a rendering backend
//!
//! The backend receives plain 3D positions together with a size and color
//! derived from each point's w coordinate. Points at `w = -r` use the low
//! end of both ramps (small, `kata_color`); points at `w = +r` the high end
//! (large, `ana_color`).

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};
use hyperspin_math::Vec4;

use crate::projector;

/// Size and color ramps for the projected output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Point size at w = -radius
    pub min_size: f32,
    /// Point size at w = +radius
    pub max_size: f32,
    /// Color at w = -radius [r, g, b, a]
    pub kata_color: [f32; 4],
    /// Color at w = +radius [r, g, b, a]
    pub ana_color: [f32; 4],
    /// Color of the tracked vector segment [r, g, b, a]
    pub vector_color: [f32; 4],
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            min_size: 0.05,
            max_size: 0.3,
            kata_color: [0.0, 0.0, 1.0, 1.0],
            ana_color: [1.0, 0.0, 0.0, 1.0],
            vector_color: [0.0, 1.0, 0.0, 1.0],
        }
    }
}

impl DisplayConfig {
    /// Point size for depth factor `t`
    #[inline]
    pub fn size_for(&self, t: f32) -> f32 {
        self.min_size + (self.max_size - self.min_size) * t
    }

    /// Point color for depth factor `t`
    pub fn color_for(&self, t: f32) -> [f32; 4] {
        let a = self.kata_color;
        let b = self.ana_color;
        [
            a[0] + (b[0] - a[0]) * t,
            a[1] + (b[1] - a[1]) * t,
            a[2] + (b[2] - a[2]) * t,
            a[3] + (b[3] - a[3]) * t,
        ]
    }
}

/// Map w in `[-radius, radius]` to `[0, 1]`.
///
/// This is the plain linear remap `(w / radius + 1) / 2`. The clamp only
/// changes off-sphere inputs (`|w| > radius`, e.g. renormalization rounding).
#[inline]
pub fn depth_factor(w: f32, radius: f32) -> f32 {
    ((w / radius + 1.0) * 0.5).clamp(0.0, 1.0)
}

/// A hypersphere point after projection
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct ProjectedPoint {
    /// Projected 3D position
    pub position: [f32; 3],
    /// Display size
    pub size: f32,
    /// Color interpolation factor in [0, 1]
    pub depth: f32,
    /// Resolved RGBA color
    pub color: [f32; 4],
}

impl ProjectedPoint {
    /// Project `point` and derive its display scalars.
    ///
    /// Returns the point and whether the perspective divide was clamped.
    pub fn from_point(point: Vec4, radius: f32, display: &DisplayConfig) -> (Self, bool) {
        let projection = projector::project(point, radius);
        let depth = depth_factor(point.w, radius);
        let projected = Self {
            position: projection.position,
            size: display.size_for(depth),
            depth,
            color: display.color_for(depth),
        };
        (projected, projection.clamped)
    }
}

/// Line from the projected 4D origin to the projected tracked vector
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct VectorSegment {
    pub start: [f32; 3],
    pub end: [f32; 3],
    pub color: [f32; 4],
}

/// Everything a backend needs to draw one tick
#[derive(Clone, Debug, Default)]
pub struct Frame {
    /// One entry per point cloud element, in sampling order
    pub points: Vec<ProjectedPoint>,
    /// The rotating direction indicator
    pub vector: VectorSegment,
    /// How many projections hit the singularity clamp this tick
    pub clamped_projections: usize,
}

impl Frame {
    /// Raw bytes of the point list, ready for a vertex buffer upload
    pub fn point_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    #[test]
    fn test_depth_factor_range() {
        assert_eq!(depth_factor(-5.0, 5.0), 0.0);
        assert_eq!(depth_factor(0.0, 5.0), 0.5);
        assert_eq!(depth_factor(5.0, 5.0), 1.0);
        // Rounding just past the pole stays in range
        assert_eq!(depth_factor(5.0001, 5.0), 1.0);
        assert_eq!(depth_factor(-5.0001, 5.0), 0.0);
    }

    #[test]
    fn test_size_ramp() {
        let display = DisplayConfig::default();
        assert!((display.size_for(0.0) - 0.05).abs() < EPSILON);
        assert!((display.size_for(1.0) - 0.3).abs() < EPSILON);
        assert!((display.size_for(0.5) - 0.175).abs() < EPSILON);
    }

    #[test]
    fn test_color_ramp_blue_to_red() {
        let display = DisplayConfig::default();
        assert_eq!(display.color_for(0.0), [0.0, 0.0, 1.0, 1.0]);
        assert_eq!(display.color_for(1.0), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(display.color_for(0.5), [0.5, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_projected_point_from_point() {
        let display = DisplayConfig::default();
        let (p, clamped) = ProjectedPoint::from_point(Vec4::new(1.0, 0.0, 0.0, 0.0), 1.0, &display);
        assert!(!clamped);
        assert_eq!(p.position, [1.0, 0.0, 0.0]);
        assert_eq!(p.depth, 0.5);
        assert_eq!(p.color, display.color_for(0.5));
    }

    #[test]
    fn test_projected_point_at_singularity() {
        let display = DisplayConfig::default();
        let (p, clamped) = ProjectedPoint::from_point(Vec4::new(0.0, 0.0, 0.0, -1.0), 1.0, &display);
        assert!(clamped);
        assert_eq!(p.depth, 0.0);
        assert_eq!(p.color, display.kata_color);
    }

    #[test]
    fn test_point_bytes_layout() {
        let frame = Frame {
            points: vec![ProjectedPoint::default(); 3],
            ..Frame::default()
        };
        assert_eq!(std::mem::size_of::<ProjectedPoint>(), 36);
        assert_eq!(frame.point_bytes().len(), 3 * 36);
    }
}
