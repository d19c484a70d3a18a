//! 4x4 Matrix utilities for 4D rotations
//!
//! Matrices are column-major: `m[col][row]`. A plane rotation in the `(a, b)`
//! plane with angle θ has `cos θ` at `(a, a)` and `(b, b)`, `-sin θ` at
//! row `a` column `b`, and `sin θ` at row `b` column `a`. Positive angles
//! therefore rotate axis `a` toward axis `b`.

use crate::{RotationPlane, Vec4};

/// 4x4 matrix type (column-major)
pub type Mat4 = [[f32; 4]; 4];

/// Identity matrix
pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Create a rotation matrix in the 2D plane spanned by axes `a` and `b`.
///
/// Everything outside the `(a, b)` block is identity, so the orthogonal
/// pair of axes is left fixed.
///
/// # Arguments
/// * `a`, `b` - Indices of the axes forming the rotation plane (0=X, 1=Y, 2=Z, 3=W)
/// * `angle` - Rotation angle in radians
///
/// # Example
/// ```
/// use hyperspin_math::{Vec4, mat4::{axis_rotation, transform}};
/// let m = axis_rotation(0, 3, std::f32::consts::FRAC_PI_2);
/// let v = transform(m, Vec4::X);
/// assert!((v.w - 1.0).abs() < 1e-6);
/// ```
pub fn axis_rotation(a: usize, b: usize, angle: f32) -> Mat4 {
    debug_assert!(a < 4 && b < 4 && a != b);

    let cs = angle.cos();
    let sn = angle.sin();

    let mut m = IDENTITY;

    m[a][a] = cs;
    m[b][b] = cs;
    m[a][b] = sn;
    m[b][a] = -sn;

    m
}

/// Rotation confined to one of the six coordinate planes
#[inline]
pub fn plane_rotation(plane: RotationPlane, angle: f32) -> Mat4 {
    let (a, b) = plane.axes();
    axis_rotation(a, b, angle)
}

/// Read entry at `(row, col)`
#[inline]
pub fn entry(m: &Mat4, row: usize, col: usize) -> f32 {
    m[col][row]
}

/// Multiply two 4x4 matrices: result = a * b
///
/// In column-major convention, this applies b first, then a.
#[allow(clippy::needless_range_loop)]
pub fn mul(a: Mat4, b: Mat4) -> Mat4 {
    let mut result = [[0.0f32; 4]; 4];

    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                result[i][j] += a[k][j] * b[i][k];
            }
        }
    }

    result
}

/// Transform a Vec4 by a 4x4 matrix (column-major)
///
/// result = M * v
pub fn transform(m: Mat4, v: Vec4) -> Vec4 {
    Vec4::new(
        m[0][0] * v.x + m[1][0] * v.y + m[2][0] * v.z + m[3][0] * v.w,
        m[0][1] * v.x + m[1][1] * v.y + m[2][1] * v.z + m[3][1] * v.w,
        m[0][2] * v.x + m[1][2] * v.y + m[2][2] * v.z + m[3][2] * v.w,
        m[0][3] * v.x + m[1][3] * v.y + m[2][3] * v.z + m[3][3] * v.w,
    )
}

/// Transpose a matrix (the inverse of a rotation)
pub fn transpose(m: Mat4) -> Mat4 {
    [
        [m[0][0], m[1][0], m[2][0], m[3][0]],
        [m[0][1], m[1][1], m[2][1], m[3][1]],
        [m[0][2], m[1][2], m[2][2], m[3][2]],
        [m[0][3], m[1][3], m[2][3], m[3][3]],
    ]
}
