//! The six coordinate planes of 4D space
//!
//! In 4D, rotations happen in planes rather than around axes. Each plane is
//! spanned by two of the four coordinate axes; the remaining pair is left
//! pointwise fixed by a rotation in that plane.

use std::fmt;

/// The 6 rotation planes in 4D space
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RotationPlane {
    /// XY plane - leaves Z and W fixed
    XY,
    /// XZ plane - leaves Y and W fixed
    XZ,
    /// XW plane - ana-kata rotation affecting X
    XW,
    /// YZ plane - leaves X and W fixed
    YZ,
    /// YW plane - ana-kata rotation affecting Y
    YW,
    /// ZW plane - ana-kata rotation affecting Z
    ZW,
}

impl RotationPlane {
    /// All planes in composition order.
    ///
    /// Plane rotations do not commute, so the composite transform is always
    /// built as `XY * XZ * XW * YZ * YW * ZW`.
    pub const ALL: [RotationPlane; 6] = [
        RotationPlane::XY,
        RotationPlane::XZ,
        RotationPlane::XW,
        RotationPlane::YZ,
        RotationPlane::YW,
        RotationPlane::ZW,
    ];

    /// Axis indices `(a, b)` spanning this plane (0=X, 1=Y, 2=Z, 3=W)
    pub const fn axes(self) -> (usize, usize) {
        match self {
            RotationPlane::XY => (0, 1),
            RotationPlane::XZ => (0, 2),
            RotationPlane::XW => (0, 3),
            RotationPlane::YZ => (1, 2),
            RotationPlane::YW => (1, 3),
            RotationPlane::ZW => (2, 3),
        }
    }

    /// Position of this plane in [`RotationPlane::ALL`]
    pub const fn index(self) -> usize {
        match self {
            RotationPlane::XY => 0,
            RotationPlane::XZ => 1,
            RotationPlane::XW => 2,
            RotationPlane::YZ => 3,
            RotationPlane::YW => 4,
            RotationPlane::ZW => 5,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            RotationPlane::XY => "XY",
            RotationPlane::XZ => "XZ",
            RotationPlane::XW => "XW",
            RotationPlane::YZ => "YZ",
            RotationPlane::YW => "YW",
            RotationPlane::ZW => "ZW",
        }
    }
}

impl fmt::Display for RotationPlane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
