//! 4D Mathematics Library
//!
//! This crate provides the 4D vector and rotation primitives used by the
//! Hyperspin hypersphere animation.
//!
//! ## Core Types
//!
//! - [`Vec4`] - 4D vector with x, y, z, w components
//! - [`Mat4`] - 4x4 column-major matrix for linear transforms
//! - [`RotationPlane`] - One of the six coordinate planes of 4D space

mod vec4;
mod plane;
pub mod mat4;

pub use vec4::Vec4;
pub use plane::RotationPlane;
pub use mat4::Mat4;
