//! Hyperspin - rotating 4D hypersphere
//!
//! Application layer over [`hyperspin_core`]: layered configuration and the
//! frame-loop driver that feeds the animation its elapsed time.

pub mod config;
pub mod systems;
