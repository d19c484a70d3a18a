//! Application systems
//!
//! Frame-loop systems kept out of main.rs for testability.

mod simulation;

pub use simulation::{FrameSummary, SimulationResult, SimulationSystem};
