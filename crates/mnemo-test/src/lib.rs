//! Mnemo Test Harness - Deterministic game simulation
//!
//! This crate provides:
//! - A timestamped recording host
//! - Scripted players (perfect, error-prone, fixed choices)
//! - A simulation harness driving the engine on a manual clock

pub mod recorder;
pub mod player;
pub mod simulation;

pub use recorder::*;
pub use player::*;
pub use simulation::*;
