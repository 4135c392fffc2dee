//! Mnemo Engine - the emoji sequence memory game
//!
//! Components:
//! - Sequence Engine (`engine`): owns the game state and the turn lifecycle
//!   generate → present → collect → verify → advance/end
//! - Presentation Driver (`presentation`): per-round reveal state machine
//!   `Idle → Revealing → AwaitingInput → Resolved`
//! - Option pool and sequence generation (`sequence`)
//! - Pluggable scoring policies (`scoring`)
//! - Host collaborators (`host`): every integration point is optional
//!
//! The engine never blocks or spawns. Hosts feed it choices and call
//! `tick()` from their event loop so scheduled reveal and feedback steps fire.

pub mod config;
pub mod engine;
pub mod host;
pub mod presentation;
pub mod scoring;
pub mod sequence;

#[cfg(test)]
mod testing;

pub use config::*;
pub use engine::*;
pub use host::*;
pub use presentation::*;
pub use scoring::*;
pub use sequence::*;
