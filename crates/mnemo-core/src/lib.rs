//! Mnemo Core - Fundamental types for the emoji sequence memory game
//!
//! This crate defines the types shared by the engine, the hosts and the server:
//! - Symbols (one emoji each)
//! - Level configuration and the clamping level table
//! - Game state counters and end reasons
//! - Result summaries and score tiers
//! - Game time primitives

pub mod symbol;
pub mod level;
pub mod state;
pub mod result;
pub mod time;
pub mod error;

pub use symbol::*;
pub use level::*;
pub use state::*;
pub use result::*;
pub use time::*;
pub use error::*;
