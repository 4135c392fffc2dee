//! Mnemo Time - clocks and scheduled steps
//!
//! The game is single-threaded and event-driven. Animation and feedback
//! delays are modelled as deadlines rather than callbacks:
//! - `Clock`: source of monotonic `GameTime` (system or manual)
//! - `TimerSlot`: holds at most one pending step; scheduling a new step
//!   cancels the previous one

pub mod clock;
pub mod timer;

pub use clock::*;
pub use timer::*;
