//! Mnemo Serve - HTTP endpoint for the injectable game script
//!
//! A thin header wrapper around one script:
//! - `GET` / `OPTIONS` on every path
//! - CORS allow-list: one configured origin plus local origins
//! - Shared-cache headers with a revalidation window
//! - `ETag` validation
//!
//! The script is read from a file or generated from the level table.

pub mod config;
pub mod cors;
pub mod error;
pub mod script;
pub mod server;

pub use config::*;
pub use cors::*;
pub use error::*;
pub use script::*;
pub use server::*;
