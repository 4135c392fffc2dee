//! Server configuration
//!
//! Read from an optional TOML file; every field has a default.
//!
//! ```toml
//! bind = "0.0.0.0:8787"
//! allowed_origin = "https://mnemo-game.github.io"
//! script_path = "dist/game.js"
//!
//! [cache]
//! s_maxage = 86400
//! stale_while_revalidate = 3600
//! ```

use std::fs;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use mnemo_core::LevelTable;
use serde::Deserialize;

use crate::{ServeError, ServeResult};

/// Shared-cache lifetimes for the served script
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CachePolicy {
    /// Seconds a shared cache may serve the script as fresh
    pub s_maxage: u64,
    /// Seconds a stale copy may be served while revalidating
    pub stale_while_revalidate: u64,
}

impl CachePolicy {
    pub const DEFAULT_S_MAXAGE: u64 = 86_400;
    pub const DEFAULT_STALE_WHILE_REVALIDATE: u64 = 3_600;

    /// `Cache-Control` header value
    pub fn header_value(&self) -> String {
        format!(
            "public, max-age=0, s-maxage={}, stale-while-revalidate={}",
            self.s_maxage, self.stale_while_revalidate
        )
    }
}

impl Default for CachePolicy {
    fn default() -> Self {
        CachePolicy {
            s_maxage: Self::DEFAULT_S_MAXAGE,
            stale_while_revalidate: Self::DEFAULT_STALE_WHILE_REVALIDATE,
        }
    }
}

/// Script server configuration
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServeConfig {
    /// Listen address
    pub bind: SocketAddr,
    /// The one non-local origin allowed to load the script
    pub allowed_origin: Option<String>,
    /// Script file to serve; the bootstrap script is generated when unset
    pub script_path: Option<PathBuf>,
    pub cache: CachePolicy,
    /// Levels published by the bootstrap script
    pub levels: LevelTable,
}

impl ServeConfig {
    pub const DEFAULT_PORT: u16 = 8787;
    pub const DEFAULT_ORIGIN: &'static str = "https://mnemo-game.github.io";

    /// Parse a TOML document
    pub fn from_toml(text: &str) -> ServeResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a TOML config file
    pub fn load(path: impl AsRef<Path>) -> ServeResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ServeError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Local config for tests: ephemeral port, no configured origin
    pub fn local() -> Self {
        ServeConfig {
            bind: SocketAddr::from((Ipv4Addr::LOCALHOST, 0)),
            allowed_origin: None,
            ..Default::default()
        }
    }

    pub fn with_script_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.script_path = Some(path.into());
        self
    }

    pub fn with_allowed_origin(mut self, origin: impl Into<String>) -> Self {
        self.allowed_origin = Some(origin.into());
        self
    }
}

impl Default for ServeConfig {
    fn default() -> Self {
        ServeConfig {
            bind: SocketAddr::from((Ipv4Addr::LOCALHOST, Self::DEFAULT_PORT)),
            allowed_origin: Some(Self::DEFAULT_ORIGIN.to_string()),
            script_path: None,
            cache: CachePolicy::default(),
            levels: LevelTable::default(),
        }
    }
}
