//! Error types for the script server

use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

/// Script server errors
#[derive(Error, Debug)]
pub enum ServeError {
    // Configuration errors
    #[error("Failed to read config {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config: {0}")]
    ParseConfig(#[from] toml::de::Error),

    #[error("Invalid allowed origin {origin:?}: {source}")]
    InvalidOrigin {
        origin: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Allowed origin {0:?} has no host")]
    OpaqueOrigin(String),

    #[error("Invalid header value for {name}")]
    InvalidHeader { name: &'static str },

    // Script errors
    #[error("Failed to read script {path}: {source}")]
    ReadScript {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to encode level table: {0}")]
    EncodeLevels(#[from] serde_json::Error),

    // Network errors
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("Server error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for the script server
pub type ServeResult<T> = Result<T, ServeError>;
