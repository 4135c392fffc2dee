//! The served script and its entity tag

use std::fs;
use std::path::{Path, PathBuf};

use axum::body::Bytes;
use axum::http::HeaderValue;
use mnemo_core::LevelTable;
use sha2::{Digest, Sha256};

use crate::{ServeError, ServeResult};

/// Where the script text came from
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScriptSource {
    File(PathBuf),
    /// Generated from the level table
    Bootstrap,
    Inline,
}

/// Script text held in memory with a precomputed `ETag`
#[derive(Clone, Debug)]
pub struct ScriptBundle {
    body: Bytes,
    etag: HeaderValue,
    source: ScriptSource,
}

impl ScriptBundle {
    /// Wrap script text
    pub fn new(text: impl Into<String>, source: ScriptSource) -> ServeResult<Self> {
        let body = Bytes::from(text.into());
        let digest = Sha256::digest(&body);
        let etag = HeaderValue::from_str(&format!("\"{:x}\"", digest))
            .map_err(|_| ServeError::InvalidHeader { name: "etag" })?;

        Ok(ScriptBundle { body, etag, source })
    }

    pub fn inline(text: impl Into<String>) -> ServeResult<Self> {
        Self::new(text, ScriptSource::Inline)
    }

    /// Read the script from a file
    pub fn load(path: impl AsRef<Path>) -> ServeResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ServeError::ReadScript {
            path: path.to_path_buf(),
            source,
        })?;
        Self::new(text, ScriptSource::File(path.to_path_buf()))
    }

    /// Generate a script that publishes the level table to the page
    pub fn bootstrap(levels: &LevelTable) -> ServeResult<Self> {
        let json = serde_json::to_string(levels)?;
        let text = format!("// mnemo level table\nwindow.mnemoLevels = {};\n", json);
        Self::new(text, ScriptSource::Bootstrap)
    }

    pub fn body(&self) -> Bytes {
        self.body.clone()
    }

    pub fn etag(&self) -> &HeaderValue {
        &self.etag
    }

    pub fn source(&self) -> &ScriptSource {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Does an `If-None-Match` value name this script?
    ///
    /// Accepts `*`, comma separated lists and weak tags.
    pub fn matches(&self, if_none_match: &HeaderValue) -> bool {
        let Ok(value) = if_none_match.to_str() else {
            return false;
        };
        let Ok(etag) = self.etag.to_str() else {
            return false;
        };

        value.split(',').map(str::trim).any(|candidate| {
            candidate == "*" || candidate.strip_prefix("W/").unwrap_or(candidate) == etag
        })
    }
}
