//! Origin allow-list
//!
//! One configured origin is allowed, plus any http(s) origin on `localhost`
//! or `127.0.0.1` regardless of port. Other origins get no CORS headers, so
//! the browser refuses the cross-origin read.

use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::http::{HeaderMap, HeaderValue};
use url::{Origin, Url};

use crate::{ServeError, ServeResult};

const LOCAL_HOSTS: [&str; 2] = ["localhost", "127.0.0.1"];

pub const ALLOWED_METHODS: &str = "GET, OPTIONS";
pub const ALLOWED_HEADERS: &str = "Content-Type";

/// Outcome of checking a request's `Origin`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CorsDecision {
    /// No `Origin` header (same-origin or non-browser client)
    NoOrigin,
    Allowed,
    Denied,
}

#[derive(Clone, Debug, Default)]
pub struct CorsPolicy {
    allowed: Option<Origin>,
}

impl CorsPolicy {
    /// Build a policy allowing `origin` in addition to local origins
    pub fn new(origin: Option<&str>) -> ServeResult<Self> {
        let allowed = match origin {
            Some(origin) => {
                let url = Url::parse(origin).map_err(|source| ServeError::InvalidOrigin {
                    origin: origin.to_string(),
                    source,
                })?;
                let parsed = url.origin();
                if !parsed.is_tuple() {
                    return Err(ServeError::OpaqueOrigin(origin.to_string()));
                }
                Some(parsed)
            }
            None => None,
        };
        Ok(CorsPolicy { allowed })
    }

    /// Only local origins
    pub fn local_only() -> Self {
        CorsPolicy { allowed: None }
    }

    pub fn configured(&self) -> Option<String> {
        self.allowed.as_ref().map(Origin::ascii_serialization)
    }

    /// Is this `Origin` header value allowed?
    pub fn allows(&self, origin: &str) -> bool {
        let Ok(url) = Url::parse(origin) else {
            return false;
        };

        if let Some(allowed) = &self.allowed {
            if url.origin() == *allowed {
                return true;
            }
        }

        matches!(url.scheme(), "http" | "https")
            && url
                .host_str()
                .is_some_and(|host| LOCAL_HOSTS.contains(&host))
    }

    /// Add CORS headers for an allowed origin
    pub fn apply(&self, origin: Option<&HeaderValue>, headers: &mut HeaderMap) -> CorsDecision {
        let Some(origin) = origin else {
            return CorsDecision::NoOrigin;
        };

        let allowed = origin.to_str().map(|o| self.allows(o)).unwrap_or(false);
        if !allowed {
            return CorsDecision::Denied;
        }

        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, origin.clone());
        headers.insert(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        );
        headers.insert(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        );
        CorsDecision::Allowed
    }
}
