//! HTTP handler and server loop
//!
//! Every path answers the same way:
//! - `GET`: the script, `200` or `304` when `If-None-Match` names it
//! - `OPTIONS`: `204` with no body
//! - anything else: `405` with `Allow: GET, OPTIONS`
//!
//! CORS headers are added only for allowed origins. `Vary: Origin` is
//! always set so shared caches keep per-origin copies.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue, Method, StatusCode};
use axum::response::Response;
use axum::Router;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

use crate::{CorsDecision, CorsPolicy, ScriptBundle, ServeConfig, ServeError, ServeResult};

pub const CONTENT_TYPE_JS: &str = "application/javascript; charset=utf-8";

/// Answers script requests
#[derive(Debug)]
pub struct ScriptService {
    script: ScriptBundle,
    cors: CorsPolicy,
    cache_control: HeaderValue,
}

impl ScriptService {
    pub fn new(script: ScriptBundle, cors: CorsPolicy, cache_control: &str) -> ServeResult<Self> {
        let cache_control = HeaderValue::from_str(cache_control).map_err(|_| {
            ServeError::InvalidHeader {
                name: "cache-control",
            }
        })?;

        Ok(ScriptService {
            script,
            cors,
            cache_control,
        })
    }

    /// Build the service described by a config
    pub fn from_config(config: &ServeConfig) -> ServeResult<Self> {
        let script = match &config.script_path {
            Some(path) => ScriptBundle::load(path)?,
            None => {
                warn!("no script_path configured, serving the generated bootstrap script");
                ScriptBundle::bootstrap(&config.levels)?
            }
        };
        let cors = CorsPolicy::new(config.allowed_origin.as_deref())?;

        Self::new(script, cors, &config.cache.header_value())
    }

    pub fn script(&self) -> &ScriptBundle {
        &self.script
    }

    pub fn cors(&self) -> &CorsPolicy {
        &self.cors
    }

    /// Build the response for a request
    pub fn respond(&self, method: &Method, headers: &HeaderMap) -> Response {
        let mut response = match *method {
            Method::GET => self.get(headers),
            Method::OPTIONS => empty(StatusCode::NO_CONTENT),
            _ => {
                let mut response = empty(StatusCode::METHOD_NOT_ALLOWED);
                response
                    .headers_mut()
                    .insert(header::ALLOW, HeaderValue::from_static(crate::ALLOWED_METHODS));
                response
            }
        };

        let origin = headers.get(header::ORIGIN);
        if self.cors.apply(origin, response.headers_mut()) == CorsDecision::Denied {
            warn!(origin = ?origin, "origin not allowed");
        }
        response
            .headers_mut()
            .insert(header::VARY, HeaderValue::from_static("Origin"));

        debug!(%method, status = response.status().as_u16(), "script request");
        response
    }

    fn get(&self, headers: &HeaderMap) -> Response {
        let not_modified = headers
            .get(header::IF_NONE_MATCH)
            .is_some_and(|value| self.script.matches(value));

        let mut response = if not_modified {
            empty(StatusCode::NOT_MODIFIED)
        } else {
            let mut response = Response::new(Body::from(self.script.body()));
            response.headers_mut().insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static(CONTENT_TYPE_JS),
            );
            response
        };

        let headers = response.headers_mut();
        headers.insert(header::CACHE_CONTROL, self.cache_control.clone());
        headers.insert(header::ETAG, self.script.etag().clone());
        response
    }
}

fn empty(status: StatusCode) -> Response {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = status;
    response
}

async fn handle(
    State(service): State<Arc<ScriptService>>,
    method: Method,
    headers: HeaderMap,
) -> Response {
    service.respond(&method, &headers)
}

/// Router answering every path with the script service
pub fn router(service: Arc<ScriptService>) -> Router {
    Router::new().fallback(handle).with_state(service)
}

/// Serve on an already bound listener until `shutdown` resolves
pub async fn serve<F>(
    listener: TcpListener,
    service: Arc<ScriptService>,
    shutdown: F,
) -> ServeResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Bind the configured address
pub async fn bind(addr: SocketAddr) -> ServeResult<TcpListener> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })
}

/// Load the script, bind, and serve until Ctrl-C
pub async fn run(config: ServeConfig) -> ServeResult<()> {
    let service = Arc::new(ScriptService::from_config(&config)?);
    let listener = bind(config.bind).await?;

    info!(
        addr = %listener.local_addr()?,
        bytes = service.script().len(),
        origin = ?service.cors().configured(),
        "serving script"
    );

    serve(listener, service, shutdown_signal()).await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
