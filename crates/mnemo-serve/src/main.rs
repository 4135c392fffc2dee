//! `mnemo-serve` binary

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use mnemo_serve::ServeConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Serve the Mnemo game script over HTTP
#[derive(Parser, Debug)]
#[command(name = "mnemo-serve", version, about)]
struct Cli {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address
    #[arg(short, long)]
    bind: Option<SocketAddr>,

    /// Non-local origin allowed to load the script
    #[arg(long)]
    origin: Option<String>,

    /// Script file to serve instead of the generated bootstrap
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Shared-cache freshness in seconds
    #[arg(long)]
    s_maxage: Option<u64>,

    /// Stale-while-revalidate window in seconds
    #[arg(long)]
    stale_while_revalidate: Option<u64>,
}

impl Cli {
    fn into_config(self) -> Result<ServeConfig> {
        let mut config = match &self.config {
            Some(path) => ServeConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => ServeConfig::default(),
        };

        if let Some(bind) = self.bind {
            config.bind = bind;
        }
        if let Some(origin) = self.origin {
            config.allowed_origin = Some(origin);
        }
        if let Some(script) = self.script {
            config.script_path = Some(script);
        }
        if let Some(secs) = self.s_maxage {
            config.cache.s_maxage = secs;
        }
        if let Some(secs) = self.stale_while_revalidate {
            config.cache.stale_while_revalidate = secs;
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Cli::parse().into_config()?;
    mnemo_serve::run(config).await.context("script server failed")
}
