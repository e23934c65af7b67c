//! Pinion server binary
//!
//! Loads the profile folder, publishes the token directory, and serves
//! the pin value surface under `/app`.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

/// Server configuration, parsed from the command line
#[derive(Clone, Debug)]
struct ServerConfig {
    /// Folder of per-device profile JSON files
    profile_dir: PathBuf,
    /// Listen address
    listen: SocketAddr,
}

impl ServerConfig {
    fn from_args() -> Option<Self> {
        let mut args = std::env::args().skip(1);
        let profile_dir = PathBuf::from(args.next()?);
        let listen = match args.next() {
            Some(raw) => raw.parse().ok()?,
            None => SocketAddr::from(([0, 0, 0, 0], 8080)),
        };
        Some(ServerConfig {
            profile_dir,
            listen,
        })
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let Some(config) = ServerConfig::from_args() else {
        eprintln!("Usage: pinion-server <profile-dir> [listen-addr]");
        std::process::exit(2);
    };

    let directory = pinion_loader::load_dir(&config.profile_dir)?;
    tracing::info!(
        profiles = directory.len(),
        dir = %config.profile_dir.display(),
        "profile folder loaded"
    );

    let router = Router::new().nest("/app", pinion_http::app(Arc::new(directory)));

    let listener = TcpListener::bind(config.listen).await?;
    tracing::info!(addr = %config.listen, "listening");
    pinion_http::serve(listener, router).await?;

    Ok(())
}
