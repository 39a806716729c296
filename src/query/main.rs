//! Query server for cascading address selection.
//!
//! Loads the PSGC snapshots once at startup and serves the region, province,
//! city/municipality and barangay lookups over HTTP.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use psgc_address::AddressStore;

mod config;
mod handlers;
use config::Config;
use handlers::{router, AppState};

#[derive(Parser, Debug)]
#[command(name = "query")]
#[command(about = "PSGC address query server")]
struct Args {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address (overrides config)
    #[arg(short, long)]
    listen: Option<String>,

    /// Snapshot directory (overrides config)
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::default(),
    };
    if let Some(listen) = args.listen {
        config.server.listen = listen;
    }
    if let Some(dir) = args.data_dir {
        config.data.dir = dir;
    }

    info!("PSGC Address Query Server");

    let store = AddressStore::load(&config.data.dir).context("Failed to load address data")?;
    if store.is_empty() {
        anyhow::bail!("No records found in {}", config.data.dir.display());
    }
    info!("Loaded {} records", store.len());

    let app = router(Arc::new(AppState { store }));

    info!("Starting server on {}", config.server.listen);

    let listener = tokio::net::TcpListener::bind(&config.server.listen).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
