//! Snapshot preparation tooling.
//!
//! Shrinks the PSGC snapshot files by stripping null fields and writes the
//! gzip twins the loader prefers.

mod compress;
mod optimize;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use psgc_address::store::{BY_CODE_FILE, BY_LEVEL_FILE};

use crate::compress::compress_file;
use crate::optimize::optimize_file;

const SNAPSHOT_FILES: [&str; 2] = [BY_LEVEL_FILE, BY_CODE_FILE];

#[derive(Parser, Debug)]
#[command(name = "snapshot")]
#[command(about = "Prepare PSGC snapshot files")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Remove null fields and minify the snapshots in place
    Optimize {
        /// Snapshot directory
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,
    },
    /// Write gzip copies of the snapshots next to the originals
    Compress {
        /// Snapshot directory
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,
    },
}

/// Before/after byte counts for one file
#[derive(Debug, Clone, Copy)]
pub struct SizeReport {
    pub original: u64,
    pub result: u64,
}

impl SizeReport {
    pub fn savings_percent(&self) -> f64 {
        if self.original == 0 {
            return 0.0;
        }
        (1.0 - self.result as f64 / self.original as f64) * 100.0
    }

    fn log(&self, label: &str) {
        info!("  Original: {:.2} MB", mb(self.original));
        info!("  {}: {:.2} MB", label, mb(self.result));
        info!("  Savings: {:.1}%", self.savings_percent());
    }
}

fn mb(bytes: u64) -> f64 {
    bytes as f64 / 1024.0 / 1024.0
}

fn optimize_all(dir: &Path) -> Result<()> {
    info!("Optimizing snapshots in {}", dir.display());
    for file in SNAPSHOT_FILES {
        optimize_file(&dir.join(file))?.log("Optimized");
    }
    info!("Optimization complete");
    Ok(())
}

fn compress_all(dir: &Path) -> Result<()> {
    info!("Compressing snapshots in {}", dir.display());
    for file in SNAPSHOT_FILES {
        if let Some(report) = compress_file(&dir.join(file))? {
            report.log("Compressed");
        }
    }
    info!("Compression complete");
    Ok(())
}

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    match args.command {
        Command::Optimize { data_dir } => optimize_all(&data_dir),
        Command::Compress { data_dir } => compress_all(&data_dir),
    }
}
