//! Error types for loading the address dataset.

use std::path::PathBuf;

/// Top-level error enum for the library.
///
/// Queries never fail; only loading a snapshot can.
#[derive(Debug, thiserror::Error)]
pub enum AddressError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to load snapshot {}: {source}", path.display())]
    Snapshot {
        path: PathBuf,
        #[source]
        source: Box<AddressError>,
    },
}

pub type Result<T> = std::result::Result<T, AddressError>;
