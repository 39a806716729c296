use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs;
use std::io::{Read, Write};
use std::path::Path;
use tracing::{info, warn};

use psgc_address::store::compressed_path;

use crate::SizeReport;

/// Write `<file>.gz` next to a snapshot, keeping the plain file.
///
/// Returns `None` when there is nothing to compress. The written archive is
/// decompressed again and must reproduce the source bytes exactly.
pub fn compress_file(path: &Path) -> Result<Option<SizeReport>> {
    let gz_path = compressed_path(path);

    if !path.exists() {
        if gz_path.exists() {
            info!(
                "Skipping {} (already compressed: {} exists)",
                path.display(),
                gz_path.display()
            );
        } else {
            warn!(
                "{} not found and no compressed version exists",
                path.display()
            );
        }
        return Ok(None);
    }

    info!("Compressing {}...", path.display());

    let data =
        fs::read(path).with_context(|| format!("Failed to read snapshot: {}", path.display()))?;

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&data)?;
    let compressed = encoder.finish()?;

    let mut decoded = Vec::with_capacity(data.len());
    GzDecoder::new(compressed.as_slice()).read_to_end(&mut decoded)?;
    if decoded != data {
        anyhow::bail!("Compressed {} does not round-trip", path.display());
    }

    fs::write(&gz_path, &compressed)
        .with_context(|| format!("Failed to write {}", gz_path.display()))?;

    Ok(Some(SizeReport {
        original: data.len() as u64,
        result: compressed.len() as u64,
    }))
}
