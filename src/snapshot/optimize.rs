use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::SizeReport;

/// Drop `null` object members at any depth. Nulls inside arrays are kept.
pub fn remove_nulls(value: Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.into_iter().map(remove_nulls).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, remove_nulls(v)))
                .collect(),
        ),
        other => other,
    }
}

/// Rewrite a snapshot as minified JSON without null members
pub fn optimize_file(path: &Path) -> Result<SizeReport> {
    info!("Processing {}...", path.display());

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot: {}", path.display()))?;
    let original: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse snapshot: {}", path.display()))?;
    let original_size = serde_json::to_string(&original)?.len() as u64;

    let optimized = serde_json::to_string(&remove_nulls(original))?;
    fs::write(path, &optimized)
        .with_context(|| format!("Failed to write snapshot: {}", path.display()))?;

    Ok(SizeReport {
        original: original_size,
        result: optimized.len() as u64,
    })
}
