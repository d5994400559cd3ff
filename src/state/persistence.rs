use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::Batch;

/// Load batches from a JSON file.
///
/// Deduplicates by lowercase name (last occurrence wins).
pub fn load_batches<P: AsRef<Path>>(path: P) -> Result<Vec<Batch>> {
    let content = fs::read_to_string(path)?;
    let batches: Vec<Batch> = serde_json::from_str(&content)?;

    let mut seen: HashMap<String, Batch> = HashMap::new();
    for batch in batches {
        seen.insert(batch.key(), batch);
    }

    Ok(seen.into_values().collect())
}

/// Save batches to a JSON file.
///
/// Deduplicates by lowercase name before saving.
pub fn save_batches<P: AsRef<Path>>(path: P, batches: &[Batch]) -> Result<()> {
    let mut seen: HashMap<String, &Batch> = HashMap::new();
    for batch in batches {
        seen.insert(batch.key(), batch);
    }

    let deduped: Vec<&Batch> = seen.into_values().collect();
    let json = serde_json::to_string_pretty(&deduped)?;
    fs::write(path, json)?;
    Ok(())
}
