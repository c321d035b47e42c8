use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use availability_engine::{InMemoryStore, NewResource, ResourceRecord};
use tracing::info;

/// Load a JSON array of resource records into a fresh in-memory store.
///
/// Every record is validated; the first invalid one aborts the load.
pub fn load_seed_file(path: &Path) -> Result<InMemoryStore> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file: {}", path.display()))?;

    let records: Vec<ResourceRecord> = serde_json::from_str(&text)
        .with_context(|| format!("Seed file is not a JSON array of resources: {}", path.display()))?;

    let resources = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            NewResource::try_from(record)
                .with_context(|| format!("Invalid resource #{} in {}", index + 1, path.display()))
        })
        .collect::<Result<Vec<_>>>()?;

    let count = resources.len();
    let store = InMemoryStore::seeded(resources)
        .with_context(|| format!("Seed file contains duplicate resources: {}", path.display()))?;

    info!(count, path = %path.display(), "seeded resource store");
    Ok(store)
}
