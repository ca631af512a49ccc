//! RG-005: Loading and merging packed resource maps.

use super::types::{parse_resource_map, ResourceMap};
use std::path::{Path, PathBuf};

/// Load one JSON resource map from disk.
pub fn load_map(path: &Path) -> Result<ResourceMap, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
    parse_resource_map(&content).map_err(|e| format!("{}: {}", path.display(), e))
}

/// Merge maps in order; later maps overwrite keys of earlier ones.
pub fn merge_maps<I>(maps: I) -> ResourceMap
where
    I: IntoIterator<Item = ResourceMap>,
{
    let mut merged = ResourceMap::new();
    for map in maps {
        merged.extend(map);
    }
    merged
}

/// Load every input and merge them. At least one input is required.
pub fn load_and_merge(inputs: &[PathBuf]) -> Result<ResourceMap, String> {
    if inputs.is_empty() {
        return Err("no resource maps given".to_string());
    }
    let mut maps = Vec::with_capacity(inputs.len());
    for input in inputs {
        let map = load_map(input)?;
        tracing::debug!(path = %input.display(), entries = map.len(), "loaded resource map");
        maps.push(map);
    }
    Ok(merge_maps(maps))
}
