//! JSON helpers and catalog loading.

use crate::error::{IoError, Result};
use bestiary_data::{RegionCatalog, TraitCatalog};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serializes data to pretty-printed JSON.
pub fn to_json_pretty<T>(data: &T) -> Result<String>
where
    T: Serialize,
{
    serde_json::to_string_pretty(data)
        .map_err(|e| IoError::serialization(format!("JSON serialization failed: {}", e)))
}

/// Deserializes data from JSON string.
pub fn from_json<T>(json: &str) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    if json.trim().is_empty() {
        return Err(IoError::validation("Empty JSON string"));
    }

    serde_json::from_str(json)
        .map_err(|e| IoError::serialization(format!("JSON deserialization failed: {}", e)))
}

/// Reads and deserializes a JSON file.
pub fn read_json_file<T, P>(path: P) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let json = std::fs::read_to_string(&path).map_err(|e| {
        IoError::FileSystem(e).with_context(format!("reading JSON from {:?}", path.as_ref()))
    })?;
    from_json(&json)
}

/// Writes text, creating parent directories as needed.
pub fn write_text_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            IoError::FileSystem(e).with_context(format!("creating directory {:?}", parent))
        })?;
    }
    std::fs::write(path, content)
        .map_err(|e| IoError::FileSystem(e).with_context(format!("writing {:?}", path)))
}

/// Parses a trait catalog, dropping repeated labels.
///
/// Both pools must hold at least one label.
pub fn parse_trait_catalog(json: &str) -> Result<TraitCatalog> {
    let catalog: TraitCatalog = from_json(json)?;
    let catalog = catalog.normalized();
    if catalog.affinity.is_empty() || catalog.family.is_empty() {
        return Err(IoError::validation(
            "trait catalog needs at least one affinity and one family",
        ));
    }
    Ok(catalog)
}

pub fn read_trait_catalog<P: AsRef<Path>>(path: P) -> Result<TraitCatalog> {
    let json = std::fs::read_to_string(&path).map_err(|e| {
        IoError::FileSystem(e).with_context(format!("reading traits from {:?}", path.as_ref()))
    })?;
    parse_trait_catalog(&json)
}

pub fn read_region_catalog<P: AsRef<Path>>(path: P) -> Result<RegionCatalog> {
    read_json_file(path)
}
