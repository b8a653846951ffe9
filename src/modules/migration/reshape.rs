use serde_json::{Map, Value};
use std::path::Path;
use thiserror::Error;

/// Top-level key of the collection in the target document
pub const COLLECTION_KEY: &str = "ports";

#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Source document must be an object keyed by record id")]
    NotAnObject,

    #[error("Entry '{0}' is not an object")]
    InvalidEntry(String),
}

/// `{ "A1": {...} }` -> `{ "ports": [ { "id": "A1", ... } ] }`
///
/// Source order is kept. `id` comes first in each record; an `id` already
/// present in the entry overrides the key.
pub fn reshape(source: Value) -> Result<Value, MigrationError> {
    let Value::Object(entries) = source else {
        return Err(MigrationError::NotAnObject);
    };

    let mut ports = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        let Value::Object(fields) = value else {
            return Err(MigrationError::InvalidEntry(key));
        };

        let mut record = Map::with_capacity(fields.len() + 1);
        record.insert("id".to_string(), Value::String(key));
        record.extend(fields);
        ports.push(Value::Object(record));
    }

    let mut target = Map::new();
    target.insert(COLLECTION_KEY.to_string(), Value::Array(ports));
    Ok(Value::Object(target))
}

/// Reads `source_path`, reshapes it and writes `target_path` pretty-printed.
/// Returns the number of migrated records.
pub fn migrate_file(source_path: &Path, target_path: &Path) -> Result<usize, MigrationError> {
    let data = std::fs::read_to_string(source_path).map_err(|source| MigrationError::Read {
        path: source_path.display().to_string(),
        source,
    })?;

    let reshaped = reshape(serde_json::from_str(&data)?)?;
    let count = reshaped[COLLECTION_KEY]
        .as_array()
        .map(|ports| ports.len())
        .unwrap_or_default();

    let output = serde_json::to_string_pretty(&reshaped)?;
    std::fs::write(target_path, output).map_err(|source| MigrationError::Write {
        path: target_path.display().to_string(),
        source,
    })?;

    Ok(count)
}
