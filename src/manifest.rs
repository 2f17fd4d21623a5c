use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Filename used for both the input manifest and every staged copy.
pub const MANIFEST_FILE: &str = "package.json";

/// Read and parse a package manifest. The manifest must be a JSON object;
/// anything else (or a missing/unreadable file) is fatal.
pub fn load_manifest(path: &Path) -> Result<Map<String, Value>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest from {}", path.display()))?;

    let value: Value = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse manifest JSON from {}", path.display()))?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(anyhow::anyhow!(
            "Manifest at {} is not a JSON object (found {})",
            path.display(),
            json_type_name(&other)
        )),
    }
}

/// Write a staged manifest as pretty-printed JSON into `out_dir`, creating
/// the directory if needed. Overwrites any existing `package.json` there.
/// Returns the path written.
pub fn write_manifest(manifest: &Map<String, Value>, out_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

    let out_path = out_dir.join(MANIFEST_FILE);

    let rendered =
        serde_json::to_string_pretty(manifest).context("Failed to serialize manifest to JSON")?;

    fs::write(&out_path, rendered)
        .with_context(|| format!("Failed to write manifest to {}", out_path.display()))?;

    Ok(out_path)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
