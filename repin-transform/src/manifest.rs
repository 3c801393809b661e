//! Lenient, order-preserving access to `package.json`.
//!
//! The manifest is read fresh on every invocation and parsed into an
//! order-preserving JSON map so the applier can mutate one key and
//! serialize without reordering anything else.

use anyhow::Context;
use camino::Utf8Path;
use fs_err as fs;
use serde_json::{Map, Value};
use tracing::debug;

pub const MANIFEST_FILE_NAME: &str = "package.json";
pub const PACKAGE_MANAGER_KEY: &str = "packageManager";

/// Read the manifest at `path`.
///
/// A missing, unreadable, or unparsable manifest yields an empty object:
/// absence of the pin is data the planner consumes, not a failure.
pub fn read_lenient(path: &Utf8Path) -> Map<String, Value> {
    let Ok(contents) = fs::read_to_string(path) else {
        debug!(path = %path, "manifest missing or unreadable");
        return Map::new();
    };

    match serde_json::from_str::<Value>(&contents) {
        Ok(Value::Object(map)) => map,
        _ => {
            debug!(path = %path, "manifest is not a JSON object");
            Map::new()
        }
    }
}

/// The current `packageManager` pin, if the manifest carries a string one.
pub fn package_manager_pin(manifest: &Map<String, Value>) -> Option<String> {
    manifest
        .get(PACKAGE_MANAGER_KEY)?
        .as_str()
        .map(str::to_string)
}

/// Serialize with two-space indentation and a trailing newline, preserving
/// key order.
pub fn to_contents(manifest: &Map<String, Value>) -> anyhow::Result<String> {
    let mut contents = serde_json::to_string_pretty(manifest).context("serialize manifest")?;
    contents.push('\n');
    Ok(contents)
}
