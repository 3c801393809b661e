use crate::manager::PackageManager;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use tracing::debug;

/// What the workspace detector learned about a monorepo root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceDetails {
    pub root: Utf8PathBuf,
    pub package_manager: PackageManager,
}

/// Determine which package manager governs `root`.
///
/// Precedence: an existing `packageManager` pin in the root manifest wins,
/// then lockfile presence in [`PackageManager::ALL`] order. No signal at
/// all is an error; the caller treats any failure here uniformly as
/// "undetermined".
pub fn detect_workspace(root: &Utf8Path) -> anyhow::Result<WorkspaceDetails> {
    if let Some(package_manager) = manager_from_manifest(root) {
        debug!(root = %root, manager = package_manager.name(), "detected via packageManager pin");
        return Ok(WorkspaceDetails {
            root: root.to_owned(),
            package_manager,
        });
    }

    for package_manager in PackageManager::ALL {
        if root.join(package_manager.lockfile()).exists() {
            debug!(root = %root, manager = package_manager.name(), "detected via lockfile");
            return Ok(WorkspaceDetails {
                root: root.to_owned(),
                package_manager,
            });
        }
    }

    anyhow::bail!("no package manager signal under {root}")
}

/// Manager named by an existing `packageManager` pin, if the manifest has
/// one that parses. Any malformed layer (file, JSON, field, name) simply
/// yields no signal.
fn manager_from_manifest(root: &Utf8Path) -> Option<PackageManager> {
    let contents = fs::read_to_string(root.join("package.json")).ok()?;
    let manifest: serde_json::Value = serde_json::from_str(&contents).ok()?;
    let pin = manifest.get("packageManager")?.as_str()?;
    let (name, _version) = pin.split_once('@')?;
    name.parse().ok()
}
