//! Change planning: the desired-vs-current delta for the pin.

use crate::error::TransformError;
use crate::manifest;
use crate::ports::{PackageManagersPort, WorkspacePort};
use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Map, Value};
use tracing::debug;

/// The planned delta for a single manifest.
///
/// Carries the parsed manifest so the applier can mutate one key without
/// re-reading the file.
#[derive(Debug, Clone)]
pub struct PinPlan {
    pub manifest_path: Utf8PathBuf,
    pub desired: String,
    pub existing: Option<String>,
    pub manifest: Map<String, Value>,
}

impl PinPlan {
    /// True when the manifest already pins the desired value.
    pub fn is_settled(&self) -> bool {
        self.existing.as_deref() == Some(self.desired.as_str())
    }

    /// Planned line counts: one addition for the new value, one deletion
    /// when it replaces an existing one. A removal with no replacement
    /// would be a single deletion, though this transform never plans one.
    pub fn counts(&self) -> (u64, u64) {
        if self.is_settled() {
            (0, 0)
        } else {
            (1, u64::from(self.existing.is_some()))
        }
    }
}

/// Compute the pin delta for `root`.
///
/// Collaborators are queried in order: manager first, then its installed
/// version. Either failing aborts planning before any side effect. A
/// missing or unparsable manifest is not a failure; the absent pin is the
/// delta's whole point.
pub fn plan_pin(
    root: &Utf8Path,
    workspace: &dyn WorkspacePort,
    managers: &dyn PackageManagersPort,
) -> Result<PinPlan, TransformError> {
    let details = workspace.workspace_details(root).map_err(|error| {
        debug!(root = %root, error = %error, "workspace detection failed");
        TransformError::PackageManagerUndetermined {
            root: root.to_owned(),
        }
    })?;

    let available = managers
        .available()
        .map_err(|error| {
            debug!(root = %root, error = %error, "version resolution failed");
            TransformError::VersionUndetermined {
                root: root.to_owned(),
            }
        })?;
    let Some(version) = available.get(details.package_manager) else {
        return Err(TransformError::VersionUndetermined {
            root: root.to_owned(),
        });
    };

    let desired = format!("{}@{}", details.package_manager, version);
    let manifest_path = root.join(manifest::MANIFEST_FILE_NAME);
    let manifest = manifest::read_lenient(&manifest_path);
    let existing = manifest::package_manager_pin(&manifest);

    debug!(
        root = %root,
        desired = %desired,
        existing = existing.as_deref().unwrap_or("-"),
        "planned pin"
    );

    Ok(PinPlan {
        manifest_path,
        desired,
        existing,
        manifest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{StaticPackageManagersPort, StaticWorkspacePort};
    use camino::Utf8PathBuf;
    use pretty_assertions::assert_eq;
    use repin_detect::PackageManager;
    use tempfile::TempDir;

    fn temp_root(manifest: Option<&str>) -> (TempDir, Utf8PathBuf) {
        let temp = TempDir::new().expect("temp dir");
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("utf8");
        if let Some(contents) = manifest {
            std::fs::write(root.join("package.json"), contents).expect("write manifest");
        }
        (temp, root)
    }

    #[test]
    fn plans_addition_when_pin_is_absent() {
        let (_temp, root) = temp_root(Some(r#"{"name": "fixture"}"#));
        let plan = plan_pin(
            &root,
            &StaticWorkspacePort::new(PackageManager::Npm),
            &StaticPackageManagersPort::only(PackageManager::Npm, "7.0.0"),
        )
        .expect("plan");

        assert_eq!(plan.desired, "npm@7.0.0");
        assert_eq!(plan.existing, None);
        assert!(!plan.is_settled());
        assert_eq!(plan.counts(), (1, 0));
    }

    #[test]
    fn plans_replacement_when_pin_differs() {
        let (_temp, root) = temp_root(Some(r#"{"packageManager": "turbo@1.7.0"}"#));
        let plan = plan_pin(
            &root,
            &StaticWorkspacePort::new(PackageManager::Pnpm),
            &StaticPackageManagersPort::only(PackageManager::Pnpm, "1.2.3"),
        )
        .expect("plan");

        assert_eq!(plan.existing, Some("turbo@1.7.0".to_string()));
        assert_eq!(plan.counts(), (1, 1));
    }

    #[test]
    fn settled_pin_plans_empty_delta() {
        let (_temp, root) = temp_root(Some(r#"{"packageManager": "npm@1.2.3"}"#));
        let plan = plan_pin(
            &root,
            &StaticWorkspacePort::new(PackageManager::Npm),
            &StaticPackageManagersPort::only(PackageManager::Npm, "1.2.3"),
        )
        .expect("plan");

        assert!(plan.is_settled());
        assert_eq!(plan.counts(), (0, 0));
    }

    #[test]
    fn missing_manifest_still_plans() {
        let (_temp, root) = temp_root(None);
        let plan = plan_pin(
            &root,
            &StaticWorkspacePort::new(PackageManager::Yarn),
            &StaticPackageManagersPort::only(PackageManager::Yarn, "1.22.19"),
        )
        .expect("plan");

        assert_eq!(plan.existing, None);
        assert!(plan.manifest.is_empty());
        assert_eq!(plan.counts(), (1, 0));
    }

    #[test]
    fn detector_failure_is_package_manager_undetermined() {
        let (_temp, root) = temp_root(Some(r#"{"name": "fixture"}"#));
        let err = plan_pin(
            &root,
            &StaticWorkspacePort::default(),
            &StaticPackageManagersPort::only(PackageManager::Npm, "7.0.0"),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            TransformError::PackageManagerUndetermined { .. }
        ));
        assert_eq!(
            err.to_string(),
            format!("Unable to determine package manager for {root}")
        );
    }

    #[test]
    fn missing_version_is_version_undetermined() {
        let (_temp, root) = temp_root(Some(r#"{"name": "fixture"}"#));
        let err = plan_pin(
            &root,
            &StaticWorkspacePort::new(PackageManager::Npm),
            &StaticPackageManagersPort::default(),
        )
        .unwrap_err();

        assert!(matches!(err, TransformError::VersionUndetermined { .. }));
        assert_eq!(
            err.to_string(),
            format!("Unable to determine package manager version for {root}")
        );
    }
}
