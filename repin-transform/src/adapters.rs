//! Default port implementations plus static fakes for embedding and tests.

use crate::ports::{PackageManagersPort, WorkspacePort, WritePort};
use anyhow::Context;
use camino::Utf8Path;
use repin_detect::{AvailablePackageManagers, PackageManager, WorkspaceDetails};

/// Manifest/lockfile-based detection via `repin-detect`.
#[derive(Debug, Clone, Default)]
pub struct DetectWorkspacePort;

impl WorkspacePort for DetectWorkspacePort {
    fn workspace_details(&self, root: &Utf8Path) -> anyhow::Result<WorkspaceDetails> {
        repin_detect::detect_workspace(root)
    }
}

/// Probes installed managers by running `<name> --version`.
#[derive(Debug, Clone, Default)]
pub struct ShellPackageManagersPort;

impl PackageManagersPort for ShellPackageManagersPort {
    fn available(&self) -> anyhow::Result<AvailablePackageManagers> {
        Ok(repin_detect::probe_available_package_managers())
    }
}

/// Filesystem write operations.
#[derive(Debug, Clone, Default)]
pub struct FsWritePort;

impl WritePort for FsWritePort {
    fn write_file(&self, path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create parent dir for {}", path))?;
        }
        std::fs::write(path, contents).with_context(|| format!("write {}", path))
    }
}

/// Fixed detection outcome, for embedding and tests.
///
/// `None` simulates a detector that cannot identify a manager.
#[derive(Debug, Clone, Default)]
pub struct StaticWorkspacePort {
    pub package_manager: Option<PackageManager>,
}

impl StaticWorkspacePort {
    pub fn new(package_manager: PackageManager) -> Self {
        Self {
            package_manager: Some(package_manager),
        }
    }
}

impl WorkspacePort for StaticWorkspacePort {
    fn workspace_details(&self, root: &Utf8Path) -> anyhow::Result<WorkspaceDetails> {
        match self.package_manager {
            Some(package_manager) => Ok(WorkspaceDetails {
                root: root.to_owned(),
                package_manager,
            }),
            None => anyhow::bail!("workspace detection unavailable"),
        }
    }
}

/// Fixed version table, for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticPackageManagersPort {
    pub available: AvailablePackageManagers,
}

impl StaticPackageManagersPort {
    /// A table where only `manager` is installed, at `version`.
    pub fn only(manager: PackageManager, version: &str) -> Self {
        let mut available = AvailablePackageManagers::default();
        available.set(manager, Some(version.to_string()));
        Self { available }
    }
}

impl PackageManagersPort for StaticPackageManagersPort {
    fn available(&self) -> anyhow::Result<AvailablePackageManagers> {
        Ok(self.available.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn fs_write_port_writes_and_creates_dirs() {
        let temp = TempDir::new().expect("temp dir");
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("utf8");
        let target = root.join("nested").join("package.json");

        let port = FsWritePort;
        port.write_file(&target, b"{}\n").expect("write");

        let contents = std::fs::read_to_string(&target).expect("read");
        assert_eq!(contents, "{}\n");
    }

    #[test]
    fn static_workspace_port_reports_configured_manager() {
        let port = StaticWorkspacePort::new(PackageManager::Pnpm);
        let details = port
            .workspace_details(Utf8Path::new("/repo"))
            .expect("details");
        assert_eq!(details.package_manager, PackageManager::Pnpm);
        assert_eq!(details.root, Utf8PathBuf::from("/repo"));
    }

    #[test]
    fn static_workspace_port_without_manager_errors() {
        let port = StaticWorkspacePort::default();
        assert!(port.workspace_details(Utf8Path::new("/repo")).is_err());
    }

    #[test]
    fn static_package_managers_port_only_sets_one_slot() {
        let port = StaticPackageManagersPort::only(PackageManager::Yarn, "1.22.19");
        let available = port.available().expect("available");
        assert_eq!(available.get(PackageManager::Yarn), Some("1.22.19"));
        assert_eq!(available.get(PackageManager::Npm), None);
    }

    #[test]
    fn detect_workspace_port_delegates_to_lockfile_detection() {
        let temp = TempDir::new().expect("temp dir");
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("utf8");
        std::fs::write(root.join("yarn.lock"), "# yarn lockfile v1\n").expect("write lock");

        let details = DetectWorkspacePort
            .workspace_details(&root)
            .expect("details");
        assert_eq!(details.package_manager, PackageManager::Yarn);
    }
}
