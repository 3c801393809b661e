use crate::manager::PackageManager;
use serde::Serialize;
use std::process::Command;
use tracing::debug;

/// Installed manager versions, `None` for a manager that is not available
/// on this machine.
///
/// Version strings are opaque: whatever `<name> --version` printed, trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AvailablePackageManagers {
    pub npm: Option<String>,
    pub pnpm: Option<String>,
    pub yarn: Option<String>,
}

impl AvailablePackageManagers {
    pub fn get(&self, manager: PackageManager) -> Option<&str> {
        match manager {
            PackageManager::Npm => self.npm.as_deref(),
            PackageManager::Pnpm => self.pnpm.as_deref(),
            PackageManager::Yarn => self.yarn.as_deref(),
        }
    }

    pub fn set(&mut self, manager: PackageManager, version: Option<String>) {
        match manager {
            PackageManager::Npm => self.npm = version,
            PackageManager::Pnpm => self.pnpm = version,
            PackageManager::Yarn => self.yarn = version,
        }
    }
}

/// Probe every supported manager with `<name> --version`.
///
/// A missing binary, a non-zero exit, or garbage output marks the manager
/// unavailable; probing itself never fails.
pub fn probe_available_package_managers() -> AvailablePackageManagers {
    let mut available = AvailablePackageManagers::default();
    for manager in PackageManager::ALL {
        let version = capture_version(manager.name());
        debug!(
            manager = manager.name(),
            version = version.as_deref().unwrap_or("-"),
            "probed package manager"
        );
        available.set(manager, version);
    }
    available
}

fn capture_version(command: &str) -> Option<String> {
    let output = Command::new(command).arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }
    let stdout = String::from_utf8(output.stdout).ok()?;
    let version = stdout.trim();
    if version.is_empty() {
        None
    } else {
        Some(version.to_string())
    }
}
