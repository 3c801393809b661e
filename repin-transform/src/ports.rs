//! Port traits abstracting collaborator queries and persistence away from
//! the pipeline.

use camino::Utf8Path;
use repin_detect::{AvailablePackageManagers, WorkspaceDetails};

/// Workspace detection collaborator.
///
/// Any error is treated uniformly as "undetermined" by the planner.
pub trait WorkspacePort {
    fn workspace_details(&self, root: &Utf8Path) -> anyhow::Result<WorkspaceDetails>;
}

/// Version-resolution collaborator.
pub trait PackageManagersPort {
    fn available(&self) -> anyhow::Result<AvailablePackageManagers>;
}

/// File-system write operations.
pub trait WritePort {
    fn write_file(&self, path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()>;
}
