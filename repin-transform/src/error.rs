//! The fatal-error taxonomy for a transform run.
//!
//! These are run-aborting failures surfaced on the result object, never
//! thrown past the transform boundary. Per-file problems travel separately,
//! as `error` entries in the change map.

use camino::Utf8PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    /// The workspace collaborator could not identify a manager. Aborts
    /// before any write.
    #[error("Unable to determine package manager for {root}")]
    PackageManagerUndetermined { root: Utf8PathBuf },

    /// The detected manager has no resolvable version. Aborts before any
    /// write.
    #[error("Unable to determine package manager version for {root}")]
    VersionUndetermined { root: Utf8PathBuf },

    /// A write failed after the delta was computed. The delta is still
    /// reported in the change map.
    #[error("Encountered an error while transforming files")]
    Transform {
        #[source]
        source: anyhow::Error,
    },
}
