use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What happened (or would happen) to one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeAction {
    Unchanged,
    Modified,
    Skipped,
    Added,
    Deleted,
    Error,
}

/// Per-file change accounting.
///
/// `additions`/`deletions` reflect the *planned* delta: dry-run and error
/// outcomes still carry the counts that would apply on a successful write.
/// `action` is `Unchanged` exactly when both counts are zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileChange {
    pub action: ChangeAction,
    pub additions: u64,
    pub deletions: u64,

    /// Present exactly when `action` is `Error`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileChange {
    /// The empty-delta entry.
    pub fn unchanged() -> Self {
        Self {
            action: ChangeAction::Unchanged,
            additions: 0,
            deletions: 0,
            error: None,
        }
    }
}

/// Deterministically ordered path → change mapping for one run.
pub type ChangeMap = BTreeMap<Utf8PathBuf, FileChange>;
