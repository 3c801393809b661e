//! Transform application: the persistence decision and its containment.

use crate::manifest;
use crate::planner::PinPlan;
use crate::ports::WritePort;
use repin_types::{ChangeAction, FileChange, TransformerOptions};
use serde_json::Value;
use tracing::debug;

/// What a single apply produced: the per-file accounting entry plus the
/// caught write failure, if any, for the pipeline to surface as fatal.
#[derive(Debug)]
pub struct ApplyOutcome {
    pub change: FileChange,
    pub write_error: Option<anyhow::Error>,
}

impl ApplyOutcome {
    fn clean(change: FileChange) -> Self {
        Self {
            change,
            write_error: None,
        }
    }
}

/// Decide whether to persist the planned pin, and account for it.
///
/// Counts always reflect the planned delta; only the action varies with
/// `dry` and write success. Write failures are caught and converted, never
/// propagated.
pub fn apply_pin(
    plan: &PinPlan,
    options: &TransformerOptions,
    writer: &dyn WritePort,
) -> ApplyOutcome {
    if plan.is_settled() {
        return ApplyOutcome::clean(FileChange::unchanged());
    }

    let (additions, deletions) = plan.counts();

    if options.dry {
        debug!(path = %plan.manifest_path, "dry-run, not writing");
        return ApplyOutcome::clean(FileChange {
            action: ChangeAction::Skipped,
            additions,
            deletions,
            error: None,
        });
    }

    match write_pin(plan, writer) {
        Ok(()) => {
            debug!(path = %plan.manifest_path, pin = %plan.desired, "wrote pin");
            ApplyOutcome::clean(FileChange {
                action: ChangeAction::Modified,
                additions,
                deletions,
                error: None,
            })
        }
        Err(source) => ApplyOutcome {
            change: FileChange {
                action: ChangeAction::Error,
                additions,
                deletions,
                error: Some(source.to_string()),
            },
            write_error: Some(source),
        },
    }
}

/// The manifest contents a pin write persists: the planned manifest with
/// the pin set, all other keys and their order intact.
pub fn pinned_contents(plan: &PinPlan) -> anyhow::Result<String> {
    let mut manifest = plan.manifest.clone();
    manifest.insert(
        manifest::PACKAGE_MANAGER_KEY.to_string(),
        Value::String(plan.desired.clone()),
    );
    manifest::to_contents(&manifest)
}

fn write_pin(plan: &PinPlan, writer: &dyn WritePort) -> anyhow::Result<()> {
    let contents = pinned_contents(plan)?;
    writer.write_file(&plan.manifest_path, contents.as_bytes())
}
