//! The transform pipeline: one plan, one apply, structured result.
//!
//! Control flows strictly planner → applier → result; there is no feedback
//! loop and no retry.

use crate::applier::{self, ApplyOutcome};
use crate::error::TransformError;
use crate::manifest;
use crate::planner;
use crate::ports::{PackageManagersPort, WorkspacePort, WritePort};
use camino::{Utf8Path, Utf8PathBuf};
use repin_types::{ChangeMap, TransformerOptions};
use tracing::debug;

/// Aggregated outcome of one transform run.
///
/// `fatal_error` is set exactly when the run could not complete its plan.
/// A write failure appears both as a per-file `error` entry in `changes`
/// and as the run's `fatal_error`.
#[derive(Debug, Default)]
pub struct TransformerResult {
    pub changes: ChangeMap,
    pub fatal_error: Option<TransformError>,
}

impl TransformerResult {
    fn fatal(error: TransformError) -> Self {
        Self {
            changes: ChangeMap::new(),
            fatal_error: Some(error),
        }
    }
}

/// Run the pin transform against `root`.
///
/// Never returns an error: all failures, fatal or per-file, come back on
/// the result so a surrounding runner can keep processing other files and
/// transforms after this one fails.
pub fn run_pin(
    root: &Utf8Path,
    options: &TransformerOptions,
    workspace: &dyn WorkspacePort,
    managers: &dyn PackageManagersPort,
    writer: &dyn WritePort,
) -> TransformerResult {
    let plan = match planner::plan_pin(root, workspace, managers) {
        Ok(plan) => plan,
        Err(error) => return TransformerResult::fatal(error),
    };

    if options.print && !plan.is_settled() {
        render_preview(&plan);
    }

    let ApplyOutcome {
        change,
        write_error,
    } = applier::apply_pin(&plan, options, writer);

    let mut result = TransformerResult::default();
    result
        .changes
        .insert(Utf8PathBuf::from(manifest::MANIFEST_FILE_NAME), change);
    if let Some(source) = write_error {
        result.fatal_error = Some(TransformError::Transform { source });
    }
    result
}

/// Render the planned delta as a unified diff on stdout.
///
/// Both sides are the normalized rendering, so the diff shows the pin line
/// and nothing else. Purely a reporting side effect; counts are unaffected.
fn render_preview(plan: &planner::PinPlan) {
    match (
        manifest::to_contents(&plan.manifest),
        applier::pinned_contents(plan),
    ) {
        (Ok(before), Ok(after)) => {
            print!(
                "{}",
                repin_render::render_patch(manifest::MANIFEST_FILE_NAME, &before, &after)
            );
        }
        _ => debug!(path = %plan.manifest_path, "skipping diff for unserializable manifest"),
    }
}
