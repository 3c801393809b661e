//! Rendering helpers (diffs, summaries) for human-readable output.

use diffy::PatchFormatter;
use repin_types::{ChangeAction, ChangeMap};

/// Unified diff between two renderings of a file, `diff --git` style.
///
/// Returns the empty string when the sides are identical.
pub fn render_patch(path: &str, before: &str, after: &str) -> String {
    if before == after {
        return String::new();
    }

    let mut out = String::new();
    let formatter = PatchFormatter::new();

    out.push_str(&format!("diff --git a/{0} b/{0}\n", path));
    out.push_str(&format!("--- a/{0}\n+++ b/{0}\n", path));

    let patch = diffy::create_patch(before, after);
    out.push_str(&formatter.fmt_patch(&patch).to_string());
    if !out.ends_with('\n') {
        out.push('\n');
    }

    out
}

/// Markdown summary of a transform run.
pub fn render_result_md(changes: &ChangeMap, fatal: Option<&str>) -> String {
    let mut out = String::new();
    out.push_str("# repin result\n\n");

    if let Some(message) = fatal {
        out.push_str(&format!("**Fatal**: {message}\n\n"));
    }

    if changes.is_empty() {
        out.push_str("_No files visited._\n");
        return out;
    }

    for (path, change) in changes {
        out.push_str(&format!(
            "- `{}` {} (+{} -{})\n",
            path,
            action_label(change.action),
            change.additions,
            change.deletions
        ));
        if let Some(error) = &change.error {
            out.push_str(&format!("  - error: {error}\n"));
        }
    }

    out
}

fn action_label(action: ChangeAction) -> &'static str {
    match action {
        ChangeAction::Unchanged => "unchanged",
        ChangeAction::Modified => "modified",
        ChangeAction::Skipped => "skipped",
        ChangeAction::Added => "added",
        ChangeAction::Deleted => "deleted",
        ChangeAction::Error => "error",
    }
}
