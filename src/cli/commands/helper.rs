use super::{CommandResult, CommandSummary, SyncSummary};
use crate::sync::SyncStatus;

/// Build the result of a `check` or `sync` run.
///
/// Failed targets are errors and missing default resources are warnings.
/// For `check`, every file that still needs writing is an error too.
pub fn finish_sync(summary: SyncSummary, is_check: bool) -> CommandResult {
    let mut error_count = summary.count(SyncStatus::Error);
    if is_check {
        error_count += summary.changed_count();
    }
    let warning_count = summary.count(SyncStatus::ResourceNotFound);

    let summary = if is_check {
        CommandSummary::Check(summary)
    } else {
        CommandSummary::Sync(summary)
    };

    CommandResult {
        summary,
        error_count,
        warning_count,
        exit_on_errors: true,
    }
}
