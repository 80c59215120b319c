use anyhow::{Ok, Result};

use super::super::args::{CheckCommand, CommonArgs, SyncCommand};
use super::helper::finish_sync;
use super::{CommandResult, SyncSummary};
use crate::context::SyncContext;

pub fn sync(cmd: SyncCommand) -> Result<CommandResult> {
    let summary = run_sync(&cmd.common, cmd.apply)?;
    Ok(finish_sync(summary, false))
}

/// Dry-run sync where every pending change is a problem.
pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let summary = run_sync(&cmd.common, false)?;
    Ok(finish_sync(summary, true))
}

fn run_sync(common: &CommonArgs, apply: bool) -> Result<SyncSummary> {
    let ctx = SyncContext::new(&common.path, common.overrides(), common.verbose)?;
    let outcome = ctx.run(apply)?;

    Ok(SyncSummary {
        reports: outcome.reports,
        migration: outcome.migration,
        is_apply: apply,
    })
}
