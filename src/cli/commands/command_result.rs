use crate::sync::{SyncReport, SyncStatus, SyncTarget, migrate::MigrationSummary};

#[derive(Debug)]
pub enum CommandSummary {
    Check(SyncSummary),
    Sync(SyncSummary),
    Generate(GenerateSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct SyncSummary {
    pub reports: Vec<(SyncTarget, SyncReport)>,
    pub migration: MigrationSummary,
    pub is_apply: bool,
}

impl SyncSummary {
    pub fn count(&self, status: SyncStatus) -> usize {
        self.reports
            .iter()
            .filter(|(_, report)| report.status == status)
            .count()
    }

    /// Files that were (or would be) created or rewritten.
    pub fn changed_count(&self) -> usize {
        self.reports
            .iter()
            .filter(|(_, report)| report.is_change())
            .count()
    }
}

#[derive(Debug)]
pub struct GenerateSummary {
    pub lines: Vec<String>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running langsync commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    pub exit_on_errors: bool,
}
