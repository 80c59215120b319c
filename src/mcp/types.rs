use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::context::SyncOutcome;
use crate::sync::SyncStatus;

// ============================================================
// Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectParams {
    /// Absolute path of the project (where .langsyncrc.json lives)
    pub project_root_path: String,
}

pub type GetConfigParams = ProjectParams;
pub type CheckOverridesParams = ProjectParams;
pub type SyncOverridesParams = ProjectParams;

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MergeLinesParams {
    /// Content of the default .lang file
    pub default_text: String,
    /// Content of the user's override file. Omit to generate a new override.
    pub user_text: Option<String>,
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub defaults_root: String,
    pub overrides_root: String,
    pub languages: Vec<String>,
    pub files: Vec<String>,
    pub legacy_root: Option<String>,
}

impl From<crate::config::Config> for ConfigValues {
    fn from(c: crate::config::Config) -> Self {
        Self {
            defaults_root: c.defaults_root,
            overrides_root: c.overrides_root,
            languages: c.languages,
            files: c.files,
            legacy_root: c.legacy_root,
        }
    }
}

// ============================================================
// Sync Types (check_overrides, sync_overrides)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SyncResult {
    /// False for check_overrides, where nothing is written
    pub applied: bool,
    pub stats: SyncStats,
    pub targets: Vec<TargetItem>,
    pub moved: Vec<MovedItem>,
}

#[derive(Debug, Default, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SyncStats {
    pub created_override: usize,
    pub merged: usize,
    pub no_changes: usize,
    pub resource_not_found: usize,
    pub error: usize,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TargetItem {
    pub language: String,
    pub file: String,
    pub target_path: String,
    /// CREATED_OVERRIDE, MERGED, NO_CHANGES, RESOURCE_NOT_FOUND or ERROR
    pub status: String,
    pub message: String,
    pub count: usize,
    pub added_count: usize,
    pub updated_count: usize,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovedItem {
    pub from: String,
    pub to: String,
}

impl SyncResult {
    pub fn from_outcome(outcome: SyncOutcome, applied: bool) -> Self {
        let mut stats = SyncStats::default();
        let targets = outcome
            .reports
            .into_iter()
            .map(|(target, report)| {
                let counter = match report.status {
                    SyncStatus::CreatedOverride => &mut stats.created_override,
                    SyncStatus::Merged => &mut stats.merged,
                    SyncStatus::NoChanges => &mut stats.no_changes,
                    SyncStatus::ResourceNotFound => &mut stats.resource_not_found,
                    SyncStatus::Error => &mut stats.error,
                };
                *counter += 1;
                TargetItem {
                    language: target.language,
                    file: target.file,
                    target_path: target.target_path.to_string_lossy().to_string(),
                    status: report.status.to_string(),
                    message: report.message,
                    count: report.count,
                    added_count: report.added_count,
                    updated_count: report.updated_count,
                }
            })
            .collect();
        let moved = outcome
            .migration
            .moved
            .into_iter()
            .map(|m| MovedItem {
                from: m.from.to_string_lossy().to_string(),
                to: m.to.to_string_lossy().to_string(),
            })
            .collect();

        Self {
            applied,
            stats,
            targets,
            moved,
        }
    }
}

// ============================================================
// Merge Types (merge_lines)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MergeLinesResult {
    /// False when the user text was already in sync
    pub changed: bool,
    pub added_count: usize,
    pub updated_count: usize,
    /// Resulting file content, one `\n` after every line
    pub text: String,
}
