//! File-level synchronization of override files.
//!
//! Loads defaults through a [`DefaultSource`], reads the user's override file,
//! runs the pure merge from [`crate::core`] and writes the result back only when
//! something changed. Writes go through a temp file in the target directory and
//! a rename, so a failed write never leaves a partial file behind.

pub mod migrate;
pub mod plan;

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use rayon::prelude::*;
use tempfile::NamedTempFile;

use crate::core::{generate_override, index::key_order, merge, parse_lines};
use crate::resources::{DefaultSource, split_lines};
use migrate::MovedFile;

pub use plan::{SyncTarget, plan_targets};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyncStatus {
    CreatedOverride,
    Merged,
    NoChanges,
    ResourceNotFound,
    Error,
}

impl SyncStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncStatus::CreatedOverride => "CREATED_OVERRIDE",
            SyncStatus::Merged => "MERGED",
            SyncStatus::NoChanges => "NO_CHANGES",
            SyncStatus::ResourceNotFound => "RESOURCE_NOT_FOUND",
            SyncStatus::Error => "ERROR",
        }
    }
}

impl std::fmt::Display for SyncStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of syncing one override file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub status: SyncStatus,
    pub message: String,
    /// Keys written for a created file, or added + updated for a merge.
    pub count: usize,
    pub added_count: usize,
    pub updated_count: usize,
}

impl SyncReport {
    pub fn created_override(path: &Path, count: usize) -> Self {
        Self {
            status: SyncStatus::CreatedOverride,
            message: format!(
                "Created override file {} (all translations commented out)",
                path.display()
            ),
            count,
            added_count: 0,
            updated_count: 0,
        }
    }

    pub fn merged(added_count: usize, updated_count: usize) -> Self {
        let mut parts = Vec::new();
        if added_count > 0 {
            parts.push(format!("Added {} new translation(s)", added_count));
        }
        if updated_count > 0 {
            parts.push(format!("Updated {} commented translation(s)", updated_count));
        }
        Self {
            status: SyncStatus::Merged,
            message: parts.join(", "),
            count: added_count + updated_count,
            added_count,
            updated_count,
        }
    }

    pub fn no_changes() -> Self {
        Self::with_status(SyncStatus::NoChanges, "No new translations".to_string())
    }

    pub fn resource_not_found(resource: &str) -> Self {
        Self::with_status(
            SyncStatus::ResourceNotFound,
            format!("Resource not found: {}", resource),
        )
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::with_status(SyncStatus::Error, message.into())
    }

    fn with_status(status: SyncStatus, message: String) -> Self {
        Self {
            status,
            message,
            count: 0,
            added_count: 0,
            updated_count: 0,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(
            self.status,
            SyncStatus::CreatedOverride | SyncStatus::Merged | SyncStatus::NoChanges
        )
    }

    /// True when the override file was (or would be) written.
    pub fn is_change(&self) -> bool {
        matches!(
            self.status,
            SyncStatus::CreatedOverride | SyncStatus::Merged
        )
    }
}

/// Sync a single override file.
///
/// With `apply == false` nothing is written; the report describes what would happen.
pub fn sync_target(source: &dyn DefaultSource, target: &SyncTarget, apply: bool) -> SyncReport {
    sync_target_from(source, target, &target.target_path, apply)
}

/// Sync `target`, taking the current override contents from `current`.
///
/// `current` differs from the target path only in dry-run, when a legacy file
/// is still waiting to be moved there.
pub fn sync_target_from(
    source: &dyn DefaultSource,
    target: &SyncTarget,
    current: &Path,
    apply: bool,
) -> SyncReport {
    try_sync_target(source, target, current, apply)
        .unwrap_or_else(|e| SyncReport::error(format!("{:#}", e)))
}

/// Sync every target in parallel. Reports come back in target order.
///
/// Targets that appear in `pending_moves` are judged against the legacy file
/// that would be moved onto them.
pub fn sync_all(
    source: &dyn DefaultSource,
    targets: &[SyncTarget],
    apply: bool,
    pending_moves: &[MovedFile],
) -> Vec<(SyncTarget, SyncReport)> {
    targets
        .par_iter()
        .map(|target| {
            let current = pending_moves
                .iter()
                .find(|moved| moved.to == target.target_path)
                .map_or(target.target_path.as_path(), |moved| moved.from.as_path());
            (
                target.clone(),
                sync_target_from(source, target, current, apply),
            )
        })
        .collect()
}

fn try_sync_target(
    source: &dyn DefaultSource,
    target: &SyncTarget,
    current: &Path,
    apply: bool,
) -> Result<SyncReport> {
    let Some(default_lines) = source.load(&target.resource_path)? else {
        return Ok(SyncReport::resource_not_found(
            &source.describe(&target.resource_path),
        ));
    };

    let path = &target.target_path;
    if !current.exists() {
        if apply {
            write_lines(path, &generate_override(&default_lines))?;
        }
        let key_count = key_order(&parse_lines(&default_lines)).len();
        return Ok(SyncReport::created_override(path, key_count));
    }

    let user_lines = read_lines(current)?;
    let output = merge(&default_lines, &user_lines);
    if !output.has_changes() {
        return Ok(SyncReport::no_changes());
    }

    if apply {
        write_lines(path, &output.lines)?;
    }
    Ok(SyncReport::merged(output.added_count, output.updated_count))
}

pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(split_lines(&content))
}

/// Write `lines` to `path`, each followed by `\n`, replacing the file atomically.
pub fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    let parent = parent_dir(path);
    fs::create_dir_all(&parent)
        .with_context(|| format!("Failed to create directory: {}", parent.display()))?;

    let mut file = NamedTempFile::new_in(&parent)
        .with_context(|| format!("Failed to create temp file in: {}", parent.display()))?;
    for line in lines {
        writeln!(file, "{}", line)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
    }
    file.flush()
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    // Keep the permissions of the file being replaced.
    if let Ok(metadata) = fs::metadata(path) {
        fs::set_permissions(file.path(), metadata.permissions())
            .with_context(|| format!("Failed to set permissions: {}", path.display()))?;
    }
    file.persist(path)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    Ok(())
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
