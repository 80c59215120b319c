//! Relocation of override files from a legacy directory.
//!
//! Older layouts kept overrides somewhere else. Before syncing, each
//! `<legacy_root>/<language>/<file>` is moved to its target path unless a file
//! already exists there. Empty legacy directories are removed afterwards;
//! anything left behind (skipped files, unrelated files) stays untouched.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use walkdir::WalkDir;

use super::plan::SyncTarget;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovedFile {
    pub from: PathBuf,
    pub to: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationSummary {
    pub moved: Vec<MovedFile>,
    /// Legacy files left in place because the target already exists.
    pub skipped: Vec<PathBuf>,
}

impl MigrationSummary {
    pub fn is_empty(&self) -> bool {
        self.moved.is_empty() && self.skipped.is_empty()
    }
}

pub fn legacy_path(legacy_root: &Path, target: &SyncTarget) -> PathBuf {
    target
        .file
        .split('/')
        .fold(legacy_root.join(&target.language), |path, part| path.join(part))
}

/// Move legacy override files into place.
///
/// With `apply == false` the summary lists what would be moved.
pub fn migrate_legacy(
    legacy_root: &Path,
    targets: &[SyncTarget],
    apply: bool,
) -> Result<MigrationSummary> {
    let mut summary = MigrationSummary::default();
    if !legacy_root.is_dir() {
        return Ok(summary);
    }

    for target in targets {
        let from = legacy_path(legacy_root, target);
        if !from.is_file() {
            continue;
        }
        let to = target.target_path.clone();
        if to.exists() {
            summary.skipped.push(from);
            continue;
        }

        if apply {
            if let Some(parent) = to.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
            move_file(&from, &to)?;
        }
        summary.moved.push(MovedFile { from, to });
    }

    if apply {
        prune_empty_dirs(legacy_root)?;
    }
    Ok(summary)
}

fn move_file(from: &Path, to: &Path) -> Result<()> {
    if fs::rename(from, to).is_ok() {
        return Ok(());
    }
    // Rename fails across filesystems; fall back to copy + remove.
    fs::copy(from, to).with_context(|| {
        format!("Failed to move {} to {}", from.display(), to.display())
    })?;
    fs::remove_file(from).with_context(|| format!("Failed to remove {}", from.display()))
}

/// Remove empty directories under and including `root`, deepest first.
fn prune_empty_dirs(root: &Path) -> Result<()> {
    for entry in WalkDir::new(root).contents_first(true) {
        let entry = entry.with_context(|| format!("Cannot access path in {}", root.display()))?;
        if !entry.file_type().is_dir() {
            continue;
        }
        let is_empty = fs::read_dir(entry.path())
            .with_context(|| format!("Failed to read directory: {}", entry.path().display()))?
            .next()
            .is_none();
        if is_empty {
            fs::remove_dir(entry.path()).with_context(|| {
                format!("Failed to remove directory: {}", entry.path().display())
            })?;
        }
    }
    Ok(())
}
