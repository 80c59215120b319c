//! Resolved settings shared by CLI commands and the MCP server.

use std::path::{Path, PathBuf};

use anyhow::Result;
use colored::Colorize;

use crate::config::load_config;
use crate::resources::DirectorySource;
use crate::sync::{
    SyncReport, SyncTarget,
    migrate::{MigrationSummary, migrate_legacy},
    plan_targets, sync_all,
};

/// Values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct ContextOverrides {
    pub defaults_root: Option<PathBuf>,
    pub overrides_root: Option<PathBuf>,
    pub languages: Vec<String>,
}

/// Everything one sync run did (or would do).
#[derive(Debug)]
pub struct SyncOutcome {
    pub migration: MigrationSummary,
    pub reports: Vec<(SyncTarget, SyncReport)>,
}

#[derive(Debug)]
pub struct SyncContext {
    pub legacy_root: Option<PathBuf>,
    pub targets: Vec<SyncTarget>,
    pub source: DirectorySource,
}

impl SyncContext {
    pub fn new(path: &Path, overrides: ContextOverrides, verbose: bool) -> Result<Self> {
        let loaded = load_config(path)?;

        let defaults_root = match overrides.defaults_root {
            Some(root) => path.join(root),
            None => loaded.resolve(&loaded.config.defaults_root),
        };
        let overrides_root = match overrides.overrides_root {
            Some(root) => path.join(root),
            None => loaded.resolve(&loaded.config.overrides_root),
        };
        let legacy_root = loaded
            .config
            .legacy_root
            .as_deref()
            .map(|root| loaded.resolve(root));
        let languages = if overrides.languages.is_empty() {
            loaded.config.languages.clone()
        } else {
            overrides.languages
        };

        let targets = plan_targets(
            &defaults_root,
            &overrides_root,
            &languages,
            &loaded.config.files,
        )?;

        if verbose {
            eprintln!(
                "{} {} target(s) from {} ({})",
                "note:".bold().cyan(),
                targets.len(),
                defaults_root.display(),
                if loaded.from_file {
                    "config file"
                } else {
                    "default config"
                }
            );
        }

        Ok(Self {
            source: DirectorySource::new(defaults_root),
            legacy_root,
            targets,
        })
    }

    /// Move legacy overrides into place, then sync every target.
    ///
    /// Nothing touches the disk unless `apply` is set.
    pub fn run(&self, apply: bool) -> Result<SyncOutcome> {
        let migration = match &self.legacy_root {
            Some(legacy_root) => migrate_legacy(legacy_root, &self.targets, apply)?,
            None => MigrationSummary::default(),
        };
        // Dry-run reads legacy files that have not moved yet.
        let pending_moves = if apply { &[][..] } else { &migration.moved[..] };
        let reports = sync_all(&self.source, &self.targets, apply, pending_moves);
        Ok(SyncOutcome { migration, reports })
    }
}
