//! Which override files to sync.
//!
//! A target is one `<language>/<file>` pair: the default resource it is merged
//! from and the override file it is written to.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::{MatchOptions, Pattern};
use walkdir::WalkDir;

use crate::config::is_glob_pattern;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncTarget {
    pub language: String,
    /// File name relative to the language directory, `/`-separated.
    pub file: String,
    /// Logical path of the default resource, e.g. `en-US/Chat.lang`.
    pub resource_path: String,
    pub target_path: PathBuf,
}

impl SyncTarget {
    pub fn new(language: &str, file: &str, overrides_root: &Path) -> Self {
        let target_path = file
            .split('/')
            .fold(overrides_root.join(language), |path, part| path.join(part));
        Self {
            language: language.to_string(),
            file: file.to_string(),
            resource_path: format!("{}/{}", language, file),
            target_path,
        }
    }
}

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Expand languages × file entries into sync targets.
///
/// With no configured languages, every subdirectory of `defaults_root` is one.
/// Glob entries are matched against the files present in each language's
/// default directory; literal entries are kept even if the default is missing
/// so that the sync can report it.
pub fn plan_targets(
    defaults_root: &Path,
    overrides_root: &Path,
    languages: &[String],
    files: &[String],
) -> Result<Vec<SyncTarget>> {
    let languages = if languages.is_empty() {
        discover_languages(defaults_root)?
    } else {
        languages.to_vec()
    };

    let mut targets = Vec::new();
    for language in &languages {
        let available = list_files(&defaults_root.join(language));
        let mut seen = HashSet::new();

        for entry in files {
            if is_glob_pattern(entry) {
                let pattern = Pattern::new(entry)
                    .with_context(|| format!("Invalid glob pattern: \"{}\"", entry))?;
                for file in &available {
                    if pattern.matches_with(file, MATCH_OPTIONS) && seen.insert(file.clone()) {
                        targets.push(SyncTarget::new(language, file, overrides_root));
                    }
                }
            } else if seen.insert(entry.clone()) {
                targets.push(SyncTarget::new(language, entry, overrides_root));
            }
        }
    }
    Ok(targets)
}

/// Subdirectory names of `defaults_root`, sorted.
pub fn discover_languages(defaults_root: &Path) -> Result<Vec<String>> {
    if !defaults_root.is_dir() {
        bail!("Defaults directory not found: {}", defaults_root.display());
    }

    let mut languages = Vec::new();
    for entry in WalkDir::new(defaults_root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry
            .with_context(|| format!("Cannot access path in {}", defaults_root.display()))?;
        if entry.file_type().is_dir() {
            languages.push(entry.file_name().to_string_lossy().to_string());
        }
    }
    Ok(languages)
}

/// Files under `dir` as sorted `/`-separated relative paths. Missing dir → empty.
fn list_files(dir: &Path) -> Vec<String> {
    WalkDir::new(dir)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| {
            let relative = entry.path().strip_prefix(dir).ok()?;
            let parts: Vec<String> = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy().to_string())
                .collect();
            Some(parts.join("/"))
        })
        .collect()
}
