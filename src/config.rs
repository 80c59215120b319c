use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".langsyncrc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory of packaged default files, laid out as `<language>/<file>`.
    #[serde(default = "default_defaults_root")]
    pub defaults_root: String,
    /// Directory of user override files, same layout as `defaults_root`.
    #[serde(default = "default_overrides_root")]
    pub overrides_root: String,
    /// Languages to sync. Empty means every subdirectory of `defaults_root`.
    #[serde(default)]
    pub languages: Vec<String>,
    /// File names or glob patterns, relative to each language directory.
    #[serde(default = "default_files")]
    pub files: Vec<String>,
    /// Old override location whose files are moved into `overrides_root`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legacy_root: Option<String>,
}

fn default_defaults_root() -> String {
    "./defaults".to_string()
}

fn default_overrides_root() -> String {
    "./overrides".to_string()
}

fn default_files() -> Vec<String> {
    vec!["*.lang".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            defaults_root: default_defaults_root(),
            overrides_root: default_overrides_root(),
            languages: Vec::new(),
            files: default_files(),
            legacy_root: None,
        }
    }
}

/// Check if a file entry contains glob wildcards.
pub fn is_glob_pattern(entry: &str) -> bool {
    entry.contains('*') || entry.contains('?') || entry.contains('[')
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if a `files` pattern is invalid or a language name is empty.
    pub fn validate(&self) -> Result<()> {
        for entry in &self.files {
            if entry.trim().is_empty() {
                bail!("Empty entry in 'files'");
            }
            if is_glob_pattern(entry) {
                Pattern::new(entry)
                    .with_context(|| format!("Invalid glob pattern in 'files': \"{}\"", entry))?;
            }
        }

        for language in &self.languages {
            if language.trim().is_empty() || language.contains(['/', '\\']) {
                bail!("Invalid language in 'languages': \"{}\"", language);
            }
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
    /// Directory relative config paths are resolved against.
    pub base_dir: PathBuf,
}

impl ConfigLoadResult {
    pub fn resolve(&self, path: &str) -> PathBuf {
        self.base_dir.join(path)
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                from_file: true,
                base_dir,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
            base_dir: start_dir.to_path_buf(),
        }),
    }
}
