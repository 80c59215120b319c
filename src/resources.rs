//! Sources of default translation content.
//!
//! A source resolves a logical path such as `en-US/Chat.lang` to the default
//! lines for that file. A missing resource is `Ok(None)`, not an error.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

pub trait DefaultSource: Sync {
    /// Load the default lines stored at `logical_path`.
    fn load(&self, logical_path: &str) -> Result<Option<Vec<String>>>;

    /// Human-readable location of `logical_path`, used in messages.
    fn describe(&self, logical_path: &str) -> String {
        logical_path.to_string()
    }
}

/// Split text into lines, accepting both `\n` and `\r\n`.
pub fn split_lines(content: &str) -> Vec<String> {
    content.lines().map(str::to_string).collect()
}

/// Defaults packaged as a directory tree on disk.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_of(&self, logical_path: &str) -> PathBuf {
        logical_path
            .split('/')
            .fold(self.root.clone(), |path, part| path.join(part))
    }
}

impl DefaultSource for DirectorySource {
    fn load(&self, logical_path: &str) -> Result<Option<Vec<String>>> {
        let path = self.path_of(logical_path);
        if !path.is_file() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read default file: {}", path.display()))?;
        Ok(Some(split_lines(&content)))
    }

    fn describe(&self, logical_path: &str) -> String {
        self.path_of(logical_path).display().to_string()
    }
}


#[cfg(test)]
pub use memory::MemorySource;
