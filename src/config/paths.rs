//! Path resolution for catbot configuration and data files.
//!
//! All catbot data is stored in `~/.catbot/`:
//! - `config.yaml` - Main configuration file
//! - `tasks.txt` - The task list, one command per line

use std::path::PathBuf;

use crate::error::{CatbotError, Result};

/// Paths to catbot configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.catbot/`
    pub root: PathBuf,
    /// Config file: `~/.catbot/config.yaml`
    pub config_file: PathBuf,
    /// Default task file: `~/.catbot/tasks.txt`
    pub tasks_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self> {
        let home = std::env::var("HOME")
            .map_err(|_| CatbotError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".catbot")))
    }

    /// Create paths with a custom root directory.
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            tasks_file: root.join("tasks.txt"),
            root,
        }
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // No home directory: fall back to the working directory
            Self::with_root(PathBuf::from(".catbot"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-catbot");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
        assert_eq!(paths.tasks_file, root.join("tasks.txt"));
    }
}
