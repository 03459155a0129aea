//! Plain-text file storage.
//!
//! The file lives at `~/.catbot/tasks.txt` unless configured otherwise.

use std::path::{Path, PathBuf};

use log::debug;

use super::Storage;
use crate::error::Result;

/// Stores the command log in a UTF-8 text file, one command per line.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for FileStorage {
    fn read_all(&self) -> Result<Vec<String>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let contents = std::fs::read_to_string(&self.path)?;
        Ok(contents.lines().map(str::to_string).collect())
    }

    fn write_all(&mut self, lines: &[String]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut contents = lines.join("\n");
        if !contents.is_empty() {
            contents.push('\n');
        }

        std::fs::write(&self.path, contents)?;
        debug!("wrote {} line(s) to {}", lines.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_reads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path().join("tasks.txt"));
        assert!(storage.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_write_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage = FileStorage::new(temp_dir.path().join("tasks.txt"));

        let lines = vec!["todo read book".to_string(), "mark last".to_string()];
        storage.write_all(&lines).unwrap();

        assert_eq!(storage.read_all().unwrap(), lines);
        let raw = std::fs::read_to_string(storage.path()).unwrap();
        assert_eq!(raw, "todo read book\nmark last\n");
    }

    #[test]
    fn test_write_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage = FileStorage::new(temp_dir.path().join("tasks.txt"));

        storage
            .write_all(&["todo a".to_string(), "todo b".to_string()])
            .unwrap();
        storage.write_all(&["todo c".to_string()]).unwrap();

        assert_eq!(storage.read_all().unwrap(), vec!["todo c".to_string()]);
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("deeper").join("tasks.txt");
        let mut storage = FileStorage::new(&path);

        storage.write_all(&[]).unwrap();
        assert!(path.exists());
        assert!(storage.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_unreadable_path_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        // A directory cannot be read as a file
        let storage = FileStorage::new(temp_dir.path());
        let err = storage.read_all().unwrap_err();
        assert!(matches!(err, crate::error::CatbotError::Io(_)));
    }
}
