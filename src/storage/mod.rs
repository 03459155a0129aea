//! Storage layer for catbot.
//!
//! The task list is persisted as its command log: one command per line,
//! replayed through the parser on load. This module only moves lines in and
//! out of a medium; the format belongs to [`crate::tasks`].

mod file;

pub use file::FileStorage;

use crate::error::Result;

/// Somewhere to keep the serialized task list between sessions.
#[cfg_attr(test, mockall::automock)]
pub trait Storage {
    /// Read every stored line, oldest first. A store that was never written
    /// reads as empty.
    ///
    /// # Errors
    ///
    /// Returns `CatbotError::Io` if the medium cannot be read.
    fn read_all(&self) -> Result<Vec<String>>;

    /// Replace the stored contents with `lines`.
    ///
    /// # Errors
    ///
    /// Returns `CatbotError::Io` if the medium cannot be written.
    fn write_all(&mut self, lines: &[String]) -> Result<()>;
}
