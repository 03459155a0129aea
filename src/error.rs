//! Error types for catbot.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CatbotError>;

/// Every failure a command, the store, or the config loader can produce.
#[derive(Error, Debug)]
pub enum CatbotError {
    /// The input line does not follow the command grammar.
    #[error("That's the wrong format! {0}")]
    MalformedCommand(String),

    /// A well-formed task number that does not address any task.
    #[error("There's no task {position}, the list only has {len} task(s)")]
    IndexOutOfRange {
        /// The 1-based position the user asked for.
        position: i64,
        /// Length of the list at the time of the request.
        len: usize,
    },

    /// `last` was used while the list holds no tasks.
    #[error("There's no last task, the list is empty")]
    NoLastTask,

    /// A recurrence interval that is zero or negative.
    #[error("I can't travel back in time ... yet! ({0})")]
    InvalidInterval(String),

    /// Configuration could not be located, read or parsed.
    #[error("Config error: {0}")]
    Config(String),

    /// The task store could not be read or written.
    #[error("Storage error: {0}")]
    Io(#[from] std::io::Error),
}

impl CatbotError {
    /// Build a `MalformedCommand` from anything string-like.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedCommand(reason.into())
    }

    /// Whether the session can report this error and keep accepting input.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::MalformedCommand(_)
                | Self::IndexOutOfRange { .. }
                | Self::NoLastTask
                | Self::InvalidInterval(_)
        )
    }
}
