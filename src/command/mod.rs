//! Typed commands and their execution.
//!
//! A `Command` is produced by [`crate::parser::parse`], executed once against
//! a [`TaskList`](crate::tasks::TaskList), and discarded.

mod execute;

use chrono::{Duration, NaiveDateTime};

use crate::tasks::TaskRef;

/// One user action, carrying only the data needed to perform it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `todo <description>`
    AddTodo { description: String },
    /// `deadline <description> /by <when>`
    AddDeadline {
        description: String,
        due_at: NaiveDateTime,
    },
    /// `event <description> /from <start> /to <end>`
    AddEvent {
        description: String,
        starts_at: NaiveDateTime,
        ends_at: NaiveDateTime,
    },
    /// `recurring <description> /on <when> /every <interval>`
    AddRecurring {
        description: String,
        anchor_at: NaiveDateTime,
        interval: Duration,
    },
    /// `list`
    List,
    /// `mark <n>` (done) or `unmark <n>` (not done)
    Mark { target: TaskRef, done: bool },
    /// `delete <n>`
    Delete { target: TaskRef },
    /// `find <keyword>`
    Find { keyword: String },
    /// `echo <message>`
    Echo { message: String },
}

impl Command {
    /// Whether executing this command can change the task list, and so
    /// requires the list to be written back to storage afterwards.
    #[must_use]
    pub const fn is_mutating(&self) -> bool {
        matches!(
            self,
            Self::AddTodo { .. }
                | Self::AddDeadline { .. }
                | Self::AddEvent { .. }
                | Self::AddRecurring { .. }
                | Self::Mark { .. }
                | Self::Delete { .. }
        )
    }
}
