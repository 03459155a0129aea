//! The task model: one closed enum of task kinds, two renderings.

use std::fmt;

use chrono::{Duration, NaiveDateTime, Timelike};

use crate::core::format_interval;

/// Glyph shown in the status slot of a completed task.
pub const DONE_ICON: char = '✓';

/// Command that re-applies the done state to the task loaded just before it.
pub const REMARK_COMMAND: &str = "mark last";

/// Medium date, short time: `Dec 1, 2024, 10:00 AM`.
const DISPLAY_FORMAT: &str = "%b %-d, %Y, %-I:%M %p";

/// The variant-specific part of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// A plain todo with no schedule.
    Todo,
    /// Something due at a point in time.
    Deadline {
        /// When it is due.
        due_at: NaiveDateTime,
    },
    /// Something spanning a time range.
    Event {
        /// When it starts.
        starts_at: NaiveDateTime,
        /// When it ends.
        ends_at: NaiveDateTime,
    },
    /// Something that repeats at a fixed interval.
    Recurring {
        /// The first occurrence.
        anchor_at: NaiveDateTime,
        /// Time between occurrences, positive and in whole seconds.
        interval: Duration,
    },
}

impl TaskKind {
    /// Single-letter tag used in the display form.
    #[must_use]
    pub const fn tag(&self) -> char {
        match self {
            Self::Todo => 'T',
            Self::Deadline { .. } => 'D',
            Self::Event { .. } => 'E',
            Self::Recurring { .. } => 'R',
        }
    }

    /// Keyword that starts the command creating this kind of task.
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Deadline { .. } => "deadline",
            Self::Event { .. } => "event",
            Self::Recurring { .. } => "recurring",
        }
    }
}

/// A single tracked task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    done: bool,
    kind: TaskKind,
}

impl Task {
    /// Create a task in the not-done state.
    ///
    /// The description is taken as-is; the parser is responsible for
    /// rejecting empty ones.
    pub fn new(description: impl Into<String>, kind: TaskKind) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind,
        }
    }

    pub fn todo(description: impl Into<String>) -> Self {
        Self::new(description, TaskKind::Todo)
    }

    pub fn deadline(description: impl Into<String>, due_at: NaiveDateTime) -> Self {
        Self::new(description, TaskKind::Deadline { due_at })
    }

    pub fn event(
        description: impl Into<String>,
        starts_at: NaiveDateTime,
        ends_at: NaiveDateTime,
    ) -> Self {
        Self::new(description, TaskKind::Event { starts_at, ends_at })
    }

    pub fn recurring(
        description: impl Into<String>,
        anchor_at: NaiveDateTime,
        interval: Duration,
    ) -> Self {
        Self::new(
            description,
            TaskKind::Recurring {
                anchor_at,
                interval,
            },
        )
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    #[must_use]
    pub const fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn set_done(&mut self, done: bool) {
        self.done = done;
    }

    /// The status slot: a check mark when done, a space otherwise.
    #[must_use]
    pub const fn status_icon(&self) -> char {
        if self.done {
            DONE_ICON
        } else {
            ' '
        }
    }

    /// The command line(s) that recreate this task when parsed and executed.
    ///
    /// A done task gets a second line, [`REMARK_COMMAND`], which marks the
    /// task that was just added.
    #[must_use]
    pub fn to_command_string(&self) -> String {
        let keyword = self.kind.keyword();
        let mut command = match &self.kind {
            TaskKind::Todo => format!("{keyword} {}", self.description),
            TaskKind::Deadline { due_at } => {
                format!("{keyword} {} /by {}", self.description, format_timestamp(due_at))
            },
            TaskKind::Event { starts_at, ends_at } => format!(
                "{keyword} {} /from {} /to {}",
                self.description,
                format_timestamp(starts_at),
                format_timestamp(ends_at)
            ),
            TaskKind::Recurring {
                anchor_at,
                interval,
            } => format!(
                "{keyword} {} /on {} /every {}",
                self.description,
                format_timestamp(anchor_at),
                format_interval(*interval)
            ),
        };

        if self.done {
            command.push('\n');
            command.push_str(REMARK_COMMAND);
        }
        command
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}][{}] {}",
            self.kind.tag(),
            self.status_icon(),
            self.description
        )?;

        match &self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { due_at } => write!(f, " by {}", format_datetime(due_at)),
            TaskKind::Event { starts_at, ends_at } => write!(
                f,
                " ({} – {})",
                format_datetime(starts_at),
                format_datetime(ends_at)
            ),
            TaskKind::Recurring {
                anchor_at,
                interval,
            } => write!(
                f,
                " (from {}, every {})",
                format_datetime(anchor_at),
                format_interval(*interval)
            ),
        }
    }
}

/// Human-readable timestamp, medium date and short time.
#[must_use]
pub fn format_datetime(datetime: &NaiveDateTime) -> String {
    datetime.format(DISPLAY_FORMAT).to_string()
}

/// ISO timestamp for the command log; seconds only when non-zero.
#[must_use]
pub fn format_timestamp(datetime: &NaiveDateTime) -> String {
    if datetime.second() == 0 {
        datetime.format("%Y-%m-%dT%H:%M").to_string()
    } else {
        datetime.format("%Y-%m-%dT%H:%M:%S").to_string()
    }
}
