//! Task model and task list.
//!
//! - `Task` / `TaskKind`: one tracked item and its variant-specific schedule
//! - `TaskList`: the ordered collection commands operate on
//! - `TaskRef`: how commands point at a task

mod list;
mod task;

pub use list::{TaskList, TaskRef};
pub use task::{format_datetime, format_timestamp, Task, TaskKind, DONE_ICON, REMARK_COMMAND};
