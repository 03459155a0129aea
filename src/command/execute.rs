//! Command execution against a task list.

use std::fmt::Write;

use log::debug;

use super::Command;
use crate::error::Result;
use crate::output::Ui;
use crate::tasks::{Task, TaskList};

impl Command {
    /// Apply this command to `tasks`, sending the response to `ui`.
    ///
    /// Validation happens before any mutation, so a failed command leaves the
    /// list exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns `CatbotError::IndexOutOfRange` if a mark, unmark or delete
    /// targets a position with no task.
    pub fn execute(&self, tasks: &mut TaskList, ui: &mut dyn Ui) -> Result<()> {
        debug!("executing {self:?}");

        match self {
            Self::AddTodo { description } => add(tasks, ui, Task::todo(description.as_str())),
            Self::AddDeadline {
                description,
                due_at,
            } => add(tasks, ui, Task::deadline(description.as_str(), *due_at)),
            Self::AddEvent {
                description,
                starts_at,
                ends_at,
            } => add(
                tasks,
                ui,
                Task::event(description.as_str(), *starts_at, *ends_at),
            ),
            Self::AddRecurring {
                description,
                anchor_at,
                interval,
            } => add(
                tasks,
                ui,
                Task::recurring(description.as_str(), *anchor_at, *interval),
            ),
            Self::List => {
                ui.set_next_output(&render_list(tasks));
                Ok(())
            },
            Self::Mark { target, done } => {
                let task = tasks.set_done(*target, *done)?;
                let message = if *done {
                    format!("Nice! I've marked this task as done:\n  {task}")
                } else {
                    format!("OK, I've marked this task as not done yet:\n  {task}")
                };
                ui.set_next_output(&message);
                Ok(())
            },
            Self::Delete { target } => {
                let task = tasks.remove(*target)?;
                ui.set_next_output(&format!(
                    "Noted. I've removed this task:\n  {task}\n{}",
                    count_line(tasks.len())
                ));
                Ok(())
            },
            Self::Find { keyword } => {
                ui.set_next_output(&render_matches(tasks, keyword));
                Ok(())
            },
            Self::Echo { message } => {
                ui.set_next_output(message);
                Ok(())
            },
        }
    }
}

fn add(tasks: &mut TaskList, ui: &mut dyn Ui, task: Task) -> Result<()> {
    let message = format!("Got it. I've added this task:\n  {task}");
    let len = tasks.push(task);
    ui.set_next_output(&format!("{message}\n{}", count_line(len)));
    Ok(())
}

fn count_line(len: usize) -> String {
    let noun = if len == 1 { "task" } else { "tasks" };
    format!("Now you have {len} {noun} in the list.")
}

fn render_list(tasks: &TaskList) -> String {
    if tasks.is_empty() {
        return "Your list is empty!".to_string();
    }

    let mut output = String::from("Here are the tasks in your list:");
    for (index, task) in tasks.iter().enumerate() {
        let _ = write!(output, "\n{}. {task}", index + 1);
    }
    output
}

fn render_matches(tasks: &TaskList, keyword: &str) -> String {
    let matches = tasks.find(keyword);
    if matches.is_empty() {
        return "No matching tasks found.".to_string();
    }

    let mut output = String::from("Here are the matching tasks in your list:");
    for (position, task) in matches {
        let _ = write!(output, "\n{position}. {task}");
    }
    output
}
