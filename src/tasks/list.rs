//! The ordered, index-addressed task list.

use std::fmt;

use crate::error::{CatbotError, Result};

use super::Task;

/// A reference to one task in the list, as typed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskRef {
    /// Zero-based index. `mark 1` becomes `Index(0)`, `mark 0` becomes
    /// `Index(-1)`, which never resolves.
    Index(i64),
    /// The most recently added task.
    Last,
}

impl fmt::Display for TaskRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{}", index.saturating_add(1)),
            Self::Last => f.write_str("last"),
        }
    }
}

/// Tasks in insertion order. Positions shown to users are 1-based.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Task at a zero-based index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// Append a task and return the new length.
    pub fn push(&mut self, task: Task) -> usize {
        self.tasks.push(task);
        self.tasks.len()
    }

    /// Turn a [`TaskRef`] into a zero-based index that is in bounds.
    ///
    /// # Errors
    ///
    /// Returns `CatbotError::IndexOutOfRange` if no task sits at that position,
    /// or `CatbotError::NoLastTask` for `last` on an empty list.
    pub fn resolve(&self, target: TaskRef) -> Result<usize> {
        let len = self.tasks.len();
        match target {
            TaskRef::Index(index) => usize::try_from(index)
                .ok()
                .filter(|&i| i < len)
                .ok_or(CatbotError::IndexOutOfRange {
                    position: index.saturating_add(1),
                    len,
                }),
            TaskRef::Last => len.checked_sub(1).ok_or(CatbotError::NoLastTask),
        }
    }

    /// Set the done state of a task and return it.
    ///
    /// # Errors
    ///
    /// Returns `CatbotError::IndexOutOfRange` if the target does not exist; the
    /// list is left unchanged.
    pub fn set_done(&mut self, target: TaskRef, done: bool) -> Result<&Task> {
        let index = self.resolve(target)?;
        let task = &mut self.tasks[index];
        task.set_done(done);
        Ok(task)
    }

    /// Remove a task, shifting later tasks down by one.
    ///
    /// # Errors
    ///
    /// Returns `CatbotError::IndexOutOfRange` if the target does not exist; the
    /// list is left unchanged.
    pub fn remove(&mut self, target: TaskRef) -> Result<Task> {
        let index = self.resolve(target)?;
        Ok(self.tasks.remove(index))
    }

    /// Tasks whose description contains `keyword` (case-sensitive), paired
    /// with their 1-based positions. An empty keyword matches everything.
    #[must_use]
    pub fn find(&self, keyword: &str) -> Vec<(usize, &Task)> {
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.description().contains(keyword))
            .map(|(index, task)| (index + 1, task))
            .collect()
    }

    /// Serialize every task into command lines, in order.
    #[must_use]
    pub fn to_command_lines(&self) -> Vec<String> {
        self.tasks
            .iter()
            .flat_map(|task| {
                task.to_command_string()
                    .lines()
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}

impl FromIterator<Task> for TaskList {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        Self {
            tasks: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TaskList {
        ["read book", "buy milk", "read paper"]
            .into_iter()
            .map(Task::todo)
            .collect()
    }

    fn descriptions(list: &TaskList) -> Vec<&str> {
        list.iter().map(Task::description).collect()
    }

    #[test]
    fn test_push_returns_new_length() {
        let mut list = TaskList::new();
        assert!(list.is_empty());
        assert_eq!(list.push(Task::todo("a")), 1);
        assert_eq!(list.push(Task::todo("b")), 2);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_resolve_bounds() {
        let list = sample();
        assert_eq!(list.resolve(TaskRef::Index(0)).unwrap(), 0);
        assert_eq!(list.resolve(TaskRef::Index(2)).unwrap(), 2);
        assert_eq!(list.resolve(TaskRef::Last).unwrap(), 2);
        assert!(matches!(
            list.resolve(TaskRef::Index(3)),
            Err(CatbotError::IndexOutOfRange { position: 4, len: 3 })
        ));
        assert!(matches!(
            list.resolve(TaskRef::Index(-1)),
            Err(CatbotError::IndexOutOfRange { position: 0, len: 3 })
        ));
    }

    #[test]
    fn test_last_on_empty_list() {
        let list = TaskList::new();
        assert!(matches!(
            list.resolve(TaskRef::Last),
            Err(CatbotError::NoLastTask)
        ));
    }

    #[test]
    fn test_set_done() {
        let mut list = sample();
        let task = list.set_done(TaskRef::Index(1), true).unwrap();
        assert!(task.is_done());
        assert!(list.get(1).unwrap().is_done());
        assert!(!list.get(0).unwrap().is_done());
    }

    #[test]
    fn test_set_done_out_of_range_leaves_list_alone() {
        let mut list = sample();
        let before = list.clone();
        assert!(list.set_done(TaskRef::Index(7), true).is_err());
        assert_eq!(list, before);
    }

    #[test]
    fn test_remove_shifts_later_tasks() {
        let mut list = sample();
        let removed = list.remove(TaskRef::Index(1)).unwrap();
        assert_eq!(removed.description(), "buy milk");
        assert_eq!(descriptions(&list), vec!["read book", "read paper"]);
    }

    #[test]
    fn test_find_keeps_original_positions() {
        let list = sample();
        let found: Vec<(usize, &str)> = list
            .find("read")
            .into_iter()
            .map(|(pos, task)| (pos, task.description()))
            .collect();
        assert_eq!(found, vec![(1, "read book"), (3, "read paper")]);
    }

    #[test]
    fn test_find_is_case_sensitive() {
        let list = sample();
        assert!(list.find("READ").is_empty());
        assert_eq!(list.find("").len(), 3);
    }

    #[test]
    fn test_command_lines_split_remark() {
        let mut list = sample();
        list.set_done(TaskRef::Index(0), true).unwrap();
        assert_eq!(
            list.to_command_lines(),
            vec!["todo read book", "mark last", "todo buy milk", "todo read paper"]
        );
    }

    #[test]
    fn test_task_ref_display() {
        assert_eq!(TaskRef::Index(0).to_string(), "1");
        assert_eq!(TaskRef::Last.to_string(), "last");
    }
}
