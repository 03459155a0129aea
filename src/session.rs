//! A running session: one task list, one store, one line at a time.

use log::{debug, info, warn};

use crate::command::Command;
use crate::core::{DateResolver, NaturalResolver};
use crate::error::Result;
use crate::output::{BufferedUi, Ui};
use crate::parser::{adds_task, parse_with};
use crate::storage::Storage;
use crate::tasks::{TaskList, TaskRef};

/// The line written after a done task to restore its state.
const REMARK: Command = Command::Mark {
    target: TaskRef::Last,
    done: true,
};

/// Owns the task list and keeps the store in sync with it.
///
/// Every mutating command is followed by a full rewrite of the store. Reads,
/// failed commands and replays never write.
pub struct Session<S: Storage> {
    tasks: TaskList,
    storage: S,
    resolver: Box<dyn DateResolver>,
}

impl<S: Storage> Session<S> {
    /// A session with an empty list. Nothing is read from `storage`.
    pub fn new(storage: S) -> Self {
        Self {
            tasks: TaskList::new(),
            storage,
            resolver: Box::new(NaturalResolver::new()),
        }
    }

    /// A session whose list is rebuilt from whatever `storage` holds.
    ///
    /// # Errors
    ///
    /// Returns `CatbotError::Io` if the store cannot be read.
    pub fn load(storage: S) -> Result<Self> {
        let mut session = Self::new(storage);
        let skipped = session.replay()?;
        info!(
            "loaded {} task(s), skipped {skipped} stored line(s)",
            session.tasks.len()
        );
        Ok(session)
    }

    /// Use a different natural-language resolver for new input.
    #[must_use]
    pub fn with_resolver(mut self, resolver: impl DateResolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    #[must_use]
    pub const fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// Feed every stored line back through the parser and executor, exactly
    /// as if it had been typed, discarding the responses.
    ///
    /// Lines that fail are logged and skipped. A `mark last` that follows a
    /// skipped task line belongs to that task, so it is skipped too. Returns
    /// how many lines were skipped.
    ///
    /// # Errors
    ///
    /// Returns `CatbotError::Io` if the store cannot be read.
    pub fn replay(&mut self) -> Result<usize> {
        let lines = self.storage.read_all()?;
        let mut sink = BufferedUi::new();
        let mut skipped = 0;
        // The last task line failed, so no task stands for it
        let mut orphaned = false;

        for (number, line) in lines.iter().enumerate() {
            let number = number + 1;
            if line.trim().is_empty() {
                continue;
            }

            let command = match parse_with(line, self.resolver.as_ref()) {
                Ok(command) => command,
                Err(e) => {
                    warn!("skipping stored line {number}: {line:?} ({e})");
                    skipped += 1;
                    orphaned |= adds_task(line);
                    continue;
                },
            };

            if orphaned && command == REMARK {
                warn!("skipping stored line {number}: {line:?} (its task was not restored)");
                skipped += 1;
                orphaned = false;
                continue;
            }

            match command.execute(&mut self.tasks, &mut sink) {
                Ok(()) => {
                    if adds_task(line) {
                        orphaned = false;
                    }
                },
                Err(e) => {
                    warn!("skipping stored line {number}: {line:?} ({e})");
                    skipped += 1;
                },
            }
        }

        Ok(skipped)
    }

    /// Parse and execute one line, writing the list back if it changed.
    ///
    /// # Errors
    ///
    /// Returns any error, recoverable or not. The list is unchanged when a
    /// recoverable error is returned.
    pub fn execute_line(&mut self, line: &str, ui: &mut dyn Ui) -> Result<()> {
        let command = parse_with(line, self.resolver.as_ref())?;
        command.execute(&mut self.tasks, ui)?;

        if command.is_mutating() {
            self.save()?;
        }
        Ok(())
    }

    /// Like [`Session::execute_line`], but recoverable errors are reported to
    /// `ui` instead of returned.
    ///
    /// Returns whether the command succeeded.
    ///
    /// # Errors
    ///
    /// Returns errors the session cannot recover from, such as a failed write.
    pub fn handle_line(&mut self, line: &str, ui: &mut dyn Ui) -> Result<bool> {
        match self.execute_line(line, ui) {
            Ok(()) => Ok(true),
            Err(e) if e.is_recoverable() => {
                debug!("command failed: {e}");
                ui.report_error(&e);
                Ok(false)
            },
            Err(e) => Err(e),
        }
    }

    fn save(&mut self) -> Result<()> {
        let lines = self.tasks.to_command_lines();
        self.storage.write_all(&lines)
    }
}
