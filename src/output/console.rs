use std::io::{self, Write};

use colored::Colorize;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::Ui;
use crate::error::CatbotError;
use crate::tasks::DONE_ICON;

/// The status slot of a rendered task, optionally behind its list position.
static DONE_SLOT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?m)^(\s*(?:\d+\. )?\[[A-Z]\]\[){DONE_ICON}\]"))
        .unwrap_or_else(|e| panic!("Invalid status regex: {e}"))
});

/// Writes responses to a terminal (stdout by default), optionally colored.
pub struct ConsoleUi<W = io::Stdout> {
    out: W,
    color: bool,
}

impl ConsoleUi {
    /// A console sink on stdout.
    #[must_use]
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> ConsoleUi<W> {
    pub const fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    /// Print the greeting shown when an interactive session starts.
    pub fn greet(&mut self) {
        let name = if self.color {
            "catbot".cyan().bold().to_string()
        } else {
            "catbot".to_string()
        };
        self.write(&format!("Hello! I'm {name}.\nWhat can I do for you?"));
    }

    /// Print the farewell shown on `bye`.
    pub fn farewell(&mut self) {
        self.write("Bye. Hope to see you again soon!");
    }

    /// Consume the sink and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write(&mut self, text: &str) {
        // A closed stdout leaves nobody to tell.
        let _ = writeln!(self.out, "{text}");
        let _ = self.out.flush();
    }

    fn style(&self, text: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        DONE_SLOT
            .replace_all(text, |caps: &Captures<'_>| {
                format!("{}{}]", &caps[1], DONE_ICON.to_string().green())
            })
            .into_owned()
    }
}

impl<W: Write> Ui for ConsoleUi<W> {
    fn set_next_output(&mut self, text: &str) {
        let styled = self.style(text);
        self.write(&styled);
    }

    fn report_error(&mut self, error: &CatbotError) {
        let message = if self.color {
            error.to_string().red().to_string()
        } else {
            error.to_string()
        };
        self.write(&message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> ConsoleUi<Vec<u8>> {
        ConsoleUi::new(Vec::new(), false)
    }

    fn written(ui: ConsoleUi<Vec<u8>>) -> String {
        String::from_utf8(ui.into_inner()).unwrap()
    }

    #[test]
    fn test_plain_output_is_verbatim() {
        let mut ui = plain();
        ui.set_next_output("1. [T][✓] read book");
        assert_eq!(written(ui), "1. [T][✓] read book\n");
    }

    #[test]
    fn test_plain_error() {
        let mut ui = plain();
        ui.report_error(&CatbotError::IndexOutOfRange { position: 2, len: 0 });
        assert_eq!(written(ui), "There's no task 2, the list only has 0 task(s)\n");
    }

    #[test]
    fn test_only_status_slots_are_colored() {
        colored::control::set_override(true);
        let ui = ConsoleUi::new(Vec::new(), true);
        let green = DONE_ICON.to_string().green().to_string();

        assert_eq!(
            ui.style("Here are the tasks in your list:\n1. [T][✓] tick ✓\n2. [D][ ] b"),
            format!("Here are the tasks in your list:\n1. [T][{green}] tick ✓\n2. [D][ ] b")
        );
        assert_eq!(
            ui.style("Nice! I've marked this task as done:\n  [E][✓] party"),
            format!("Nice! I've marked this task as done:\n  [E][{green}] party")
        );
        assert_eq!(ui.style("all good ✓ [✓]"), "all good ✓ [✓]");
    }

    #[test]
    fn test_greeting_and_farewell() {
        let mut ui = plain();
        ui.greet();
        ui.farewell();
        let text = written(ui);
        assert!(text.starts_with("Hello! I'm catbot."));
        assert!(text.ends_with("Bye. Hope to see you again soon!\n"));
    }
}
