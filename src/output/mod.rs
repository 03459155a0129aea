//! Output sinks for catbot.
//!
//! Commands never print. They hand human-readable text to a [`Ui`], which
//! decides where it goes and how it is styled.

mod console;

pub use console::ConsoleUi;

use crate::error::CatbotError;

/// Receives the responses produced by executing commands.
pub trait Ui {
    /// Deliver one response (possibly several lines).
    fn set_next_output(&mut self, text: &str);

    /// Deliver a recoverable error.
    fn report_error(&mut self, error: &CatbotError) {
        self.set_next_output(&error.to_string());
    }
}

/// A sink that keeps every response in memory.
///
/// Used while replaying the stored command log, and in tests.
#[derive(Debug, Default, Clone)]
pub struct BufferedUi {
    outputs: Vec<String>,
}

impl BufferedUi {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            outputs: Vec::new(),
        }
    }

    /// All responses received so far, oldest first.
    #[must_use]
    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    /// The most recent response.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.outputs.last().map(String::as_str)
    }
}

impl Ui for BufferedUi {
    fn set_next_output(&mut self, text: &str) {
        self.outputs.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffered_ui_collects_in_order() {
        let mut ui = BufferedUi::new();
        ui.set_next_output("one");
        ui.set_next_output("two");
        assert_eq!(ui.outputs(), ["one", "two"]);
        assert_eq!(ui.last(), Some("two"));
    }

    #[test]
    fn test_default_error_report_uses_message() {
        let mut ui = BufferedUi::new();
        ui.report_error(&CatbotError::malformed("Try: todo <description>"));
        assert_eq!(ui.last(), Some("That's the wrong format! Try: todo <description>"));
    }
}
