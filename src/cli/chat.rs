//! Driving a session from a terminal or from argument lines.

use std::io::{BufRead, Write};

use log::debug;

use crate::error::Result;
use crate::output::ConsoleUi;
use crate::session::Session;
use crate::storage::Storage;

/// Typed on its own, ends the conversation.
const FAREWELL_WORD: &str = "bye";

fn is_farewell(line: &str) -> bool {
    line.eq_ignore_ascii_case(FAREWELL_WORD)
}

/// Chat until the user says `bye` or input runs out.
///
/// Blank lines are ignored.
///
/// # Errors
///
/// Returns an error if input cannot be read or the store cannot be written.
pub fn chat<S, R, W>(session: &mut Session<S>, input: R, ui: &mut ConsoleUi<W>) -> Result<()>
where
    S: Storage,
    R: BufRead,
    W: Write,
{
    ui.greet();

    for line in input.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }
        if is_farewell(line) {
            ui.farewell();
            return Ok(());
        }

        session.handle_line(line, ui)?;
    }

    debug!("input closed without a farewell");
    Ok(())
}

/// Run each line once, in order, without greeting.
///
/// Returns whether every line succeeded. A `bye` line stops early.
///
/// # Errors
///
/// Returns an error if the store cannot be written.
pub fn run_lines<S, W>(session: &mut Session<S>, lines: &[String], ui: &mut ConsoleUi<W>) -> Result<bool>
where
    S: Storage,
    W: Write,
{
    let mut all_ok = true;

    for line in lines {
        let line = line.trim();
        if is_farewell(line) {
            break;
        }
        all_ok &= session.handle_line(line, ui)?;
    }

    Ok(all_ok)
}
