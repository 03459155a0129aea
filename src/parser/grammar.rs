//! The command grammar.
//!
//! Turns one line such as `deadline submit report /by friday 5pm` into a
//! [`Command`]. The first whitespace-delimited word selects the command
//! (case-insensitive); the rest is split on `/`-delimiters.

use chrono::{Duration, NaiveDateTime};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::command::Command;
use crate::core::{round_to_seconds, DateResolver, NaturalResolver};
use crate::error::{CatbotError, Result};
use crate::tasks::TaskRef;

/// Keywords whose commands append a task.
const ADD_KEYWORDS: [&str; 4] = ["todo", "deadline", "event", "recurring"];

const DATE_HINT: &str = "Dates look like 2024-12-01T10:00 or \"next friday 3pm\"";
const INTERVAL_HINT: &str = "Intervals look like \"day\", \"2 weeks\" or \"other monday\"";

static DEADLINE_DELIMITER: Lazy<Regex> =
    Lazy::new(|| Regex::new("/by").unwrap_or_else(|e| panic!("Invalid deadline regex: {e}")));

static EVENT_DELIMITERS: Lazy<Regex> =
    Lazy::new(|| Regex::new("/from|/to").unwrap_or_else(|e| panic!("Invalid event regex: {e}")));

static RECURRING_DELIMITERS: Lazy<Regex> = Lazy::new(|| {
    Regex::new("/on|/at|/every").unwrap_or_else(|e| panic!("Invalid recurring regex: {e}"))
});

/// Parse one line with the built-in natural-language resolver.
///
/// # Examples
///
/// ```
/// use catbot::command::Command;
/// use catbot::parser::parse;
/// use catbot::tasks::TaskRef;
///
/// let command = parse("mark 2").unwrap();
/// assert_eq!(command, Command::Mark { target: TaskRef::Index(1), done: true });
///
/// assert!(parse("deadline buy milk").is_err());
/// ```
///
/// # Errors
///
/// Returns `CatbotError::MalformedCommand` for any grammar violation and
/// `CatbotError::InvalidInterval` for a recurrence that is not positive.
pub fn parse(line: &str) -> Result<Command> {
    parse_with(line, &NaturalResolver::new())
}

/// Parse one line, resolving dates and intervals through `resolver`.
///
/// # Errors
///
/// Returns `CatbotError::MalformedCommand` for any grammar violation and
/// `CatbotError::InvalidInterval` for a recurrence that is not positive.
pub fn parse_with(line: &str, resolver: &dyn DateResolver) -> Result<Command> {
    let command = parse_line(line.trim(), resolver)?;
    debug!("parsed {line:?} as {command:?}");
    Ok(command)
}

/// Whether `line` is meant to add a task, judged by its keyword alone.
///
/// Holds even for lines that fail to parse, so a caller can tell a broken
/// task line from any other bad input.
#[must_use]
pub fn adds_task(line: &str) -> bool {
    line.split_whitespace()
        .next()
        .is_some_and(|keyword| ADD_KEYWORDS.contains(&keyword.to_lowercase().as_str()))
}

fn parse_line(line: &str, resolver: &dyn DateResolver) -> Result<Command> {
    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };

    match keyword.to_lowercase().as_str() {
        "todo" => Ok(Command::AddTodo {
            description: description(rest, "todo <description>")?,
        }),
        "deadline" => parse_deadline(rest, resolver),
        "event" => parse_event(rest, resolver),
        "recurring" => parse_recurring(rest, resolver),
        "list" => Ok(Command::List),
        "mark" => Ok(Command::Mark {
            target: task_ref(rest, "mark")?,
            done: true,
        }),
        "unmark" => Ok(Command::Mark {
            target: task_ref(rest, "unmark")?,
            done: false,
        }),
        "delete" => Ok(Command::Delete {
            target: task_ref(rest, "delete")?,
        }),
        "find" => Ok(Command::Find {
            keyword: rest.to_string(),
        }),
        "echo" => {
            if rest.is_empty() {
                return Err(usage("echo <message>"));
            }
            Ok(Command::Echo {
                message: rest.to_string(),
            })
        },
        "" => Err(CatbotError::malformed("Say something first!")),
        other => Err(CatbotError::malformed(format!(
            "I don't know what \"{other}\" means."
        ))),
    }
}

fn parse_deadline(rest: &str, resolver: &dyn DateResolver) -> Result<Command> {
    const USAGE: &str = "deadline <description> /by <when>";

    let parts = split_exact(rest, &DEADLINE_DELIMITER, 2, USAGE)?;
    Ok(Command::AddDeadline {
        description: description(parts[0], USAGE)?,
        due_at: resolve_when(parts[1], "due", resolver)?,
    })
}

fn parse_event(rest: &str, resolver: &dyn DateResolver) -> Result<Command> {
    const USAGE: &str = "event <description> /from <start> /to <end>";

    let parts = split_exact(rest, &EVENT_DELIMITERS, 3, USAGE)?;
    let description = description(parts[0], USAGE)?;
    let starts_at = resolve_when(parts[1], "start", resolver)?;
    let ends_at = resolve_when(parts[2], "end", resolver)?;

    if starts_at > ends_at {
        return Err(CatbotError::malformed(
            "An event can't end before it starts.",
        ));
    }

    Ok(Command::AddEvent {
        description,
        starts_at,
        ends_at,
    })
}

fn parse_recurring(rest: &str, resolver: &dyn DateResolver) -> Result<Command> {
    const USAGE: &str = "recurring <description> /on <when> /every <interval>";

    let parts = split_exact(rest, &RECURRING_DELIMITERS, 3, USAGE)?;
    let description = description(parts[0], USAGE)?;
    let anchor_at = resolve_when(parts[1], "first", resolver)?;
    let interval = resolve_interval(parts[2], resolver)?;

    Ok(Command::AddRecurring {
        description,
        anchor_at,
        interval,
    })
}

/// Split on `delimiter` into at most `count` trimmed parts, requiring exactly
/// `count`. Delimiters beyond the last split stay inside the final part.
fn split_exact<'a>(
    rest: &'a str,
    delimiter: &Regex,
    count: usize,
    usage_text: &str,
) -> Result<Vec<&'a str>> {
    let parts: Vec<&str> = delimiter.splitn(rest, count).map(str::trim).collect();
    if parts.len() == count {
        Ok(parts)
    } else {
        Err(usage(usage_text))
    }
}

fn description(text: &str, usage_text: &str) -> Result<String> {
    if text.is_empty() {
        return Err(CatbotError::malformed(format!(
            "The description can't be empty. Try: {usage_text}"
        )));
    }
    Ok(text.to_string())
}

fn resolve_when(text: &str, which: &str, resolver: &dyn DateResolver) -> Result<NaiveDateTime> {
    if text.is_empty() {
        return Err(CatbotError::malformed(format!(
            "The {which} time is missing. {DATE_HINT}"
        )));
    }
    resolver
        .resolve_datetime(text)
        .map_err(|e| CatbotError::malformed(format!("{e}. {DATE_HINT}")))
}

fn resolve_interval(text: &str, resolver: &dyn DateResolver) -> Result<Duration> {
    if text.is_empty() {
        return Err(CatbotError::malformed(format!(
            "How often should it repeat? {INTERVAL_HINT}"
        )));
    }

    let phrase = format!("every {text}");
    let interval = resolver
        .resolve_recurrence(&phrase)
        .map_err(|e| CatbotError::malformed(format!("{e}. {INTERVAL_HINT}")))?;

    let interval = round_to_seconds(interval);
    if interval <= Duration::zero() {
        return Err(CatbotError::InvalidInterval(phrase));
    }
    Ok(interval)
}

/// Parse the task number of `mark`, `unmark` and `delete`.
///
/// Only plain digits are accepted (no sign, no trailing text), plus `last`.
fn task_ref(text: &str, keyword: &str) -> Result<TaskRef> {
    if text.is_empty() {
        return Err(CatbotError::malformed(format!(
            "Which task? Try: {keyword} <number>"
        )));
    }

    if text.eq_ignore_ascii_case("last") {
        return Ok(TaskRef::Last);
    }

    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(not_a_number(text));
    }

    let position: i64 = text.parse().map_err(|_| not_a_number(text))?;
    Ok(TaskRef::Index(position - 1))
}

fn not_a_number(text: &str) -> CatbotError {
    CatbotError::malformed(format!("\"{text}\" isn't a number!"))
}

fn usage(usage_text: &str) -> CatbotError {
    CatbotError::malformed(format!("Try: {usage_text}"))
}
