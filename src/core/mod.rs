//! Core abstractions for catbot.
//!
//! This module provides the natural-language resolver used by the command
//! grammar: date/time parsing, recurrence parsing, and the `DateResolver`
//! trait that isolates both from the parser.

mod datetime;
mod recurrence;
mod resolver;

pub use recurrence::{format_interval, round_to_seconds};
#[cfg(test)]
pub use resolver::MockDateResolver;
pub use resolver::{DateResolver, NaturalResolver, ResolveError};
