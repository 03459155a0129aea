//! Command grammar parsing.
//!
//! This module turns single input lines like:
//! - "todo read book"
//! - "deadline submit report /by friday 5pm"
//! - "recurring water plants /on tomorrow 8am /every 3 days"
//!
//! into typed [`Command`](crate::command::Command) values. Parsing is pure:
//! nothing is executed and no state changes.

mod grammar;

pub use grammar::{adds_task, parse, parse_with};
