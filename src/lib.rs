//! catbot - a chatty personal task tracker
//!
//! Tasks are created and managed through one-line commands such as
//! `todo read book` or `deadline submit report /by friday 5pm`. The list is
//! persisted as the very commands that rebuild it, replayed on startup.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod command;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod parser;
pub mod session;
pub mod storage;
pub mod tasks;

pub use cli::args::Cli;
pub use command::Command;
pub use error::CatbotError;
pub use session::Session;
pub use tasks::{Task, TaskKind, TaskList, TaskRef};
