//! Command-line front end.

pub mod args;
mod chat;

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use log::debug;

pub use chat::{chat, run_lines};

use crate::cli::args::Cli;
use crate::config::{Config, Paths};
use crate::error::Result;
use crate::output::ConsoleUi;
use crate::session::Session;
use crate::storage::FileStorage;

/// Everything resolved from flags, environment and config before a session
/// starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub tasks_file: PathBuf,
    pub color: bool,
}

impl Settings {
    /// Flags win over the config file, which wins over defaults.
    ///
    /// # Errors
    ///
    /// Returns `CatbotError::Config` if the config file cannot be parsed.
    pub fn resolve(cli: &Cli, paths: &Paths, is_terminal: bool) -> Result<Self> {
        let config_path = cli.config.as_deref().unwrap_or(&paths.config_file);
        let config = Config::load_from_path(config_path)?;

        let tasks_file = cli
            .data_file
            .clone()
            .unwrap_or_else(|| config.tasks_file(paths));
        let color = !cli.no_color && config.general.color.enabled(is_terminal);

        Ok(Self { tasks_file, color })
    }
}

/// Run catbot as described by `cli`. Returns whether every command succeeded.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the task file cannot be
/// read or written.
pub fn run(cli: &Cli) -> Result<bool> {
    let paths = Paths::default();
    let settings = Settings::resolve(cli, &paths, io::stdout().is_terminal())?;
    debug!("using task file {}", settings.tasks_file.display());

    colored::control::set_override(settings.color);

    let mut session = Session::load(FileStorage::new(settings.tasks_file))?;
    let mut ui = ConsoleUi::stdout(settings.color);

    if cli.lines.is_empty() {
        chat(&mut session, io::stdin().lock(), &mut ui)?;
        Ok(true)
    } else {
        run_lines(&mut session, &cli.lines, &mut ui)
    }
}
