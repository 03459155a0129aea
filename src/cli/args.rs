use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "catbot")]
#[command(about = "A chatty personal task tracker driven by one-line commands")]
#[command(long_about = "catbot - a chatty personal task tracker

Run without arguments to chat interactively; say 'bye' to leave.
Pass commands as arguments to run them once and exit.

COMMANDS:
  todo <description>                               Add a plain task
  deadline <description> /by <when>                Add a task with a due date
  event <description> /from <when> /to <when>      Add a task spanning a period
  recurring <description> /on <when> /every <how often>
                                                   Add a task that repeats
  list                                             Show every task
  mark <n> | unmark <n>                            Set a task done or not done
  delete <n>                                       Remove a task
  find <keyword>                                   Show tasks mentioning a keyword
  echo <message>                                   Say something back

  <n> is a 1-based position or 'last'. <when> may be ISO (2024-12-01T10:00)
  or natural ('friday 5pm', 'tomorrow', 'in 2 hours').

QUICK START:
  catbot \"todo read book\" \"deadline submit report /by friday 5pm\" list

Tasks are saved to ~/.catbot/tasks.txt after every change.")]
#[command(version)]
pub struct Cli {
    /// Task file to load and save
    ///
    /// Overrides `storage.tasks_file` from the config file.
    #[arg(long, value_name = "PATH", env = "CATBOT_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Config file to read instead of ~/.catbot/config.yaml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Commands to run, one per argument, instead of chatting
    ///
    /// Each argument is one full command line, so quote it:
    /// catbot "todo read book" list
    #[arg(value_name = "COMMAND")]
    pub lines: Vec<String>,
}
