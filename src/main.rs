use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use catbot::cli::{self, args::Cli};

fn main() {
    env_logger::init();

    match run() {
        Ok(true) => {},
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{}: {e:#}", "error".red().bold());
            std::process::exit(1);
        },
    }
}

fn run() -> Result<bool> {
    let cli = Cli::parse();
    cli::run(&cli).context("catbot stopped")
}
