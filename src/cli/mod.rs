//! Command-line interface for glossa.
//!
//! Parses arguments, sets up logging, and dispatches to one handler per
//! subcommand in [`commands`].

use std::io::{self, IsTerminal};

use anyhow::Result;
use tracing::Level;

pub mod args;
pub mod commands;
pub mod exit_status;
pub mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    run::run(args)
}

/// Log to stderr: debug with `--verbose`, warnings otherwise.
pub fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let ansi = std::env::var_os("NO_COLOR").is_none() && io::stderr().is_terminal();
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .with_ansi(ansi)
        .with_writer(io::stderr)
        .try_init();
}
