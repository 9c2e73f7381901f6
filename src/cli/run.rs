//! Dispatch parsed arguments to the matching command handler.
use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{
        apply::apply, capture::capture, classify::classify, export::export, ignore::ignore,
        import::import, init::init, translate::translate,
    },
    exit_status::ExitStatus,
};

pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Init) => init(),
        Some(Command::Translate(cmd)) => translate(cmd),
        Some(Command::Import(cmd)) => import(cmd),
        Some(Command::Export(cmd)) => export(cmd),
        Some(Command::Classify(cmd)) => classify(cmd),
        Some(Command::Ignore(cmd)) => ignore(cmd),
        Some(Command::Capture(cmd)) => capture(cmd),
        Some(Command::Apply(cmd)) => apply(cmd),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
