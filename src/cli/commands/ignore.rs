use std::io;

use anyhow::Result;
use colored::Colorize;

use super::super::{
    args::IgnoreCommand,
    exit_status::ExitStatus,
    report::{print_ignore_preview_to, print_success},
};
use super::helper::{CommandContext, plural};
use crate::actions::apply_ignore_rules;

pub fn ignore(cmd: IgnoreCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;
    let rules = ctx.ignore_rules(cmd.rules.as_deref())?;
    let store = ctx.open_store()?;
    let outcome = apply_ignore_rules(&store, &rules, cmd.apply)?;

    if outcome.pending.is_empty() {
        print_success(&format!(
            "No bindings to ignore ({} already ignored)",
            outcome.already_ignored
        ));
        return Ok(ExitStatus::Success);
    }

    if !cmd.apply {
        print_ignore_preview_to(&outcome.pending, &mut io::stdout().lock());
        println!(
            "\n{} {} would be marked DoNotTranslate. Run with {} to update the store.",
            "hint:".bold().cyan(),
            plural(outcome.pending.len(), "binding"),
            "--apply".bold()
        );
        return Ok(ExitStatus::Success);
    }

    store.flush()?;
    print_success(&format!(
        "Marked {} DoNotTranslate",
        plural(outcome.applied, "binding")
    ));
    Ok(ExitStatus::Success)
}
