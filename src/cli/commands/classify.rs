use anyhow::Result;

use super::super::{args::ClassifyCommand, exit_status::ExitStatus};
use super::helper::CommandContext;

/// Print `<name>: static|ignore` for every name.
pub fn classify(cmd: ClassifyCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;
    let rules = ctx.ignore_rules(cmd.rules.as_deref())?;
    for name in &cmd.names {
        println!("{}: {}", name, rules.classify(name));
    }
    Ok(ExitStatus::Success)
}
