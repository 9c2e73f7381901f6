use anyhow::Result;

use super::super::{args::TranslateCommand, exit_status::ExitStatus};
use super::helper::CommandContext;

/// Print `text` in the target language, or unchanged when the store knows
/// no translation for it.
pub fn translate(cmd: TranslateCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;
    let store = ctx.open_store()?;
    println!("{}", store.translate(&cmd.text, &cmd.language)?);
    Ok(ExitStatus::Success)
}
