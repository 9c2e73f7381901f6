use std::fs;

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::{args::ApplyCommand, exit_status::ExitStatus, report::SUCCESS_MARK};
use super::helper::{CommandContext, plural};
use crate::actions::apply_translations;
use crate::core::data::FormSnapshot;

/// Translate a snapshot and write it to `--output` or stdout.
///
/// The summary goes to stderr so stdout stays valid JSON.
pub fn apply(cmd: ApplyCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;
    let store = ctx.open_store()?;
    let mut snapshot = FormSnapshot::load(&cmd.snapshot)?;
    let mut index = snapshot.to_index();

    let stats = apply_translations(&snapshot.form, &mut index, &store, &cmd.language)?;
    snapshot.update_from(&index);
    let json = snapshot.to_json()?;

    match &cmd.output {
        Some(path) => fs::write(path, &json)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => print!("{}", json),
    }

    eprintln!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Translated {} into {} ({} untranslated, {} unresolved, {} ambiguous, {} skipped)",
            plural(stats.translated, "text"),
            cmd.language,
            stats.untranslated,
            stats.unresolved,
            stats.ambiguous,
            stats.skipped
        )
        .green()
    );
    Ok(ExitStatus::Success)
}
