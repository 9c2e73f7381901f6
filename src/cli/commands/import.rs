use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use super::super::{
    args::ImportCommand,
    exit_status::ExitStatus,
    report::{print_success, print_warning},
};
use super::helper::{CommandContext, plural};
use crate::store::bundle::{Bundle, import_bundle, language_from_path};

pub fn import(cmd: ImportCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;
    let files = expand_patterns(&cmd.patterns)?;
    if files.is_empty() {
        print_warning("no bundle files matched");
        return Ok(ExitStatus::Failure);
    }

    let store = ctx.open_store()?;
    for file in &files {
        let language = match &cmd.language {
            Some(language) => language.clone(),
            None => language_from_path(file).with_context(|| {
                format!("Cannot infer a language from {}", file.display())
            })?,
        };
        let bundle = Bundle::read(file)?;
        let summary = import_bundle(&store, &language, &bundle)?;
        if summary.skipped > 0 {
            debug!(file = %file.display(), skipped = summary.skipped, "empty translations skipped");
        }
        print_success(&format!(
            "Imported {} ({}) from {}",
            plural(summary.imported, "translation"),
            language,
            file.display()
        ));
    }
    store.flush()?;

    Ok(ExitStatus::Success)
}

/// Expand glob patterns; a pattern without glob characters is taken as a
/// literal path.
fn expand_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let mut matched = false;
        for entry in glob::glob(pattern).with_context(|| format!("Invalid glob: {}", pattern))? {
            match entry {
                Ok(path) if path.is_file() => {
                    matched = true;
                    files.push(path);
                }
                Ok(_) => {}
                Err(err) => print_warning(&err.to_string()),
            }
        }
        if !matched && !pattern.contains(['*', '?', '[']) {
            files.push(PathBuf::from(pattern));
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}
