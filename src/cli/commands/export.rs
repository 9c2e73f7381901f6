use std::path::Path;

use anyhow::Result;

use super::super::{args::ExportCommand, exit_status::ExitStatus, report::print_success};
use super::helper::{CommandContext, plural};
use crate::store::bundle::{bundle_path, export_bundle};

pub fn export(cmd: ExportCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;
    let store = ctx.open_store()?;
    let bundle = export_bundle(&store, &cmd.language)?;

    let path = match cmd.output {
        Some(path) if path == Path::new("-") => {
            print!("{}", bundle.to_json());
            return Ok(ExitStatus::Success);
        }
        Some(path) => path,
        None => bundle_path(&ctx.bundles_root(), &cmd.language),
    };

    bundle.write(&path)?;
    print_success(&format!(
        "Exported {} ({}) to {}",
        plural(bundle.len(), "translation"),
        cmd.language,
        path.display()
    ));

    Ok(ExitStatus::Success)
}
