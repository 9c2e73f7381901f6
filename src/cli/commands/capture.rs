use anyhow::Result;

use super::super::{args::CaptureCommand, exit_status::ExitStatus, report::print_success};
use super::helper::{CommandContext, plural};
use crate::actions::{capture_bindings, store_capture};
use crate::core::data::FormSnapshot;

pub fn capture(cmd: CaptureCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;
    let classifier = ctx.config().classifier()?;
    let snapshot = FormSnapshot::load(&cmd.snapshot)?;
    let index = snapshot.to_index();

    let bindings = capture_bindings(&snapshot.form, &index, &classifier);
    let store = ctx.open_store()?;
    let stats = store_capture(&store, &bindings, &ctx.config().source_language)?;
    store.flush()?;

    print_success(&format!(
        "Captured {} for {} ({} static, {} dynamic, {} kept DoNotTranslate, {} new ids)",
        plural(stats.bound + stats.kept, "control"),
        snapshot.form,
        stats.static_ids,
        stats.dynamic,
        stats.kept,
        stats.seeded
    ));
    Ok(ExitStatus::Success)
}
