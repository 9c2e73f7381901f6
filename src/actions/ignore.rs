use tracing::warn;

use crate::core::{
    data::{FormControlBinding, IdText},
    ignore::{Eligibility, IgnoreRuleSet},
};
use crate::error::{Error, Result};
use crate::store::Store;

/// Result of running ignore rules over the stored bindings.
#[derive(Debug, Clone, Default)]
pub struct IgnoreOutcome {
    /// Bindings the rules mark as ignored that were not `DoNotTranslate` yet,
    /// as they were before the pass.
    pub pending: Vec<FormControlBinding>,
    /// Bindings the rules mark as ignored that already were `DoNotTranslate`.
    pub already_ignored: usize,
    /// Bindings rewritten to `DoNotTranslate`. Zero in a dry run.
    pub applied: usize,
}

/// Mark every binding whose control path the rules ignore as
/// `DoNotTranslate`.
///
/// With `apply` false nothing is written and `pending` lists the changes.
/// When applying, see [`mark_ignored`].
pub fn apply_ignore_rules(store: &Store, rules: &IgnoreRuleSet, apply: bool) -> Result<IgnoreOutcome> {
    let mut outcome = IgnoreOutcome::default();

    for binding in store.all_bindings()? {
        if rules.classify(&binding.control_path) != Eligibility::Ignore {
            continue;
        }
        if binding.id_text == IdText::DoNotTranslate {
            outcome.already_ignored += 1;
        } else {
            outcome.pending.push(binding);
        }
    }

    if !apply {
        return Ok(outcome);
    }

    outcome.applied = mark_ignored(store, &outcome.pending)?;
    Ok(outcome)
}

/// Rewrite `pending` bindings to `DoNotTranslate` and return how many were
/// rewritten.
///
/// A store failure aborts the pass. A binding removed since `pending` was
/// collected is skipped, and the pass then fails with
/// [`Error::BatchMismatch`] instead of silently under-applying.
pub fn mark_ignored(store: &Store, pending: &[FormControlBinding]) -> Result<usize> {
    let mut applied = 0;
    for binding in pending {
        if store.set_id_text(&binding.owner, &binding.control_path, &IdText::DoNotTranslate)? {
            applied += 1;
        } else {
            warn!(control = %binding.control_path, "binding disappeared before update");
        }
    }

    if applied != pending.len() {
        return Err(Error::BatchMismatch {
            operation: "ignore",
            expected: pending.len(),
            applied,
        });
    }
    Ok(applied)
}
