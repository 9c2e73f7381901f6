use tracing::debug;

use crate::core::{
    classify::{TextClass, TextClassifier},
    data::{FormControlBinding, IdText, NameIndex, TextTarget, TranslationRecord},
};
use crate::error::Result;
use crate::store::Store;

/// Counts from storing one form's captured bindings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureStats {
    /// Bindings written to the store.
    pub bound: usize,
    /// Of those, bindings to a literal id.
    pub static_ids: usize,
    /// Of those, bindings to the dynamic sentinel.
    pub dynamic: usize,
    /// Existing `DoNotTranslate` bindings left in place.
    pub kept: usize,
    /// Source-language records created for new static ids.
    pub seeded: usize,
}

/// Bind every indexed entry of a form to a static id or the dynamic
/// sentinel, sorted by control path.
pub fn capture_bindings<H: TextTarget>(
    owner: &str,
    index: &NameIndex<H>,
    classifier: &TextClassifier,
) -> Vec<FormControlBinding> {
    let mut bindings: Vec<FormControlBinding> = index
        .iter()
        .map(|(path, handle)| {
            let id_text = match classifier.classify(handle.text()) {
                TextClass::Static(id) => IdText::Literal(id),
                TextClass::Dynamic => IdText::Dynamic,
            };
            FormControlBinding::new(owner, path.as_str(), id_text)
        })
        .collect();
    bindings.sort_by(|a, b| a.control_path.cmp(&b.control_path));
    bindings
}

/// Persist captured bindings.
///
/// Controls already marked `DoNotTranslate` keep that marking. Every new
/// static id also gets a `(id, source_language, id)` record unless one
/// exists, so exported source bundles list it.
///
/// A store failure aborts the pass. Bindings written before it stay.
pub fn store_capture(
    store: &Store,
    bindings: &[FormControlBinding],
    source_language: &str,
) -> Result<CaptureStats> {
    let mut stats = CaptureStats::default();

    for binding in bindings {
        let existing = store.binding(&binding.owner, &binding.control_path)?;
        if existing.is_some_and(|b| b.id_text == IdText::DoNotTranslate) {
            debug!(control = %binding.control_path, "keeping DoNotTranslate binding");
            stats.kept += 1;
            continue;
        }

        store.put_binding(binding)?;
        stats.bound += 1;

        match &binding.id_text {
            IdText::Literal(id) => {
                stats.static_ids += 1;
                let seed = TranslationRecord::new(id.as_str(), source_language, id.as_str());
                if store.insert_if_absent(&seed)? {
                    stats.seeded += 1;
                }
            }
            IdText::Dynamic => stats.dynamic += 1,
            IdText::DoNotTranslate => {}
        }
    }

    Ok(stats)
}
