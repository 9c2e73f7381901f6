use tracing::debug;

use crate::core::{
    data::{IdText, NameIndex, TextTarget},
    resolve::{Resolution, resolve},
};
use crate::error::Result;
use crate::store::Store;

/// Counts from applying one form's translations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyStats {
    /// Controls whose text was replaced by a translation.
    pub translated: usize,
    /// Controls resolved but with no translation into the target language.
    pub untranslated: usize,
    /// Bindings with no matching control.
    pub unresolved: usize,
    /// Bindings matching several controls; left alone.
    pub ambiguous: usize,
    /// `DoNotTranslate` bindings.
    pub skipped: usize,
}

/// Translate the controls of `owner` in place.
///
/// Each stored binding is resolved against `index`. Literal ids are looked
/// up forward; dynamic bindings translate the control's current text in
/// either direction. Missing translations leave the text as it was.
pub fn apply_translations<H: TextTarget>(
    owner: &str,
    index: &mut NameIndex<H>,
    store: &Store,
    language: &str,
) -> Result<ApplyStats> {
    let mut stats = ApplyStats::default();

    for binding in store.bindings(owner)? {
        if binding.id_text == IdText::DoNotTranslate {
            stats.skipped += 1;
            continue;
        }

        let path = match resolve(&binding.control_path, index) {
            Resolution::Exact(path) => path.to_string(),
            Resolution::Fuzzy(path) => {
                debug!(key = %binding.control_path, path, "resolved through hierarchy drift");
                path.to_string()
            }
            Resolution::NotFound => {
                debug!(key = %binding.control_path, "no matching control");
                stats.unresolved += 1;
                continue;
            }
            Resolution::Ambiguous(candidates) => {
                debug!(
                    key = %binding.control_path,
                    candidates = candidates.len(),
                    "ambiguous control match"
                );
                stats.ambiguous += 1;
                continue;
            }
        };
        let Some(handle) = index.get_mut(&path) else {
            stats.unresolved += 1;
            continue;
        };

        let translation = match &binding.id_text {
            IdText::Literal(id) => store.get(id, language)?,
            IdText::Dynamic => {
                let current = handle.text();
                let translated = store.translate(current, language)?;
                (translated != current).then_some(translated)
            }
            IdText::DoNotTranslate => None,
        };

        match translation {
            Some(text) => {
                handle.set_text(text);
                stats.translated += 1;
            }
            None => stats.untranslated += 1,
        }
    }

    Ok(stats)
}
