//! Persistent translation store.
//!
//! Two sled trees mirror the two tables the capture tooling writes:
//!
//! - `translations`: `(id_text, language_code) -> translation`
//! - `form_controls`: `(form_name, control_name) -> id_text`
//!
//! Keys are bincode-encoded tuples, which gives each tree a composite
//! primary key and lets `(form_name, ..)` be scanned by prefix. Lookups are
//! exact key or value comparisons; nothing is ever spliced into a query.
//!
//! ## Module Structure
//!
//! - `bundle`: JSON import/export of one language's translations

pub mod bundle;

use std::{collections::BTreeSet, path::Path};

use serde::{Serialize, de::DeserializeOwned};
use sled::{Db, IVec, Tree};
use tracing::debug;

use crate::core::data::{FormControlBinding, IdText, TranslationRecord};
use crate::error::{Error, Result};

const TRANSLATIONS_TREE: &str = "translations";
const FORM_CONTROLS_TREE: &str = "form_controls";

/// Handle to an open store. Every operation is a short, bounded read or an
/// atomic single-key write.
pub struct Store {
    db: Db,
    translations: Tree,
    form_controls: Tree,
}

impl Store {
    /// Open (or create) the store at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let db = sled::open(path)
            .map_err(|e| Error::persistence("open", path.display().to_string(), e))?;
        Self::with_db(db)
    }

    /// In-memory store removed on drop. Used by tests and dry runs.
    pub fn temporary() -> Result<Self> {
        let db = sled::Config::new()
            .temporary(true)
            .open()
            .map_err(|e| Error::persistence("open", "temporary store", e))?;
        Self::with_db(db)
    }

    fn with_db(db: Db) -> Result<Self> {
        let translations = db
            .open_tree(TRANSLATIONS_TREE)
            .map_err(|e| Error::persistence("open", TRANSLATIONS_TREE, e))?;
        let form_controls = db
            .open_tree(FORM_CONTROLS_TREE)
            .map_err(|e| Error::persistence("open", FORM_CONTROLS_TREE, e))?;
        Ok(Self {
            db,
            translations,
            form_controls,
        })
    }

    /// Insert or replace a translation, returning the text it replaced.
    pub fn insert(&self, record: &TranslationRecord) -> Result<Option<String>> {
        let key = encode(&(&record.id, &record.language))?;
        let previous = self
            .translations
            .insert(key, encode(&record.text)?)
            .map_err(|e| Error::persistence("insert", target(&record.id, &record.language), e))?;
        previous.map(|v| decode(&v)).transpose()
    }

    /// Insert a translation only if `(id, language)` is not stored yet.
    ///
    /// Returns true if the record was written.
    pub fn insert_if_absent(&self, record: &TranslationRecord) -> Result<bool> {
        let key = encode(&(&record.id, &record.language))?;
        let swapped = self
            .translations
            .compare_and_swap(key, None as Option<&[u8]>, Some(encode(&record.text)?))
            .map_err(|e| Error::persistence("insert", target(&record.id, &record.language), e))?;
        Ok(swapped.is_ok())
    }

    /// Forward lookup of `(id, language)`.
    pub fn get(&self, id: &str, language: &str) -> Result<Option<String>> {
        let key = encode(&(id, language))?;
        let value = self
            .translations
            .get(key)
            .map_err(|e| Error::persistence("get", target(id, language), e))?;
        value.map(|v| decode(&v)).transpose()
    }

    pub fn remove(&self, id: &str, language: &str) -> Result<Option<String>> {
        let key = encode(&(id, language))?;
        let previous = self
            .translations
            .remove(key)
            .map_err(|e| Error::persistence("remove", target(id, language), e))?;
        previous.map(|v| decode(&v)).transpose()
    }

    /// Translate `text` into `language`, forward or backward.
    ///
    /// 1. Forward: `text` is an id with a `language` translation.
    /// 2. Reverse: `text` is the translation of some id (in any language)
    ///    that also has a `language` translation.
    ///
    /// The first hit wins. Reverse candidates are visited in store key order,
    /// which is the only tie-break between ids sharing the same translation.
    /// With no hit the text comes back unchanged.
    pub fn translate(&self, text: &str, language: &str) -> Result<String> {
        if text.is_empty() {
            return Ok(String::new());
        }

        if let Some(translation) = self.get(text, language)? {
            return Ok(translation);
        }

        let needle = encode(text)?;
        for entry in self.translations.iter() {
            let (key, value) =
                entry.map_err(|e| Error::persistence("translate", target(text, language), e))?;
            if &*value != needle.as_slice() {
                continue;
            }
            let (id, from): (String, String) = decode(&key)?;
            if let Some(translation) = self.get(&id, language)? {
                debug!(text, %from, %id, language, "reverse translation");
                return Ok(translation);
            }
        }

        Ok(text.to_string())
    }

    /// Every translation into `language`, sorted by id.
    pub fn records(&self, language: &str) -> Result<Vec<TranslationRecord>> {
        let mut records = Vec::new();
        for entry in self.translations.iter() {
            let (key, value) =
                entry.map_err(|e| Error::persistence("scan", TRANSLATIONS_TREE, e))?;
            let (id, lang): (String, String) = decode(&key)?;
            if lang == language {
                records.push(TranslationRecord::new(id, lang, decode::<String>(&value)?));
            }
        }
        records.sort();
        Ok(records)
    }

    /// Languages with at least one translation.
    pub fn languages(&self) -> Result<BTreeSet<String>> {
        let mut languages = BTreeSet::new();
        for key in self.translations.iter().keys() {
            let key = key.map_err(|e| Error::persistence("scan", TRANSLATIONS_TREE, e))?;
            let (_, lang): (String, String) = decode(&key)?;
            languages.insert(lang);
        }
        Ok(languages)
    }

    /// Insert or replace the binding for `(owner, control_path)`.
    pub fn put_binding(&self, binding: &FormControlBinding) -> Result<()> {
        let key = encode(&(&binding.owner, &binding.control_path))?;
        self.form_controls
            .insert(key, encode(binding.id_text.as_str())?)
            .map_err(|e| {
                Error::persistence("bind", target(&binding.owner, &binding.control_path), e)
            })?;
        Ok(())
    }

    /// Rewrite the id text of an existing binding. Returns false, writing
    /// nothing, when `(owner, control_path)` has no binding.
    pub fn set_id_text(&self, owner: &str, control_path: &str, id_text: &IdText) -> Result<bool> {
        let key = encode(&(owner, control_path))?;
        let value = encode(id_text.as_str())?;
        let previous = self
            .form_controls
            .fetch_and_update(key, |old| old.map(|_| value.clone()))
            .map_err(|e| Error::persistence("bind", target(owner, control_path), e))?;
        Ok(previous.is_some())
    }

    /// Remove a binding, returning it if it existed.
    pub fn remove_binding(
        &self,
        owner: &str,
        control_path: &str,
    ) -> Result<Option<FormControlBinding>> {
        let key = encode(&(owner, control_path))?;
        let previous = self
            .form_controls
            .remove(key)
            .map_err(|e| Error::persistence("unbind", target(owner, control_path), e))?;
        previous
            .map(|v| {
                let id_text: String = decode(&v)?;
                Ok(FormControlBinding::new(owner, control_path, IdText::parse(&id_text)))
            })
            .transpose()
    }

    pub fn binding(&self, owner: &str, control_path: &str) -> Result<Option<FormControlBinding>> {
        let key = encode(&(owner, control_path))?;
        let value = self
            .form_controls
            .get(key)
            .map_err(|e| Error::persistence("bind", target(owner, control_path), e))?;
        value
            .map(|v| {
                let id_text: String = decode(&v)?;
                Ok(FormControlBinding::new(owner, control_path, IdText::parse(&id_text)))
            })
            .transpose()
    }

    /// Bindings of one form, sorted by control path.
    pub fn bindings(&self, owner: &str) -> Result<Vec<FormControlBinding>> {
        let prefix = encode(owner)?;
        let mut bindings = self
            .form_controls
            .scan_prefix(prefix)
            .map(|entry| {
                let entry = entry.map_err(|e| Error::persistence("scan", owner, e))?;
                decode_binding(entry)
            })
            .collect::<Result<Vec<_>>>()?;
        bindings.sort_by(|a, b| a.control_path.cmp(&b.control_path));
        Ok(bindings)
    }

    /// Every binding of every form, sorted by form then control path.
    pub fn all_bindings(&self) -> Result<Vec<FormControlBinding>> {
        let mut bindings = self
            .form_controls
            .iter()
            .map(|entry| {
                let entry = entry.map_err(|e| Error::persistence("scan", FORM_CONTROLS_TREE, e))?;
                decode_binding(entry)
            })
            .collect::<Result<Vec<_>>>()?;
        bindings.sort_by(|a, b| {
            (&a.owner, &a.control_path).cmp(&(&b.owner, &b.control_path))
        });
        Ok(bindings)
    }

    /// Flush pending writes to disk.
    pub fn flush(&self) -> Result<()> {
        self.db
            .flush()
            .map_err(|e| Error::persistence("flush", "store", e))?;
        Ok(())
    }
}

fn decode_binding((key, value): (IVec, IVec)) -> Result<FormControlBinding> {
    let (owner, control_path): (String, String) = decode(&key)?;
    let id_text: String = decode(&value)?;
    Ok(FormControlBinding::new(
        owner,
        control_path,
        IdText::parse(&id_text),
    ))
}

fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    Ok(bincode::serialize(value)?)
}

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    Ok(bincode::deserialize(bytes)?)
}

fn target(first: &str, second: &str) -> String {
    format!("{}/{}", first, second)
}
