use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::{Map, Value};
use tracing::debug;

use super::Store;
use crate::core::data::TranslationRecord;
use crate::error::{Error, Result};

/// One language's translations as a flat `id -> text` JSON object, the
/// format exchanged with collaborative translation platforms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bundle {
    entries: Vec<(String, String)>,
}

/// Outcome of importing one bundle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    /// Entries with an empty translation, left untouched in the store.
    pub skipped: usize,
}

impl Bundle {
    /// Parse bundle content. `path` is only used in error messages.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let value: Value = serde_json::from_str(content)
            .map_err(|e| Error::bundle(path, format!("not valid JSON: {}", e)))?;
        let Value::Object(map) = value else {
            return Err(Error::bundle(path, "root must be an object of id -> text"));
        };

        let mut entries = Vec::with_capacity(map.len());
        for (id, value) in map {
            if id.is_empty() {
                return Err(Error::bundle(path, "empty id"));
            }
            match value {
                Value::String(text) => entries.push((id, text)),
                other => {
                    return Err(Error::bundle(
                        path,
                        format!("value of \"{}\" must be a string, found {}", id, kind(&other)),
                    ));
                }
            }
        }
        Ok(Self { entries })
    }

    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::bundle(path, format!("cannot read file: {}", e)))?;
        Self::parse(&content, path)
    }

    /// Pretty JSON with 2-space indentation and a trailing newline.
    pub fn to_json(&self) -> String {
        let map: Map<String, Value> = self
            .entries
            .iter()
            .map(|(id, text)| (id.clone(), Value::String(text.clone())))
            .collect();
        let content = serde_json::to_string_pretty(&Value::Object(map))
            .unwrap_or_else(|_| String::from("{}"));
        format!("{}\n", content)
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .map_err(|e| Error::bundle(path, format!("cannot create directory: {}", e)))?;
        }
        fs::write(path, self.to_json())
            .map_err(|e| Error::bundle(path, format!("cannot write file: {}", e)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(id, text)| (id.as_str(), text.as_str()))
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.iter().find(|(k, _)| *k == id).map(|(_, text)| text)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<I: Into<String>, T: Into<String>> FromIterator<(I, T)> for Bundle {
    fn from_iter<It: IntoIterator<Item = (I, T)>>(iter: It) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(id, text)| (id.into(), text.into()))
                .collect(),
        }
    }
}

/// Language of a bundle file, taken from its stem.
///
/// Examples:
/// - "fr.json" -> Some("fr")
/// - "/path/to/translations/pt-BR.json" -> Some("pt-BR")
pub fn language_from_path(path: impl AsRef<Path>) -> Option<String> {
    path.as_ref()
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}

/// Default location of a language's bundle under `bundles_root`.
pub fn bundle_path(bundles_root: &Path, language: &str) -> PathBuf {
    bundles_root.join(format!("{}.json", language))
}

/// Insert or replace every non-empty entry of `bundle` as a `language`
/// translation.
///
/// Records are written one at a time. A store failure aborts the import and
/// names the record it failed on. Records written before it stay.
pub fn import_bundle(store: &Store, language: &str, bundle: &Bundle) -> Result<ImportSummary> {
    let mut summary = ImportSummary::default();

    for (id, text) in bundle.iter() {
        if text.is_empty() {
            debug!(id, language, "skipping empty translation");
            summary.skipped += 1;
            continue;
        }
        store.insert(&TranslationRecord::new(id, language, text))?;
        summary.imported += 1;
    }
    Ok(summary)
}

/// Every `language` translation in the store, sorted by id.
pub fn export_bundle(store: &Store, language: &str) -> Result<Bundle> {
    Ok(store
        .records(language)?
        .into_iter()
        .map(|record| (record.id, record.text))
        .collect())
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
