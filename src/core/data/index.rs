use std::collections::{HashMap, hash_map};

use super::path::ComponentPath;

/// Read/write access to the text carried by a UI element.
///
/// Implemented by whatever handle type the presentation layer puts in a
/// [`NameIndex`]. Tool tips and other auxiliary text are ordinary entries
/// with their own handle.
pub trait TextTarget {
    fn text(&self) -> &str;
    fn set_text(&mut self, text: String);
}

/// Serialized component path -> component handle, for one translation pass.
///
/// Holds at most one handle per path. The resolver only reads it; the apply
/// pass writes text through the handles it resolves.
#[derive(Debug, Clone)]
pub struct NameIndex<H> {
    entries: HashMap<String, H>,
}

impl<H> Default for NameIndex<H> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<H> NameIndex<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a handle under a serialized key, returning the handle it replaced.
    pub fn insert(&mut self, key: impl Into<String>, handle: H) -> Option<H> {
        self.entries.insert(key.into(), handle)
    }

    pub fn insert_path(&mut self, path: &ComponentPath, handle: H) -> Option<H> {
        self.insert(path.key(), handle)
    }

    pub fn get(&self, key: &str) -> Option<&H> {
        self.entries.get(key)
    }

    /// The stored key equal to `key`, borrowed from the index.
    pub fn get_key_value(&self, key: &str) -> Option<(&str, &H)> {
        self.entries
            .get_key_value(key)
            .map(|(k, h)| (k.as_str(), h))
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut H> {
        self.entries.get_mut(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, H> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<H, K: Into<String>> FromIterator<(K, H)> for NameIndex<H> {
    fn from_iter<T: IntoIterator<Item = (K, H)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, h)| (k.into(), h)).collect(),
        }
    }
}

impl<'a, H> IntoIterator for &'a NameIndex<H> {
    type Item = (&'a String, &'a H);
    type IntoIter = hash_map::Iter<'a, String, H>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
