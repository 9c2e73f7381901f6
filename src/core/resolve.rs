//! Resolution of stored control keys against a live `NameIndex`.
//!
//! Keys are captured once and applied later, and the component hierarchy
//! tends to drift in between: a wrapper panel gets inserted, a group box is
//! added around a few controls. Exact matching would silently stop
//! translating those controls, substring matching would hit the wrong ones.
//!
//! Resolution therefore runs in two steps:
//! 1. An exact match of the serialized path always wins.
//! 2. Otherwise, a key with at least three segments may match a path that
//!    keeps its ancestor prefix and leaf but has exactly two more segments
//!    in between. The match is accepted only when it is the single candidate.

use crate::core::data::{NameIndex, PATH_SEPARATOR};

/// Fewest segments a key needs before fuzzy matching is attempted.
const MIN_FUZZY_SEGMENTS: usize = 3;

/// Segments a candidate may carry between the key's prefix and its leaf.
const INSERTED_SEGMENTS: usize = 2;

/// Outcome of resolving one key. Paths borrow from the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// The key exists verbatim.
    Exact(&'a str),
    /// A single path matched the drift window.
    Fuzzy(&'a str),
    NotFound,
    /// Several paths matched the drift window, sorted. Callers treat this as
    /// not found.
    Ambiguous(Vec<&'a str>),
}

impl<'a> Resolution<'a> {
    /// The resolved path, if resolution picked exactly one.
    pub fn path(&self) -> Option<&'a str> {
        match self {
            Self::Exact(path) | Self::Fuzzy(path) => Some(*path),
            Self::NotFound | Self::Ambiguous(_) => None,
        }
    }

    pub fn is_found(&self) -> bool {
        self.path().is_some()
    }
}

/// Resolve `key` against `index`.
pub fn resolve<'a, H>(key: &str, index: &'a NameIndex<H>) -> Resolution<'a> {
    if let Some((path, _)) = index.get_key_value(key) {
        return Resolution::Exact(path);
    }

    let segments: Vec<&str> = key.split(PATH_SEPARATOR).collect();
    if segments.len() < MIN_FUZZY_SEGMENTS {
        return Resolution::NotFound;
    }
    let Some((leaf, prefix)) = segments.split_last() else {
        return Resolution::NotFound;
    };

    let mut candidates: Vec<&'a str> = index
        .keys()
        .filter(|path| matches_drift_window(prefix, leaf, path))
        .collect();

    match candidates.len() {
        0 => Resolution::NotFound,
        1 => Resolution::Fuzzy(candidates[0]),
        _ => {
            candidates.sort_unstable();
            Resolution::Ambiguous(candidates)
        }
    }
}

/// Resolve `key` straight to its handle.
pub fn resolve_handle<'a, H>(key: &str, index: &'a NameIndex<H>) -> Option<&'a H> {
    resolve(key, index).path().and_then(|path| index.get(path))
}

/// Resolve `key` to a mutable handle.
pub fn resolve_handle_mut<'a, H>(key: &str, index: &'a mut NameIndex<H>) -> Option<&'a mut H> {
    let path = resolve(key, index).path()?.to_string();
    index.get_mut(&path)
}

/// `candidate` = `prefix` + two non-empty segments + `leaf`.
fn matches_drift_window(prefix: &[&str], leaf: &str, candidate: &str) -> bool {
    let segments: Vec<&str> = candidate.split(PATH_SEPARATOR).collect();
    if segments.len() != prefix.len() + INSERTED_SEGMENTS + 1 {
        return false;
    }

    let (head, rest) = segments.split_at(prefix.len());
    let (inserted, tail) = rest.split_at(INSERTED_SEGMENTS);
    head == prefix && inserted.iter().all(|s| !s.is_empty()) && tail == [leaf]
}
