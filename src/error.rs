use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the translation core and its store.
///
/// Not-found and ambiguous lookups are never errors: resolution reports them
/// as values and `translate` hands the input text back.
#[derive(Debug, Error)]
pub enum Error {
    /// An ignore-rule set with neither includes nor excludes.
    #[error("Ignore rule set is empty: add at least one include or '!' exclude pattern")]
    EmptyRuleSet,

    /// A pattern that the pattern engine refused to compile.
    #[error("Invalid pattern \"{pattern}\": {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The ignore-rule source file could not be read.
    #[error("Failed to read ignore rules from {}: {source}", path.display())]
    RuleFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A bulk translation bundle that is unreadable or not a flat id -> text map.
    #[error("Invalid translation bundle {}: {reason}", path.display())]
    Bundle { path: PathBuf, reason: String },

    /// A batch update applied fewer records than it set out to.
    #[error("{operation}: applied {applied} of {expected} records")]
    BatchMismatch {
        operation: &'static str,
        expected: usize,
        applied: usize,
    },

    /// The backing store failed.
    #[error("Store error during {operation} ({target}): {source}")]
    Persistence {
        operation: &'static str,
        target: String,
        #[source]
        source: sled::Error,
    },

    /// A stored key or value could not be encoded or decoded.
    #[error("Failed to encode or decode store data: {0}")]
    Encoding(#[from] bincode::Error),
}

impl Error {
    pub fn bundle(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Bundle {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn persistence(
        operation: &'static str,
        target: impl Into<String>,
        source: sled::Error,
    ) -> Self {
        Self::Persistence {
            operation,
            target: target.into(),
            source,
        }
    }

    /// True for errors caused by rules, bundles or other user-supplied input,
    /// false for failures of the backing store.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, Self::Persistence { .. } | Self::Encoding(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
