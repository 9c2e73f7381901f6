//! Static/dynamic classification of captured control text.
//!
//! Text that is fixed at capture time becomes its own static id. Anything
//! that looks generated or data-like is marked dynamic and looked up at
//! runtime instead. These are heuristics: the default-name patterns are the
//! knob for tuning false positives.

use std::{fmt, sync::LazyLock};

use regex::Regex;

use crate::error::{Error, Result};
use crate::utils::{contains_alphabetic, contains_line_break};

/// Default names a forms designer gives to controls nobody renamed
/// (`CheckBox12`, `ToolStripMenuItem3`).
pub const DEFAULT_NAME_PATTERNS: &[&str] = &[
    r"^(Button|CheckBox|ComboBox|GroupBox|Label|LinkLabel|ListBox|RadioButton|TabPage|TextBox)\d+$",
    r"^ToolStrip(Button|DropDownButton|Label|MenuItem|SplitButton)\d+$",
    r"^(Form|Panel|Column|DataGridViewTextBoxColumn)\d+$",
];

/// Where a piece of text gets its translation from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextClass {
    /// Fixed text; the text is the id.
    Static(String),
    /// Resolved at runtime through the translation store.
    Dynamic,
}

impl fmt::Display for TextClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(id) => write!(f, "static:{}", id),
            Self::Dynamic => f.write_str("dynamic"),
        }
    }
}

/// Classifier with a configurable list of default-name patterns.
#[derive(Debug, Clone)]
pub struct TextClassifier {
    default_names: Vec<Regex>,
}

// Built-in patterns are constants and always compile.
static DEFAULT_CLASSIFIER: LazyLock<TextClassifier> = LazyLock::new(|| {
    TextClassifier::with_patterns(DEFAULT_NAME_PATTERNS)
        .expect("built-in default-name patterns must compile")
});

impl Default for TextClassifier {
    fn default() -> Self {
        DEFAULT_CLASSIFIER.clone()
    }
}

impl TextClassifier {
    /// Build a classifier from custom default-name regexes.
    pub fn with_patterns<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let default_names = patterns
            .into_iter()
            .map(|p| {
                let p = p.as_ref();
                Regex::new(p).map_err(|source| Error::InvalidPattern {
                    pattern: p.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { default_names })
    }

    pub fn is_default_name(&self, text: &str) -> bool {
        self.default_names.iter().any(|re| re.is_match(text))
    }

    pub fn classify(&self, text: &str) -> TextClass {
        if text.is_empty()
            || contains_line_break(text)
            || !contains_alphabetic(text)
            || self.is_default_name(text)
        {
            TextClass::Dynamic
        } else {
            TextClass::Static(text.to_string())
        }
    }
}

/// Classify `text` with the built-in default-name patterns.
pub fn classify_text(text: &str) -> TextClass {
    DEFAULT_CLASSIFIER.classify(text)
}
