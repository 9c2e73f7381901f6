use std::fmt;

use serde::{Deserialize, Serialize};

/// Marks a control whose text must be looked up at runtime.
pub const DYNAMIC_SENTINEL: &str = "ReplaceWithDynamicTranslation";

/// Marks a control excluded from both static and dynamic translation.
pub const DO_NOT_TRANSLATE: &str = "DoNotTranslate";

/// One pre-authored translation: `(id, language) -> text`.
///
/// `(id, language)` is unique in a store. The id is often the source-language
/// text itself.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TranslationRecord {
    pub id: String,
    pub language: String,
    pub text: String,
}

impl TranslationRecord {
    pub fn new(id: impl Into<String>, language: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            language: language.into(),
            text: text.into(),
        }
    }
}

/// What a bound control should be translated with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IdText {
    /// A literal id into the translations table.
    Literal(String),
    /// Resolve the control's current text at runtime.
    Dynamic,
    /// Leave the control alone.
    DoNotTranslate,
}

impl IdText {
    /// Parse the stored representation, recognising the two sentinels.
    pub fn parse(stored: &str) -> Self {
        match stored {
            DYNAMIC_SENTINEL => Self::Dynamic,
            DO_NOT_TRANSLATE => Self::DoNotTranslate,
            id => Self::Literal(id.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Literal(id) => id,
            Self::Dynamic => DYNAMIC_SENTINEL,
            Self::DoNotTranslate => DO_NOT_TRANSLATE,
        }
    }
}

impl fmt::Display for IdText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Links a control on a form to the id its text is translated from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormControlBinding {
    /// Owning form name.
    pub owner: String,
    /// Serialized component path of the control.
    pub control_path: String,
    pub id_text: IdText,
}

impl FormControlBinding {
    pub fn new(owner: impl Into<String>, control_path: impl Into<String>, id_text: IdText) -> Self {
        Self {
            owner: owner.into(),
            control_path: control_path.into(),
            id_text,
        }
    }
}
