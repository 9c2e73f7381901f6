use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Wildcard matching any run of characters, including none.
pub const ANY_SEQUENCE: char = '%';

/// Wildcard matching exactly one character.
pub const ANY_CHAR: char = '_';

/// Case handling for pattern matching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchCase {
    Sensitive,
    /// Matches the default collation of common SQL stores.
    #[default]
    Insensitive,
}

impl MatchCase {
    pub fn from_sensitive(sensitive: bool) -> Self {
        if sensitive {
            Self::Sensitive
        } else {
            Self::Insensitive
        }
    }
}

/// A compiled LIKE-style pattern, anchored at both ends.
///
/// Examples:
/// - `btn%` matches `btnOK`, `btn`, but not `cmdOK`
/// - `%Cancel` matches `btnCancel`
/// - `lbl_` matches `lbl1` but not `lbl` or `lbl12`
#[derive(Debug, Clone)]
pub struct LikePattern {
    source: String,
    regex: Regex,
}

impl LikePattern {
    pub fn new(pattern: &str, case: MatchCase) -> Result<Self> {
        let regex = RegexBuilder::new(&to_regex(pattern))
            .case_insensitive(case == MatchCase::Insensitive)
            .build()
            .map_err(|source| Error::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn matches(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Translate LIKE wildcards to an anchored regex; everything else is literal.
fn to_regex(pattern: &str) -> String {
    let mut regex = String::from("(?s)^");
    let mut literal = [0u8; 4];
    for c in pattern.chars() {
        match c {
            ANY_SEQUENCE => regex.push_str(".*"),
            ANY_CHAR => regex.push('.'),
            _ => regex.push_str(&regex::escape(c.encode_utf8(&mut literal))),
        }
    }
    regex.push('$');
    regex
}
