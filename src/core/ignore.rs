//! Ignore rules: glob include/exclude sets deciding which named controls are
//! left out of translation.
//!
//! Rule files are line oriented:
//!
//! ```text
//! # comment
//! btn%          include: ignore every name starting with "btn"
//! !%Cancel      exclude: ...unless it ends with "Cancel"
//! ```

use std::{fmt, fs, path::Path};

use crate::core::utils::{LikePattern, MatchCase};
use crate::error::{Error, Result};

const COMMENT_MARKER: char = '#';
const EXCLUDE_MARKER: char = '!';

/// Verdict for one name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    /// Eligible for static translation.
    Static,
    /// Excluded from translation.
    Ignore,
}

impl fmt::Display for Eligibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static => f.write_str("static"),
            Self::Ignore => f.write_str("ignore"),
        }
    }
}

/// Compiled include and exclude patterns. Never empty.
#[derive(Debug, Clone)]
pub struct IgnoreRuleSet {
    includes: Vec<LikePattern>,
    excludes: Vec<LikePattern>,
}

impl IgnoreRuleSet {
    /// Compile a rule set.
    ///
    /// Fails with [`Error::EmptyRuleSet`] when both lists are empty, and with
    /// [`Error::InvalidPattern`] when a pattern does not compile.
    pub fn new<I, E, S>(includes: I, excludes: E, case: MatchCase) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        E: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let includes = compile_all(includes, case)?;
        let excludes = compile_all(excludes, case)?;
        if includes.is_empty() && excludes.is_empty() {
            return Err(Error::EmptyRuleSet);
        }
        Ok(Self { includes, excludes })
    }

    /// Parse rules from their line-oriented text form.
    pub fn parse(source: &str, case: MatchCase) -> Result<Self> {
        let mut includes = Vec::new();
        let mut excludes = Vec::new();

        for line in source.lines().map(str::trim) {
            if line.is_empty() || line.starts_with(COMMENT_MARKER) {
                continue;
            }
            match line.strip_prefix(EXCLUDE_MARKER) {
                Some(pattern) => excludes.push(pattern.trim()),
                None => includes.push(line),
            }
        }

        Self::new(includes, excludes, case)
    }

    /// Read and parse a rule file.
    pub fn load(path: &Path, case: MatchCase) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|source| Error::RuleFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&source, case)
    }

    pub fn includes(&self) -> impl Iterator<Item = &str> {
        self.includes.iter().map(LikePattern::as_str)
    }

    pub fn excludes(&self) -> impl Iterator<Item = &str> {
        self.excludes.iter().map(LikePattern::as_str)
    }

    /// Ignore iff some include matches (vacuous with no includes) and no
    /// exclude does.
    pub fn classify(&self, name: &str) -> Eligibility {
        let included =
            self.includes.is_empty() || self.includes.iter().any(|p| p.matches(name));
        let excluded = self.excludes.iter().any(|p| p.matches(name));

        if included && !excluded {
            Eligibility::Ignore
        } else {
            Eligibility::Static
        }
    }
}

/// Classify `name` against `rules`.
pub fn classify(name: &str, rules: &IgnoreRuleSet) -> Eligibility {
    rules.classify(name)
}

fn compile_all<I, S>(patterns: I, case: MatchCase) -> Result<Vec<LikePattern>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    patterns
        .into_iter()
        .map(|p| LikePattern::new(p.as_ref(), case))
        .collect()
}
