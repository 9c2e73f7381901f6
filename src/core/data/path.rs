use std::fmt;

/// Separator between the segments of a serialized component path.
pub const PATH_SEPARATOR: char = '_';

/// Suffix appended to a control's path to address its tool tip.
///
/// Uses `:` rather than the path separator so the tool tip's leaf segment
/// (`btnOK:ToolTip`) stays distinct from the control's own leaf (`btnOK`).
pub const TOOLTIP_SUFFIX: &str = ":ToolTip";

/// Ancestry of a UI element, outermost container first.
///
/// Produced by whatever walks the live component tree; the core only
/// compares and serializes paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentPath {
    segments: Vec<String>,
}

impl ComponentPath {
    /// Build a path from its segments.
    ///
    /// Returns `None` if there are no segments or any segment is empty.
    pub fn new<I, S>(segments: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() || segments.iter().any(|s| s.is_empty()) {
            return None;
        }
        Some(Self { segments })
    }

    /// Parse a serialized path (`frmMain_pnlTop_btnOK`).
    pub fn parse(serialized: &str) -> Option<Self> {
        Self::new(serialized.split(PATH_SEPARATOR))
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn leaf(&self) -> &str {
        // Non-empty by construction.
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    /// Path of a child element nested directly inside this one.
    pub fn child(&self, name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if name.is_empty() {
            return None;
        }
        let mut segments = self.segments.clone();
        segments.push(name);
        Some(Self { segments })
    }

    /// Serialized key used in a `NameIndex` and in stored bindings.
    pub fn key(&self) -> String {
        self.segments.join(&PATH_SEPARATOR.to_string())
    }

    /// Key addressing this element's tool tip.
    pub fn tooltip_key(&self) -> String {
        format!("{}{}", self.key(), TOOLTIP_SUFFIX)
    }
}

impl fmt::Display for ComponentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}
