use std::{collections::BTreeMap, fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::{
    index::{NameIndex, TextTarget},
    path::TOOLTIP_SUFFIX,
};

/// Flat dump of one form's text, as produced by a component tree walker.
///
/// Tool tips are enumerated next to the controls they belong to rather than
/// discovered from the toolkit.
///
/// ```json
/// {
///   "form": "frmMain",
///   "controls": { "frmMain_btnOK": "OK" },
///   "toolTips": { "frmMain_btnOK": "Confirm the dialog" }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSnapshot {
    pub form: String,
    #[serde(default)]
    pub controls: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tool_tips: BTreeMap<String, String>,
}

/// Whether an indexed entry is a control's own text or its tool tip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKind {
    Control,
    ToolTip,
}

/// Handle type for snapshot-backed indexes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEntry {
    pub kind: TextKind,
    pub text: String,
}

impl TextTarget for TextEntry {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: String) {
        self.text = text;
    }
}

impl FormSnapshot {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse snapshot: {}", path.display()))
    }

    pub fn to_json(&self) -> Result<String> {
        let content = serde_json::to_string_pretty(self).context("Failed to serialize snapshot")?;
        Ok(format!("{}\n", content))
    }

    /// Index every control and tool tip. Tool tips are keyed `<path>:ToolTip`.
    pub fn to_index(&self) -> NameIndex<TextEntry> {
        let controls = self.controls.iter().map(|(path, text)| {
            (
                path.clone(),
                TextEntry {
                    kind: TextKind::Control,
                    text: text.clone(),
                },
            )
        });
        let tool_tips = self.tool_tips.iter().map(|(path, text)| {
            (
                format!("{}{}", path, TOOLTIP_SUFFIX),
                TextEntry {
                    kind: TextKind::ToolTip,
                    text: text.clone(),
                },
            )
        });
        controls.chain(tool_tips).collect()
    }

    /// Copy text back from an index built by [`FormSnapshot::to_index`].
    pub fn update_from(&mut self, index: &NameIndex<TextEntry>) {
        for (key, entry) in index {
            let target = match entry.kind {
                TextKind::Control => self.controls.get_mut(key.as_str()),
                TextKind::ToolTip => key
                    .strip_suffix(TOOLTIP_SUFFIX)
                    .and_then(|path| self.tool_tips.get_mut(path)),
            };
            if let Some(text) = target {
                *text = entry.text.clone();
            }
        }
    }
}
