//! Passes that read or rewrite stored translation state.
//!
//! ## Architecture
//!
//! ```text
//! FormSnapshot (tree walker output)
//!     ↓ to_index
//! NameIndex ──capture──→ FormControlBinding ──store──→ Store
//!     ↑                                                  │
//!     └──────────────────apply───────────────────────────┘
//!
//! IgnoreRuleSet ──ignore──→ bindings marked DoNotTranslate
//! ```
//!
//! ## Actions
//!
//! - [`capture_bindings`] / [`store_capture`]: bind controls to static ids or
//!   the dynamic sentinel
//! - [`apply_translations`]: write translations back into a NameIndex
//! - [`apply_ignore_rules`]: mark ignored controls `DoNotTranslate`
//!
//! Store failures abort a pass with `Error::Persistence`. The ignore pass
//! also counts rewritten bindings against pending ones and fails with
//! `Error::BatchMismatch` when the two differ.

mod apply;
mod capture;
mod ignore;

pub use apply::{ApplyStats, apply_translations};
pub use capture::{CaptureStats, capture_bindings, store_capture};
pub use ignore::{IgnoreOutcome, apply_ignore_rules, mark_ignored};
