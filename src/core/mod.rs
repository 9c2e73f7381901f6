//! Core engine: component data, name resolution, ignore rules and text
//! classification.
//!
//! ## Module Structure
//!
//! - `data`: Component paths, name indexes, records and form snapshots
//! - `resolve`: Exact and drift-tolerant lookup of hierarchical names
//! - `ignore`: `%`/`_` include and exclude rules
//! - `classify`: Static vs dynamic text
//! - `utils`: LIKE-style pattern matching

pub mod classify;
pub mod data;
pub mod ignore;
pub mod resolve;
pub mod utils;

pub use classify::{TextClass, TextClassifier, classify_text};
pub use ignore::{Eligibility, IgnoreRuleSet};
pub use resolve::{Resolution, resolve};
