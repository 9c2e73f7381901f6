//! Glossa - translation store and resolver for desktop form localization
//!
//! Glossa keeps id/language/text records in an embedded store, binds a form's
//! controls to translation ids, and writes translations back into the form's
//! component tree, tolerating the extra container levels a designer adds
//! between releases.
//!
//! ## Module Structure
//!
//! - `actions`: Capture, apply and ignore passes over stored bindings
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Name resolution, ignore rules and text classification
//! - `error`: Library error type
//! - `store`: Persistent translation store and JSON bundles
//! - `utils`: Shared utility functions

pub mod actions;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod store;
pub mod utils;

pub use error::{Error, Result};
