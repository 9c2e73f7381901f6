//! Pattern matching helpers for the core engine.

pub mod like_matcher;

pub use like_matcher::*;
