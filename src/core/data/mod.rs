//! Core data types shared by the resolver, the store and the passes.
//!
//! ## Module Structure
//!
//! - `index`: NameIndex and the TextTarget handle trait
//! - `path`: ComponentPath and path serialization constants
//! - `record`: TranslationRecord, FormControlBinding and the id sentinels
//! - `snapshot`: FormSnapshot, the JSON dump of one form's text

pub mod index;
pub mod path;
pub mod record;
pub mod snapshot;

pub use index::{NameIndex, TextTarget};
pub use path::{ComponentPath, PATH_SEPARATOR, TOOLTIP_SUFFIX};
pub use record::{
    DO_NOT_TRANSLATE, DYNAMIC_SENTINEL, FormControlBinding, IdText, TranslationRecord,
};
pub use snapshot::{FormSnapshot, TextEntry, TextKind};
