//! Locale discovery and generated inputs for the ICU tools.
//!
//! - [`collector`] - walks source trees into an [`EntryTable`]
//! - [`index`] - renders the `pkgdata` manifest and the `res_index` source

pub mod collector;
mod entry;
pub mod index;

pub use collector::collect;
pub use entry::{
    COMPILED_EXTENSION, EntryTable, INDEX_LOCALE, LocaleEntry, SOURCE_EXTENSION,
};
