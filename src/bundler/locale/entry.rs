//! Locale entries and the table that collects them.

use indexmap::IndexMap;
use std::path::{Path, PathBuf};

/// Locale id of the generated index.
pub const INDEX_LOCALE: &str = "res_index";

/// Extension of locale text sources.
pub const SOURCE_EXTENSION: &str = "txt";

/// Extension of compiled resources.
pub const COMPILED_EXTENSION: &str = "res";

/// One locale source and where its compiled form goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocaleEntry {
    /// Locale id, the source file name without `.txt`
    pub id: String,
    /// Text source handed to `genrb`
    pub source: PathBuf,
    /// `<scratch>/<id>.res`
    pub compiled: PathBuf,
}

impl LocaleEntry {
    /// Creates an entry compiling into `scratch`.
    pub fn new(id: impl Into<String>, source: impl Into<PathBuf>, scratch: &Path) -> Self {
        let id = id.into();
        let compiled = scratch.join(format!("{id}.{COMPILED_EXTENSION}"));
        Self {
            id,
            source: source.into(),
            compiled,
        }
    }

    /// Name of the compiled file as listed in the manifest.
    pub fn compiled_file_name(&self) -> String {
        format!("{}.{}", self.id, COMPILED_EXTENSION)
    }
}

/// Locale id to entry, in insertion order.
///
/// The generated index entry is always inserted first. Inserting an id that is
/// already present replaces the entry but keeps its original position.
#[derive(Clone, Debug)]
pub struct EntryTable {
    entries: IndexMap<String, LocaleEntry>,
}

impl EntryTable {
    /// Creates a table holding only the index entry for `scratch`.
    pub fn new(scratch: &Path) -> Self {
        let mut entries = IndexMap::new();
        let index = LocaleEntry::new(
            INDEX_LOCALE,
            scratch.join(crate::bundler::builder::INDEX_SOURCE_FILE_NAME),
            scratch,
        );
        entries.insert(index.id.clone(), index);
        Self { entries }
    }

    /// Adds or replaces an entry. Returns the entry it replaced.
    pub fn insert(&mut self, entry: LocaleEntry) -> Option<LocaleEntry> {
        self.entries.insert(entry.id.clone(), entry)
    }

    pub fn get(&self, id: &str) -> Option<&LocaleEntry> {
        self.entries.get(id)
    }

    /// Number of entries, including the index entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, index entry first.
    pub fn iter(&self) -> impl Iterator<Item = &LocaleEntry> {
        self.entries.values()
    }

    /// Ids of discovered locales, without the index entry.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.entries
            .keys()
            .map(String::as_str)
            .filter(|id| *id != INDEX_LOCALE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_index_entry() {
        let table = EntryTable::new(Path::new("out/tmp"));
        let index = table.get(INDEX_LOCALE).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(index.source, Path::new("out/tmp/res_index.txt"));
        assert_eq!(index.compiled, Path::new("out/tmp/res_index.res"));
        assert_eq!(table.locales().count(), 0);
    }

    #[test]
    fn replacement_keeps_position() {
        let scratch = Path::new("tmp");
        let mut table = EntryTable::new(scratch);
        table.insert(LocaleEntry::new("root", "a/root.txt", scratch));
        table.insert(LocaleEntry::new("es", "a/es.txt", scratch));

        let replaced = table.insert(LocaleEntry::new("root", "b/root.txt", scratch));

        assert_eq!(replaced.unwrap().source, Path::new("a/root.txt"));
        assert_eq!(table.locales().collect::<Vec<_>>(), ["root", "es"]);
        assert_eq!(table.get("root").unwrap().source, Path::new("b/root.txt"));
    }
}
