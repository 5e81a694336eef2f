//! Locale source discovery.

use super::{EntryTable, LocaleEntry, SOURCE_EXTENSION};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Directory names of version-control metadata that are never scanned.
const VCS_DIRS: &[&str] = &[".svn", ".git", ".hg", "CVS"];

/// Walks every source directory and registers each `.txt` file found.
///
/// Directories are processed in the order given and each tree is walked in
/// filesystem order. A locale id seen again replaces the earlier entry, so
/// the last directory to provide an id wins. Unreadable paths are logged and
/// skipped.
pub fn collect(source_dirs: &[PathBuf], scratch: &Path) -> EntryTable {
    let mut table = EntryTable::new(scratch);

    for dir in source_dirs {
        log::info!("Collecting .{} files in {}", SOURCE_EXTENSION, dir.display());
        collect_dir(dir, scratch, &mut table);
    }

    log::trace!("{:#?}", table);
    table
}

fn collect_dir(dir: &Path, scratch: &Path, table: &mut EntryTable) {
    let walker = WalkDir::new(dir)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| !is_vcs_dir(e));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Skipping unreadable path: {}", e);
                continue;
            }
        };
        log::trace!("{}", entry.path().display());

        if !is_source_file(&entry) {
            continue;
        }

        let Some(id) = locale_id(entry.path()) else {
            log::debug!("Ignoring {}", entry.path().display());
            continue;
        };

        log::info!("+ {} (from {})", id, entry.path().display());
        if let Some(previous) = table.insert(LocaleEntry::new(id, entry.path(), scratch)) {
            log::debug!(
                "{} replaces {} for locale {}",
                entry.path().display(),
                previous.source.display(),
                previous.id
            );
        }
    }
}

/// Regular files, and symlinks that resolve to one. Directory links stay unfollowed.
fn is_source_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

fn is_vcs_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| VCS_DIRS.contains(&name))
}

/// Locale id for a source path, or `None` if it is not a locale source.
///
/// `loc/es_MX.txt` gives `es_MX`. A file named just `.txt` has no id.
pub fn locale_id(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    let id = name.strip_suffix(SOURCE_EXTENSION)?.strip_suffix('.')?;
    (!id.is_empty()).then(|| id.to_string())
}
