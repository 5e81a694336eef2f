//! `pkgdata` packaging modes.

use std::fmt;

/// Packaging mode passed to `pkgdata -m`.
///
/// Only [`PackageMode::Archive`] and [`PackageMode::Files`] can be byte-swapped
/// after packaging; the others produce native libraries or sources that
/// `icupkg` cannot rewrite.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub enum PackageMode {
    /// Individual `.res` files in a directory tree
    Files,
    /// A single `.dat` archive
    #[default]
    Archive,
    /// Common data file (`pkgdata` alias of archive)
    Common,
    /// Shared library
    #[value(alias = "library")]
    Dll,
    /// Static library
    Static,
}

impl PackageMode {
    /// Name understood by `pkgdata`.
    pub fn as_str(self) -> &'static str {
        match self {
            PackageMode::Files => "files",
            PackageMode::Archive => "archive",
            PackageMode::Common => "common",
            PackageMode::Dll => "dll",
            PackageMode::Static => "static",
        }
    }

    /// Whether the output of this mode can be rewritten by `icupkg`.
    pub fn supports_swap(self) -> bool {
        matches!(self, PackageMode::Archive | PackageMode::Files)
    }

    /// Mode actually handed to `pkgdata`.
    ///
    /// A swapped `files` build is packaged as an archive first and unpacked
    /// after the swap.
    pub fn effective(self, swapping: bool) -> Self {
        if swapping && self == PackageMode::Files {
            PackageMode::Archive
        } else {
            self
        }
    }
}

impl fmt::Display for PackageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_archive_and_files_swap() {
        assert!(PackageMode::Archive.supports_swap());
        assert!(PackageMode::Files.supports_swap());
        assert!(!PackageMode::Common.supports_swap());
        assert!(!PackageMode::Dll.supports_swap());
        assert!(!PackageMode::Static.supports_swap());
    }

    #[test]
    fn swapped_files_mode_packages_as_archive() {
        assert_eq!(PackageMode::Files.effective(true), PackageMode::Archive);
        assert_eq!(PackageMode::Files.effective(false), PackageMode::Files);
        assert_eq!(PackageMode::Dll.effective(true), PackageMode::Dll);
    }
}
