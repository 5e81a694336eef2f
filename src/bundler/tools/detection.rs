//! External tool location.
//!
//! Explicit paths from the command line (or their environment variables) win.
//! Otherwise each tool is looked up on `PATH`; if that fails the bare name is
//! kept so the spawn error names the missing tool.

use crate::bundler::settings::ToolPaths;
use std::path::{Path, PathBuf};

/// Resource compiler executable name.
pub const GENRB: &str = "genrb";
/// Packager executable name.
pub const PKGDATA: &str = "pkgdata";
/// Swap/unpack utility executable name.
pub const ICUPKG: &str = "icupkg";

/// Resolved paths of the three ICU tools.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toolset {
    pub genrb: PathBuf,
    pub pkgdata: PathBuf,
    pub icupkg: PathBuf,
}

impl Default for Toolset {
    /// Bare tool names, resolved by the OS at spawn time.
    fn default() -> Self {
        Self {
            genrb: PathBuf::from(GENRB),
            pkgdata: PathBuf::from(PKGDATA),
            icupkg: PathBuf::from(ICUPKG),
        }
    }
}

impl Toolset {
    /// Resolves every tool, honoring overrides in `paths`.
    pub fn resolve(paths: &ToolPaths) -> Self {
        Self {
            genrb: locate(GENRB, paths.genrb.as_deref()),
            pkgdata: locate(PKGDATA, paths.pkgdata.as_deref()),
            icupkg: locate(ICUPKG, paths.icupkg.as_deref()),
        }
    }
}

/// Finds one tool.
pub fn locate(name: &str, explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        log::debug!("Using {} from {}", name, path.display());
        return path.to_path_buf();
    }

    match which::which(name) {
        Ok(path) => {
            log::debug!("Found {} at: {}", name, path.display());
            path
        }
        Err(e) => {
            log::warn!(
                "{} not found in PATH: {}. Pass --{} or put the ICU tools on PATH.",
                name,
                e,
                name
            );
            PathBuf::from(name)
        }
    }
}
