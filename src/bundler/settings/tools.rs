//! User-provided locations of the ICU command-line tools.

use std::path::PathBuf;

/// Explicit paths for the external tools.
///
/// Any tool left as `None` is looked up on `PATH` when the build starts.
#[derive(Clone, Debug, Default)]
pub struct ToolPaths {
    /// Resource compiler
    pub genrb: Option<PathBuf>,
    /// Packager
    pub pkgdata: Option<PathBuf>,
    /// Swap and unpack utility
    pub icupkg: Option<PathBuf>,
}
