//! Core Settings struct and implementations.

use super::{Endian, PackageMode, ToolPaths};
use std::path::{Path, PathBuf};

/// Name of the scratch directory created inside the destination.
pub const SCRATCH_DIR_NAME: &str = "tmp";

/// Main settings for a bundle build.
///
/// Constructed via [`SettingsBuilder`](super::SettingsBuilder), which validates
/// the required fields.
///
/// # Examples
///
/// ```
/// use resbundler::bundler::{Endian, PackageMode, SettingsBuilder};
///
/// # fn example() -> resbundler::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .name("myapp")
///     .source_dir("loc")
///     .dest_dir("out")
///     .mode(PackageMode::Archive)
///     .endian(Endian::Host)
///     .build()?;
///
/// assert_eq!(settings.bundle_file_name(), "myapp.dat");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Settings {
    /// Bundle name, used for `<name>.dat` and `pkgdata -p`.
    name: String,

    /// Directories scanned for `.txt` sources, in the order given.
    source_dirs: Vec<PathBuf>,

    /// Packaging mode requested by the user.
    mode: PackageMode,

    /// Destination directory for the bundle and the scratch directory.
    dest_dir: PathBuf,

    /// Requested byte order, possibly `Host`.
    endian: Endian,

    /// Number of `-v` flags.
    verbosity: u8,

    /// Abort when `genrb` exits non-zero.
    strict: bool,

    /// Command line recorded in the manifest header.
    invocation: String,

    /// User-provided tool locations.
    tools: ToolPaths,
}

impl Settings {
    /// Returns the bundle name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the source directories.
    pub fn source_dirs(&self) -> &[PathBuf] {
        &self.source_dirs
    }

    /// Returns the requested packaging mode.
    pub fn mode(&self) -> PackageMode {
        self.mode
    }

    /// Returns the destination directory.
    pub fn dest_dir(&self) -> &Path {
        &self.dest_dir
    }

    /// Returns the scratch directory, `<dest>/tmp`.
    pub fn scratch_dir(&self) -> PathBuf {
        self.dest_dir.join(SCRATCH_DIR_NAME)
    }

    /// Returns the requested byte order, with `Host` resolved.
    pub fn endian(&self) -> Endian {
        self.endian.resolve()
    }

    /// Whether the packaged bundle must be byte-swapped.
    pub fn needs_swap(&self) -> bool {
        self.endian.needs_swap()
    }

    /// Returns the verbosity level.
    pub fn verbosity(&self) -> u8 {
        self.verbosity
    }

    /// Whether the external tools should be asked for verbose output.
    pub fn tools_verbose(&self) -> bool {
        self.verbosity > 1
    }

    /// Whether compiler failures abort the build.
    pub fn strict(&self) -> bool {
        self.strict
    }

    /// Returns the command line recorded in the manifest.
    pub fn invocation(&self) -> &str {
        &self.invocation
    }

    /// Returns the tool overrides.
    pub fn tools(&self) -> &ToolPaths {
        &self.tools
    }

    /// File name of the archive `pkgdata` writes, `<name>.dat`.
    pub fn bundle_file_name(&self) -> String {
        format!("{}.dat", self.name)
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        name: String,
        source_dirs: Vec<PathBuf>,
        mode: PackageMode,
        dest_dir: PathBuf,
        endian: Endian,
        verbosity: u8,
        strict: bool,
        invocation: String,
        tools: ToolPaths,
    ) -> Self {
        Self {
            name,
            source_dirs,
            mode,
            dest_dir,
            endian,
            verbosity,
            strict,
            invocation,
            tools,
        }
    }
}
