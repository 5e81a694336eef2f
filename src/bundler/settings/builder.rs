//! Builder for constructing Settings.

use super::{Endian, PackageMode, Settings, ToolPaths};
use std::path::{Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// # Examples
///
/// ```
/// use resbundler::bundler::{Endian, SettingsBuilder};
///
/// # fn example() -> resbundler::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .name("myapp")
///     .source_dir("loc")
///     .source_dir("overrides")
///     .endian(Endian::Big)
///     .verbosity(2)
///     .build()?;
///
/// assert_eq!(settings.source_dirs().len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct SettingsBuilder {
    name: Option<String>,
    source_dirs: Vec<PathBuf>,
    mode: PackageMode,
    dest_dir: Option<PathBuf>,
    endian: Endian,
    verbosity: u8,
    strict: bool,
    invocation: Option<String>,
    tools: ToolPaths,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the bundle name.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Adds a directory to scan for `.txt` sources.
    ///
    /// # Required
    ///
    /// At least one source directory is required.
    pub fn source_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.source_dirs.push(path.as_ref().to_path_buf());
        self
    }

    /// Adds several source directories.
    pub fn source_dirs<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.source_dirs
            .extend(paths.into_iter().map(|p| p.as_ref().to_path_buf()));
        self
    }

    /// Sets the packaging mode.
    ///
    /// Default: [`PackageMode::Archive`]
    pub fn mode(mut self, mode: PackageMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the destination directory.
    ///
    /// Default: `.`
    pub fn dest_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.dest_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the target byte order.
    ///
    /// Default: [`Endian::Host`]
    pub fn endian(mut self, endian: Endian) -> Self {
        self.endian = endian;
        self
    }

    /// Sets the verbosity level.
    pub fn verbosity(mut self, level: u8) -> Self {
        self.verbosity = level;
        self
    }

    /// Makes compiler failures fatal.
    ///
    /// Default: false (failures are logged and ignored)
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Sets the command line recorded in the manifest header.
    pub fn invocation(mut self, invocation: impl Into<String>) -> Self {
        self.invocation = Some(invocation.into());
        self
    }

    /// Sets explicit tool locations.
    pub fn tools(mut self, tools: ToolPaths) -> Self {
        self.tools = tools;
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is missing or empty, or if no source
    /// directory was added.
    pub fn build(self) -> crate::bundler::Result<Settings> {
        use crate::bundler::error::Context;

        let name = self
            .name
            .filter(|name| !name.trim().is_empty())
            .context("bundle name is required")?;

        if self.source_dirs.is_empty() {
            crate::bail!("at least one source directory is required");
        }

        let invocation = self.invocation.unwrap_or_default();

        Ok(Settings::new(
            name,
            self.source_dirs,
            self.mode,
            self.dest_dir.unwrap_or_else(|| PathBuf::from(".")),
            self.endian,
            self.verbosity,
            self.strict,
            invocation,
            self.tools,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = SettingsBuilder::new()
            .name("myapp")
            .source_dir("loc")
            .build()
            .unwrap();

        assert_eq!(settings.dest_dir(), Path::new("."));
        assert_eq!(settings.scratch_dir(), Path::new("./tmp"));
        assert_eq!(settings.mode(), PackageMode::Archive);
        assert_eq!(settings.endian(), Endian::host());
        assert!(!settings.needs_swap());
        assert!(!settings.strict());
        assert!(!settings.tools_verbose());
    }

    #[test]
    fn name_is_required() {
        let err = SettingsBuilder::new().source_dir("loc").build().unwrap_err();
        assert!(err.to_string().contains("name"));

        let err = SettingsBuilder::new()
            .name("  ")
            .source_dir("loc")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn source_dir_is_required() {
        let err = SettingsBuilder::new().name("myapp").build().unwrap_err();
        assert!(err.to_string().contains("source directory"));
    }

    #[test]
    fn tools_verbose_from_second_level() {
        let settings = SettingsBuilder::new()
            .name("myapp")
            .source_dir("loc")
            .verbosity(2)
            .build()
            .unwrap();
        assert!(settings.tools_verbose());
    }
}
