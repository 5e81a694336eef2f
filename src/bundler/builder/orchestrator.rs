//! Main bundler orchestration and coordination.
//!
//! This module provides the [`Bundler`] orchestrator that runs the build
//! pipeline from source discovery to the final, possibly byte-swapped, bundle.

use super::Workspace;
use crate::bundler::{
    Error, PackageMode, Result, Settings,
    locale::{self, index},
    tools::{CommandRunner, ToolRunner, Toolset, genrb, genrb::CompileStatus, icupkg, pkgdata},
};
use std::path::PathBuf;

/// Outcome of a successful build.
#[derive(Clone, Debug)]
pub struct BundleReport {
    /// Bundle file, or directory for `files` mode
    pub artifact: PathBuf,
    /// Entries compiled, including the generated index
    pub entries: usize,
    /// Exit status of every `genrb` run, in compile order
    pub compiled: Vec<CompileStatus>,
    /// Mode handed to `pkgdata`
    pub packaged_as: PackageMode,
    /// Whether `icupkg` rewrote the bundle
    pub swapped: bool,
}

impl BundleReport {
    /// Locales whose compilation did not succeed.
    pub fn failed_locales(&self) -> impl Iterator<Item = &str> {
        self.compiled
            .iter()
            .filter(|s| !s.success())
            .map(|s| s.locale.as_str())
    }
}

/// Main bundler orchestrator.
///
/// Owns the settings, the resolved tool paths and the [`ToolRunner`] every
/// external invocation goes through. Steps run strictly one after another:
///
/// 1. Create `<dest>` and `<dest>/tmp`
/// 2. Reject byte swapping for modes `icupkg` cannot handle
/// 3. Collect `.txt` sources into the entry table
/// 4. Write `icufiles.lst` and `res_index.txt`
/// 5. Run `genrb` for every entry
/// 6. Run `pkgdata` once
/// 7. Swap (and for `files` mode unpack) with `icupkg` if needed
///
/// # Examples
///
/// ```no_run
/// use resbundler::bundler::{Bundler, SettingsBuilder};
///
/// # async fn example() -> resbundler::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .name("myapp")
///     .source_dir("loc")
///     .dest_dir("out")
///     .build()?;
///
/// let report = Bundler::new(settings).bundle().await?;
/// println!("Created {}", report.artifact.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Bundler<R: ToolRunner = CommandRunner> {
    settings: Settings,
    tools: Toolset,
    runner: R,
}

impl Bundler<CommandRunner> {
    /// Creates a bundler that spawns the real ICU tools.
    ///
    /// Tool locations come from the settings or are looked up on `PATH`.
    pub fn new(settings: Settings) -> Self {
        let tools = Toolset::resolve(settings.tools());
        Self::with_runner(settings, tools, CommandRunner::new())
    }
}

impl<R: ToolRunner> Bundler<R> {
    /// Creates a bundler with an explicit toolset and runner.
    pub fn with_runner(settings: Settings, tools: Toolset, runner: R) -> Self {
        Self {
            settings,
            tools,
            runner,
        }
    }

    /// Returns a reference to the bundler settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the runner used for tool invocations.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Runs the whole pipeline.
    ///
    /// # Errors
    ///
    /// - filesystem errors while creating the workspace or writing files
    /// - [`Error::UnsupportedSwapMode`] before any tool runs
    /// - [`Error::ToolFailed`] from `pkgdata`, `icupkg`, or `genrb` in strict mode
    pub async fn bundle(&self) -> Result<BundleReport> {
        let settings = &self.settings;
        let workspace = Workspace::init(settings).await?;

        let swapping = settings.needs_swap();
        if swapping && !settings.mode().supports_swap() {
            return Err(Error::UnsupportedSwapMode {
                mode: settings.mode().to_string(),
            });
        }

        let table = locale::collect(settings.source_dirs(), workspace.scratch());
        log::info!("Collected {} locales", table.locales().count());

        index::write_manifest(&workspace.manifest_path(), settings, &table).await?;
        index::write_index_source(&workspace.index_source_path(), &table).await?;

        let compiled = genrb::compile_all(
            &self.runner,
            &self.tools.genrb,
            workspace.scratch(),
            &table,
            settings.strict(),
        )
        .await?;

        let packaged_as = settings.mode().effective(swapping);
        pkgdata::package(
            &self.runner,
            &self.tools.pkgdata,
            settings,
            &workspace,
            packaged_as,
        )
        .await?;

        if swapping {
            icupkg::normalize(&self.runner, &self.tools.icupkg, settings, &workspace).await?;
        } else {
            log::debug!("Target is host endian ({}), no swap needed", settings.endian());
        }

        let artifact = match (settings.mode(), swapping) {
            (PackageMode::Files, true) => workspace.unpack_dir(settings),
            (PackageMode::Archive | PackageMode::Common, _) => workspace.bundle_path(settings),
            _ => workspace.dest().to_path_buf(),
        };

        Ok(BundleReport {
            artifact,
            entries: table.len(),
            compiled,
            packaged_as,
            swapped: swapping,
        })
    }
}
