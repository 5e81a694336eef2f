//! Destination and scratch directory layout.

use crate::bundler::{Result, Settings, error::ErrorExt};
use std::path::{Path, PathBuf};

/// Manifest file consumed by `pkgdata`.
pub const MANIFEST_FILE_NAME: &str = "icufiles.lst";

/// Generated locale index source.
pub const INDEX_SOURCE_FILE_NAME: &str = "res_index.txt";

/// Paths of one build.
///
/// ```text
/// <dest>/
///   <name>.dat            packaged bundle
///   <name>/               unpacked files (swapped files mode)
///   tmp/
///     icufiles.lst
///     res_index.txt
///     <locale>.res
///     <name>.dat          pre-swap bundle
/// ```
#[derive(Clone, Debug)]
pub struct Workspace {
    dest: PathBuf,
    scratch: PathBuf,
}

impl Workspace {
    /// Computes the layout without touching the filesystem.
    pub fn new(settings: &Settings) -> Self {
        Self {
            dest: settings.dest_dir().to_path_buf(),
            scratch: settings.scratch_dir(),
        }
    }

    /// Creates the destination and scratch directories.
    ///
    /// Existing directories are reused. Any other failure is returned as is,
    /// without cleaning up what was already created.
    pub async fn init(settings: &Settings) -> Result<Self> {
        let workspace = Self::new(settings);

        log::info!("mkdir {}", workspace.dest.display());
        tokio::fs::create_dir_all(&workspace.dest)
            .await
            .fs_context("creating destination directory", &workspace.dest)?;
        tokio::fs::create_dir_all(&workspace.scratch)
            .await
            .fs_context("creating scratch directory", &workspace.scratch)?;

        Ok(workspace)
    }

    pub fn dest(&self) -> &Path {
        &self.dest
    }

    pub fn scratch(&self) -> &Path {
        &self.scratch
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.scratch.join(MANIFEST_FILE_NAME)
    }

    pub fn index_source_path(&self) -> PathBuf {
        self.scratch.join(INDEX_SOURCE_FILE_NAME)
    }

    /// Final bundle, `<dest>/<name>.dat`.
    pub fn bundle_path(&self, settings: &Settings) -> PathBuf {
        self.dest.join(settings.bundle_file_name())
    }

    /// Where the host-order bundle is parked before swapping.
    pub fn staged_bundle_path(&self, settings: &Settings) -> PathBuf {
        self.scratch.join(settings.bundle_file_name())
    }

    /// Target of the post-swap unpack in files mode, `<dest>/<name>`.
    pub fn unpack_dir(&self, settings: &Settings) -> PathBuf {
        self.dest.join(settings.name())
    }
}
