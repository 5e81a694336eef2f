//! Byte swapping and unpacking with `icupkg`.
//!
//! `pkgdata` always writes host byte order. When another order is requested
//! the archive is moved into the scratch directory and rewritten back to its
//! final location by `icupkg`. For `files` mode the swapped archive is then
//! unpacked into `<dest>/<name>/`.

use super::{ToolInvocation, ToolRunner};
use crate::bundler::{
    Endian, PackageMode, Result, Settings, builder::Workspace, error::ErrorExt,
};
use std::path::Path;

/// Builds `icupkg -w -t<b|l> <input> <output> [-v]`.
pub fn swap_invocation(
    icupkg: &Path,
    endian: Endian,
    input: &Path,
    output: &Path,
    verbose: bool,
) -> ToolInvocation {
    ToolInvocation::new(icupkg)
        .arg("-w")
        .arg(format!("-t{}", endian.icupkg_type()))
        .arg(input)
        .arg(output)
        .arg_if(verbose, "-v")
}

/// Builds `icupkg -t<b|l> -x <manifest> -d <dir>/ <archive> [-v]`.
pub fn unpack_invocation(
    icupkg: &Path,
    endian: Endian,
    manifest: &Path,
    out_dir: &Path,
    archive: &Path,
    verbose: bool,
) -> ToolInvocation {
    // icupkg wants the trailing separator on the output directory
    let mut out_dir = out_dir.as_os_str().to_os_string();
    out_dir.push(std::path::MAIN_SEPARATOR_STR);

    ToolInvocation::new(icupkg)
        .arg(format!("-t{}", endian.icupkg_type()))
        .arg("-x")
        .arg(manifest)
        .arg("-d")
        .arg(out_dir)
        .arg(archive)
        .arg_if(verbose, "-v")
}

/// Rewrites the packaged bundle in the requested byte order.
///
/// Only call this when [`Settings::needs_swap`] is true.
pub async fn normalize(
    runner: &dyn ToolRunner,
    icupkg: &Path,
    settings: &Settings,
    workspace: &Workspace,
) -> Result<()> {
    let endian = settings.endian();
    let verbose = settings.tools_verbose();
    let bundle = workspace.bundle_path(settings);
    let staged = workspace.staged_bundle_path(settings);

    log::info!("# {} -> {}", bundle.display(), staged.display());
    tokio::fs::rename(&bundle, &staged)
        .await
        .fs_context("moving bundle into scratch directory", &bundle)?;

    let swap = swap_invocation(icupkg, endian, &staged, &bundle, verbose);
    let output = runner.run(&swap).await?;
    if !output.success() {
        log::error!("# Swap command failed: {}", swap);
    }
    output.check(&swap)?;

    if settings.mode() == PackageMode::Files {
        let unpack_dir = workspace.unpack_dir(settings);
        tokio::fs::create_dir_all(&unpack_dir)
            .await
            .fs_context("creating unpack directory", &unpack_dir)?;

        let unpack = unpack_invocation(
            icupkg,
            endian,
            &workspace.manifest_path(),
            &unpack_dir,
            &bundle,
            verbose,
        );
        let output = runner.run(&unpack).await?;
        if !output.success() {
            log::error!("# Unpack command failed: {}", unpack);
        }
        output.check(&unpack)?;
    }

    log::info!("Swapped {} to {} endian", bundle.display(), endian);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::{SettingsBuilder, tools::mock::MockRunner};
    use tempfile::TempDir;

    fn opposite() -> Endian {
        match Endian::host() {
            Endian::Big => Endian::Little,
            _ => Endian::Big,
        }
    }

    async fn prepared(mode: PackageMode) -> (TempDir, Settings, Workspace) {
        let dir = TempDir::new().unwrap();
        let settings = SettingsBuilder::new()
            .name("myapp")
            .source_dir("loc")
            .dest_dir(dir.path())
            .mode(mode)
            .endian(opposite())
            .build()
            .unwrap();
        let workspace = Workspace::init(&settings).await.unwrap();
        std::fs::write(workspace.bundle_path(&settings), b"host order").unwrap();
        (dir, settings, workspace)
    }

    #[test]
    fn swap_uses_requested_type_letter() {
        let invocation = swap_invocation(
            Path::new("icupkg"),
            Endian::Little,
            Path::new("out/tmp/myapp.dat"),
            Path::new("out/myapp.dat"),
            false,
        );
        assert_eq!(
            invocation.to_string(),
            "icupkg -w -tl out/tmp/myapp.dat out/myapp.dat"
        );
    }

    #[tokio::test]
    async fn archive_mode_swaps_once() {
        let (_dir, settings, workspace) = prepared(PackageMode::Archive).await;
        let runner = MockRunner::new();

        normalize(&runner, Path::new("icupkg"), &settings, &workspace)
            .await
            .unwrap();

        let calls = runner.calls_to("icupkg");
        assert_eq!(calls.len(), 1);
        assert!(workspace.staged_bundle_path(&settings).exists());
        assert!(workspace.bundle_path(&settings).exists());
        assert!(!workspace.unpack_dir(&settings).exists());
    }

    #[tokio::test]
    async fn files_mode_unpacks_after_swap() {
        let (_dir, settings, workspace) = prepared(PackageMode::Files).await;
        let runner = MockRunner::new();

        normalize(&runner, Path::new("icupkg"), &settings, &workspace)
            .await
            .unwrap();

        let calls = runner.calls_to("icupkg");
        assert_eq!(calls.len(), 2);
        assert!(calls[1].args().iter().any(|a| a == "-x"));
        assert!(workspace.unpack_dir(&settings).is_dir());
    }

    #[tokio::test]
    async fn files_mode_reuses_existing_unpack_dir() {
        let (_dir, settings, workspace) = prepared(PackageMode::Files).await;
        std::fs::create_dir_all(workspace.unpack_dir(&settings)).unwrap();
        let runner = MockRunner::new();

        normalize(&runner, Path::new("icupkg"), &settings, &workspace)
            .await
            .unwrap();

        assert_eq!(runner.calls_to("icupkg").len(), 2);
    }

    #[tokio::test]
    async fn unpack_dir_blocked_by_file_fails() {
        let (_dir, settings, workspace) = prepared(PackageMode::Files).await;
        std::fs::write(workspace.unpack_dir(&settings), b"not a dir").unwrap();
        let runner = MockRunner::new();

        let err = normalize(&runner, Path::new("icupkg"), &settings, &workspace)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("creating unpack directory"));
        assert_eq!(runner.calls_to("icupkg").len(), 1);
    }

    #[tokio::test]
    async fn swap_failure_skips_unpack() {
        let (_dir, settings, workspace) = prepared(PackageMode::Files).await;
        let runner = MockRunner::new().failing("icupkg", 9);

        let err = normalize(&runner, Path::new("icupkg"), &settings, &workspace)
            .await
            .unwrap_err();

        assert_eq!(err.exit_code(), 9);
        assert_eq!(runner.calls_to("icupkg").len(), 1);
    }
}
