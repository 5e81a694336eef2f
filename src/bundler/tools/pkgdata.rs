//! Packaging with `pkgdata`.

use super::{ToolInvocation, ToolRunner};
use crate::bundler::{PackageMode, Result, Settings, builder::Workspace};
use std::path::Path;

/// Builds the `pkgdata` command line.
///
/// `pkgdata -m <mode> -T <scratch> -p <name> -s <scratch> -d <dest> <manifest> [-v]`
pub fn package_invocation(
    pkgdata: &Path,
    settings: &Settings,
    workspace: &Workspace,
    mode: PackageMode,
) -> ToolInvocation {
    ToolInvocation::new(pkgdata)
        .arg("-m")
        .arg(mode.as_str())
        .arg("-T")
        .arg(workspace.scratch())
        .arg("-p")
        .arg(settings.name())
        .arg("-s")
        .arg(workspace.scratch())
        .arg("-d")
        .arg(workspace.dest())
        .arg(workspace.manifest_path())
        .arg_if(settings.tools_verbose(), "-v")
}

/// Packages the compiled resources listed in the manifest.
///
/// A non-zero exit aborts the build with the packager's exit code.
pub async fn package(
    runner: &dyn ToolRunner,
    pkgdata: &Path,
    settings: &Settings,
    workspace: &Workspace,
    mode: PackageMode,
) -> Result<()> {
    log::info!("Packaging {} (mode={})", settings.name(), mode);

    let invocation = package_invocation(pkgdata, settings, workspace, mode);
    let output = runner.run(&invocation).await?;

    if !output.success() {
        log::error!("# Command failed: {}", invocation);
    }
    output.check(&invocation)
}
