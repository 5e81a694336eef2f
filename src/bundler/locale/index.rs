//! Manifest and locale index generation.
//!
//! Both files are rendered in memory and written in one pass. A failed write
//! leaves a truncated file behind.

use super::EntryTable;
use crate::bundler::{Result, Settings, error::ErrorExt};
use std::path::Path;
use tokio::io::AsyncWriteExt;

/// Program name recorded in generated files.
const GENERATOR: &str = env!("CARGO_PKG_NAME");

/// Renders the `pkgdata` file list.
///
/// Three comment lines of header, then a `# <source>` / `<id>.res` pair per
/// entry, index entry first.
pub fn render_manifest(settings: &Settings, table: &EntryTable) -> String {
    let mut out = format!(
        "# list for \"{}\" generated by {} on (now)\n# args: {}\n#\n",
        settings.name(),
        GENERATOR,
        settings.invocation()
    );

    for entry in table.iter() {
        out.push_str(&format!(
            "# {}\n{}\n",
            entry.source.display(),
            entry.compiled_file_name()
        ));
    }
    out
}

/// Renders `res_index.txt`, listing every discovered locale as installed.
pub fn render_index_source(table: &EntryTable) -> String {
    let mut out = format!("// Warning, this file is autogenerated by {GENERATOR}\n");
    out.push_str("res_index:table(nofallback) {\n");
    out.push_str(" InstalledLocales:table {\n");
    for id in table.locales() {
        out.push_str(&format!("  {id} {{\"\"}}\n"));
    }
    out.push_str(" }\n");
    out.push_str("}\n");
    out
}

/// Writes the manifest to `path`.
pub async fn write_manifest(path: &Path, settings: &Settings, table: &EntryTable) -> Result<()> {
    log::info!(">{}", path.display());
    write_file(path, &render_manifest(settings, table)).await
}

/// Writes the locale index source to `path`.
pub async fn write_index_source(path: &Path, table: &EntryTable) -> Result<()> {
    log::info!(">{}", path.display());
    write_file(path, &render_index_source(table)).await
}

async fn write_file(path: &Path, contents: &str) -> Result<()> {
    let file = tokio::fs::File::create(path)
        .await
        .fs_context("creating file", path)?;
    let mut writer = tokio::io::BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .await
        .fs_context("writing file", path)?;
    writer.flush().await.fs_context("writing file", path)?;
    Ok(())
}
