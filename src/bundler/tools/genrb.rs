//! Resource compilation with `genrb`.

use super::{ToolInvocation, ToolRunner};
use crate::bundler::{
    Error, Result,
    locale::{EntryTable, LocaleEntry},
};
use std::path::Path;

/// Exit status of one `genrb` run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompileStatus {
    /// Locale that was compiled
    pub locale: String,
    /// Exit code; `None` if the tool could not be started or was killed
    pub code: Option<i32>,
}

impl CompileStatus {
    /// Whether `genrb` exited with 0.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Builds `genrb -d <out_dir> <source>`.
pub fn compile_invocation(genrb: &Path, out_dir: &Path, entry: &LocaleEntry) -> ToolInvocation {
    ToolInvocation::new(genrb)
        .arg("-d")
        .arg(out_dir)
        .arg(&entry.source)
}

/// Compiles every entry of `table` into `out_dir`, one process at a time.
///
/// In lenient mode a failing or unstartable `genrb` is only logged and the
/// build carries on with whatever `.res` files exist. In strict mode the first
/// failure is returned.
pub async fn compile_all(
    runner: &dyn ToolRunner,
    genrb: &Path,
    out_dir: &Path,
    table: &EntryTable,
    strict: bool,
) -> Result<Vec<CompileStatus>> {
    let mut statuses = Vec::with_capacity(table.len());

    for entry in table.iter() {
        let invocation = compile_invocation(genrb, out_dir, entry);

        let code = match runner.run(&invocation).await {
            Ok(output) => {
                if strict {
                    output.check(&invocation)?;
                } else if !output.success() {
                    log::warn!(
                        "genrb failed for {} ({}), continuing",
                        entry.id,
                        output
                            .code
                            .map_or_else(|| "signal".to_string(), |c| format!("exit code {c}"))
                    );
                }
                output.code
            }
            Err(e @ Error::CommandFailed { .. }) if !strict => {
                log::warn!("{}, continuing", e);
                None
            }
            Err(e) => return Err(e),
        };

        statuses.push(CompileStatus {
            locale: entry.id.clone(),
            code,
        });
    }

    Ok(statuses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::tools::mock::MockRunner;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn table(scratch: &Path, ids: &[&str]) -> EntryTable {
        let mut table = EntryTable::new(scratch);
        for id in ids {
            table.insert(LocaleEntry::new(*id, format!("loc/{id}.txt"), scratch));
        }
        table
    }

    #[tokio::test]
    async fn compiles_every_entry_in_order() {
        let dir = TempDir::new().unwrap();
        let runner = MockRunner::new();
        let table = table(dir.path(), &["root", "es"]);

        let statuses = compile_all(&runner, Path::new("genrb"), dir.path(), &table, false)
            .await
            .unwrap();

        let compiled: Vec<_> = statuses.iter().map(|s| s.locale.as_str()).collect();
        assert_eq!(compiled, ["res_index", "root", "es"]);
        assert!(statuses.iter().all(CompileStatus::success));

        let calls = runner.calls_to("genrb");
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[1].args()[0], "-d");
        assert_eq!(PathBuf::from(&calls[1].args()[2]), PathBuf::from("loc/root.txt"));
        assert!(dir.path().join("es.res").exists());
    }

    #[tokio::test]
    async fn lenient_mode_ignores_failures() {
        let dir = TempDir::new().unwrap();
        let runner = MockRunner::new().failing("genrb", 1);
        let table = table(dir.path(), &["root"]);

        let statuses = compile_all(&runner, Path::new("genrb"), dir.path(), &table, false)
            .await
            .unwrap();

        assert_eq!(statuses.len(), 2);
        assert!(statuses.iter().all(|s| s.code == Some(1)));
    }

    #[tokio::test]
    async fn strict_mode_stops_at_first_failure() {
        let dir = TempDir::new().unwrap();
        let runner = MockRunner::new().failing("genrb", 2);
        let table = table(dir.path(), &["root", "es"]);

        let err = compile_all(&runner, Path::new("genrb"), dir.path(), &table, true)
            .await
            .unwrap_err();

        assert_eq!(err.exit_code(), 2);
        assert_eq!(runner.calls_to("genrb").len(), 1);
    }

    #[tokio::test]
    async fn lenient_mode_survives_missing_compiler() {
        let dir = TempDir::new().unwrap();
        let runner = MockRunner::new().unstartable("genrb");
        let table = table(dir.path(), &["root"]);

        let statuses = compile_all(&runner, Path::new("genrb"), dir.path(), &table, false)
            .await
            .unwrap();

        assert!(statuses.iter().all(|s| s.code.is_none()));
    }
}
