//! Recording tool runner for tests.
//!
//! Instead of spawning processes it writes the files the real ICU tools
//! would produce, so later pipeline steps find their inputs.

use super::{ToolInvocation, ToolOutput, ToolRunner};
use crate::bundler::{Error, Result};
use async_trait::async_trait;
use std::{
    collections::{HashMap, HashSet},
    ffi::OsString,
    io,
    path::{Path, PathBuf},
    sync::Mutex,
};

#[derive(Debug, Default)]
pub(crate) struct MockRunner {
    calls: Mutex<Vec<ToolInvocation>>,
    failures: HashMap<String, i32>,
    unstartable: HashSet<String>,
}

impl MockRunner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Makes every run of `tool` exit with `code` without producing files.
    pub(crate) fn failing(mut self, tool: &str, code: i32) -> Self {
        self.failures.insert(tool.to_string(), code);
        self
    }

    /// Makes every run of `tool` fail to spawn.
    pub(crate) fn unstartable(mut self, tool: &str) -> Self {
        self.unstartable.insert(tool.to_string());
        self
    }

    pub(crate) fn calls(&self) -> Vec<ToolInvocation> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn calls_to(&self, tool: &str) -> Vec<ToolInvocation> {
        self.calls()
            .into_iter()
            .filter(|call| call.tool_name() == tool)
            .collect()
    }
}

#[async_trait]
impl ToolRunner for MockRunner {
    async fn run(&self, invocation: &ToolInvocation) -> Result<ToolOutput> {
        self.calls.lock().unwrap().push(invocation.clone());

        let tool = invocation.tool_name();
        if self.unstartable.contains(&tool) {
            return Err(Error::CommandFailed {
                command: tool,
                error: io::Error::new(io::ErrorKind::NotFound, "mock: not installed"),
            });
        }
        if let Some(code) = self.failures.get(&tool) {
            return Ok(ToolOutput::with_code(*code));
        }

        simulate(&tool, invocation.args())?;
        Ok(ToolOutput::with_code(0))
    }
}

fn value_after(args: &[OsString], flag: &str) -> Option<PathBuf> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(PathBuf::from)
}

fn simulate(tool: &str, args: &[OsString]) -> io::Result<()> {
    let last = |n: usize| args.iter().rev().filter(|a| *a != "-v").nth(n).map(PathBuf::from);

    match tool {
        "genrb" => {
            let (Some(out_dir), Some(source)) = (value_after(args, "-d"), last(0)) else {
                return Ok(());
            };
            let stem = source.file_stem().unwrap_or_default().to_os_string();
            std::fs::write(out_dir.join(stem).with_extension("res"), b"res")
        }
        "pkgdata" => {
            let (Some(dest), Some(name)) = (value_after(args, "-d"), value_after(args, "-p"))
            else {
                return Ok(());
            };
            if value_after(args, "-m").as_deref() == Some(Path::new("files")) {
                std::fs::create_dir_all(dest.join(name))
            } else {
                std::fs::write(dest.join(name).with_extension("dat"), b"dat")
            }
        }
        "icupkg" if args.iter().any(|a| a == "-x") => {
            let Some(out_dir) = value_after(args, "-d") else {
                return Ok(());
            };
            std::fs::create_dir_all(&out_dir)?;
            std::fs::write(out_dir.join("root.res"), b"res")
        }
        "icupkg" => {
            let (Some(output), Some(input)) = (last(0), last(1)) else {
                return Ok(());
            };
            std::fs::copy(input, output).map(|_| ())
        }
        _ => Ok(()),
    }
}
