//! External ICU tool invocation.
//!
//! Every call to `genrb`, `pkgdata` or `icupkg` goes through the
//! [`ToolRunner`] trait. The production implementation is [`CommandRunner`];
//! tests substitute a recording runner that fakes the tools' file output.
//!
//! - [`genrb`] - per-locale resource compilation
//! - [`pkgdata`] - packaging of compiled resources
//! - [`icupkg`] - byte swapping and unpacking of packaged bundles
//! - [`detection`] - resolving tool locations

pub mod detection;
pub mod genrb;
pub mod icupkg;
pub mod pkgdata;
mod runner;

#[cfg(test)]
pub(crate) mod mock;

pub use detection::Toolset;
pub use runner::CommandRunner;

use crate::bundler::{Error, Result};
use async_trait::async_trait;
use std::{
    ffi::{OsStr, OsString},
    fmt,
    path::{Path, PathBuf},
};

/// A single command line for an external tool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolInvocation {
    program: PathBuf,
    args: Vec<OsString>,
}

impl ToolInvocation {
    /// Starts a command line for `program`.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Appends one argument.
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    /// Appends an argument only when `condition` holds.
    pub fn arg_if(self, condition: bool, arg: impl AsRef<OsStr>) -> Self {
        if condition { self.arg(arg) } else { self }
    }

    /// Returns the program path.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Returns the arguments.
    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Short tool name, e.g. `genrb` for `/usr/bin/genrb`.
    pub fn tool_name(&self) -> String {
        self.program
            .file_stem()
            .unwrap_or(self.program.as_os_str())
            .to_string_lossy()
            .into_owned()
    }
}

impl fmt::Display for ToolInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            let arg = arg.to_string_lossy();
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " \"{arg}\"")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// Exit status and captured output of a finished tool.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToolOutput {
    /// Exit code, `None` if the process was terminated by a signal
    pub code: Option<i32>,
    /// Captured standard output
    pub stdout: String,
    /// Captured standard error
    pub stderr: String,
}

impl ToolOutput {
    /// Output of a process that exited with `code` and printed nothing.
    pub fn with_code(code: i32) -> Self {
        Self {
            code: Some(code),
            ..Default::default()
        }
    }

    /// Whether the tool exited with status 0.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Converts a non-zero exit into [`Error::ToolFailed`].
    pub fn check(&self, invocation: &ToolInvocation) -> Result<()> {
        if self.success() {
            Ok(())
        } else {
            Err(Error::ToolFailed {
                command: invocation.to_string(),
                code: self.code,
            })
        }
    }
}

/// Runs an external command to completion.
///
/// Implementations return `Err` only when the process could not be started;
/// a process that ran and failed is reported through [`ToolOutput::code`].
#[async_trait]
pub trait ToolRunner: Send + Sync {
    /// Runs `invocation` and waits for it to exit.
    async fn run(&self, invocation: &ToolInvocation) -> Result<ToolOutput>;
}
