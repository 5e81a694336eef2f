//! Process-backed [`ToolRunner`].

use super::{ToolInvocation, ToolOutput, ToolRunner};
use crate::bundler::{Error, Result};
use async_trait::async_trait;

/// Runs tools as child processes with `tokio::process`.
#[derive(Clone, Copy, Debug, Default)]
pub struct CommandRunner;

impl CommandRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ToolRunner for CommandRunner {
    async fn run(&self, invocation: &ToolInvocation) -> Result<ToolOutput> {
        log::debug!("# {}", invocation);

        let output = tokio::process::Command::new(invocation.program())
            .args(invocation.args())
            .output()
            .await
            .map_err(|error| Error::CommandFailed {
                command: invocation.tool_name(),
                error,
            })?;

        let result = ToolOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        for line in result.stdout.lines() {
            log::debug!("{}: {}", invocation.tool_name(), line);
        }
        for line in result.stderr.lines() {
            if result.success() {
                log::debug!("{}: {}", invocation.tool_name(), line);
            } else {
                log::warn!("{}: {}", invocation.tool_name(), line);
            }
        }

        Ok(result)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn captures_exit_code_and_output() {
        let invocation = ToolInvocation::new("sh")
            .arg("-c")
            .arg("echo hello; echo oops >&2; exit 3");

        let output = CommandRunner::new().run(&invocation).await.unwrap();

        assert_eq!(output.code, Some(3));
        assert_eq!(output.stdout.trim(), "hello");
        assert_eq!(output.stderr.trim(), "oops");
        assert!(!output.success());
    }

    #[tokio::test]
    async fn missing_program_is_command_failed() {
        let invocation = ToolInvocation::new("resbundler-no-such-tool");

        let err = CommandRunner::new().run(&invocation).await.unwrap_err();

        assert!(matches!(err, Error::CommandFailed { .. }));
        assert_eq!(err.exit_code(), 127);
    }
}
